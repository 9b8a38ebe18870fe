use std::ops::{Index, IndexMut};

use glam::Vec2;

use crate::api::types::CameraId;
use crate::renderer::rect::ScreenRect;

/// Smallest zoom factor a camera will accept.
pub const MIN_ZOOM: f32 = 0.05;

/// Pan/zoom camera projecting normalized world units onto screen pixels.
///
/// One world unit spans the full screen width at zoom 1. Both axes are
/// scaled by the screen width so world space keeps square pixels.
#[derive(Debug, Clone)]
pub struct Camera {
    /// World-space point shown at the screen center.
    pub pan: Vec2,
    /// Zoom factor, always >= `MIN_ZOOM`.
    zoom: f32,
    /// Screen size in pixels.
    screen: Vec2,
}

impl Camera {
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
            screen: Vec2::new(screen_width, screen_height),
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.pan
    }

    pub fn set_pos(&mut self, pos: Vec2) {
        self.pan = pos;
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.max(MIN_ZOOM);
    }

    /// Additive zoom change, clamped to `MIN_ZOOM`.
    pub fn dzoom(&mut self, delta: f32) {
        self.set_zoom(self.zoom + delta);
    }

    pub fn screen_size(&self) -> Vec2 {
        self.screen
    }

    /// Pixels per world unit at the current zoom.
    pub fn scale(&self) -> f32 {
        self.zoom * self.screen.x
    }

    /// Map a world-space point to screen pixels.
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.pan) * self.scale() + self.screen / 2.0
    }

    /// Project an item centered at `world_pos` with `world_size` into a screen rect.
    pub fn project(&self, world_pos: Vec2, world_size: Vec2) -> ScreenRect {
        ScreenRect::from_center(self.world_to_screen(world_pos), world_size * self.scale())
    }

    /// Whether a projected rect overlaps the visible screen area.
    pub fn is_rect_visible(&self, rect: &ScreenRect) -> bool {
        rect.right() >= 0.0
            && rect.x <= self.screen.x
            && rect.bottom() >= 0.0
            && rect.y <= self.screen.y
    }
}

/// Arena of cameras owned by a scene. Items refer to entries by `CameraId`.
///
/// Cameras are never removed individually; the arena is dropped with its scene,
/// so every id it handed out stays valid for the scene's lifetime.
/// Indexing with a `CameraId` handed out by a different arena panics; use
/// `get`/`get_mut` when the id's origin is not known.
#[derive(Debug, Clone, Default)]
pub struct Cameras {
    cameras: Vec<Camera>,
}

impl Cameras {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a camera and return its key.
    pub fn add(&mut self, camera: Camera) -> CameraId {
        let id = CameraId(self.cameras.len() as u32);
        self.cameras.push(camera);
        id
    }

    pub fn get(&self, id: CameraId) -> Option<&Camera> {
        self.cameras.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: CameraId) -> Option<&mut Camera> {
        self.cameras.get_mut(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }
}

impl Index<CameraId> for Cameras {
    type Output = Camera;

    fn index(&self, id: CameraId) -> &Camera {
        &self.cameras[id.0 as usize]
    }
}

impl IndexMut<CameraId> for Cameras {
    fn index_mut(&mut self, id: CameraId) -> &mut Camera {
        &mut self.cameras[id.0 as usize]
    }
}
