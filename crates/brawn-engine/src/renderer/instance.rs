use bytemuck::{Pod, Zeroable};

use crate::api::types::ImageHandle;
use crate::renderer::rect::ScreenRect;
use crate::renderer::traits::Surface;

/// One recorded blit: an image drawn into a screen rect.
/// 6 floats = 24 bytes stride, so a frame can be handed to a backend as one slice.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// Left edge in screen pixels.
    pub x: f32,
    /// Top edge in screen pixels.
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Rotation in degrees, counter-clockwise around the rect center.
    pub rotation: f32,
    /// Image handle index.
    pub image: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 6;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn rect(&self) -> ScreenRect {
        ScreenRect::new(self.x, self.y, self.w, self.h)
    }

    pub fn image(&self) -> ImageHandle {
        ImageHandle(self.image as u32)
    }
}

/// Draw list for one frame, in blit order.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Flat float view of the frame for a backend upload.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for RenderBuffer {
    fn clear(&mut self) {
        self.instances.clear();
    }

    fn blit(&mut self, image: ImageHandle, rect: ScreenRect, rotation_deg: f32) {
        self.push(RenderInstance {
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
            rotation: rotation_deg,
            image: image.0 as f32,
        });
    }
}
