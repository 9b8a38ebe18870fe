use glam::Vec2;

use crate::api::types::{CameraId, ImageHandle};
use crate::assets::error::AssetError;
use crate::assets::registry::ImageRegistry;
use crate::components::drawable::Drawable;
use crate::renderer::camera::Cameras;
use crate::renderer::rect::ScreenRect;
use crate::renderer::traits::Surface;

/// A single camera-projected image.
///
/// Position is the item's center in world units, relative to whatever its
/// camera is looking at. Rotation only affects how the image is drawn; the
/// bounding rect used for collisions ignores it.
#[derive(Debug, Clone)]
pub struct Item {
    pos: Vec2,
    size: Vec2,
    /// Rotation in degrees.
    rotation: f32,
    z: i32,
    /// Image to draw (items without one are invisible).
    image: Option<ImageHandle>,
    camera: CameraId,
}

impl Item {
    /// Create an item at the origin with zero size, viewed through `camera`.
    pub fn new(camera: CameraId) -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Vec2::ZERO,
            rotation: 0.0,
            z: 0,
            image: None,
            camera,
        }
    }

    /// Create an item showing `image_id`, failing if the registry does not know it.
    pub fn with_image_id(
        camera: CameraId,
        pos: Vec2,
        size: Vec2,
        images: &ImageRegistry,
        image_id: &str,
    ) -> Result<Self, AssetError> {
        let image = images.resolve(image_id)?;
        Ok(Self::new(camera).with_pos(pos).with_size(size).with_image(image))
    }

    // -- Builder pattern --

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.set_size(size);
        self
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }

    pub fn with_image(mut self, image: ImageHandle) -> Self {
        self.image = Some(image);
        self
    }

    // -- Mutators --

    /// Negative components are clamped to zero.
    pub fn set_size(&mut self, size: Vec2) {
        self.size = size.max(Vec2::ZERO);
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    pub fn set_z_value(&mut self, z: i32) {
        self.z = z;
    }

    pub fn set_image(&mut self, image: ImageHandle) {
        self.image = Some(image);
    }

    /// Switch to the image registered under `id`.
    /// On an unknown id the current image is kept and the error is returned.
    pub fn load_image(&mut self, images: &ImageRegistry, id: &str) -> Result<(), AssetError> {
        let handle = images.resolve(id)?;
        self.image = Some(handle);
        Ok(())
    }

    // -- Queries --

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn image(&self) -> Option<ImageHandle> {
        self.image
    }

    pub fn camera(&self) -> CameraId {
        self.camera
    }
}

impl Drawable for Item {
    fn draw(&self, cameras: &Cameras, surface: &mut dyn Surface) {
        let Some(image) = self.image else { return };
        let camera = &cameras[self.camera];
        let rect = camera.project(self.pos, self.size);
        if camera.is_rect_visible(&rect) {
            surface.blit(image, rect, self.rotation);
        }
    }

    fn rect(&self, cameras: &Cameras) -> ScreenRect {
        cameras[self.camera].project(self.pos, self.size)
    }

    fn z_value(&self) -> i32 {
        self.z
    }

    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
    }
}
