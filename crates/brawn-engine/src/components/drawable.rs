use glam::Vec2;

use crate::renderer::camera::Cameras;
use crate::renderer::rect::ScreenRect;
use crate::renderer::traits::Surface;

/// Anything a scene can own: advanced once per frame, then drawn in z order.
///
/// `update` must be safe to call every frame unconditionally. `draw` only reads
/// state, so the draw pass always sees a fully updated frame.
pub trait Drawable {
    /// Advance internal state by one frame. No-op by default.
    fn update(&mut self) {}

    /// Project through the item's camera and blit onto `surface`.
    fn draw(&self, cameras: &Cameras, surface: &mut dyn Surface);

    /// Current screen-space bounding rect, as used for collision tests.
    fn rect(&self, cameras: &Cameras) -> ScreenRect;

    /// Draw-order key. Lower values draw first.
    fn z_value(&self) -> i32;

    fn pos(&self) -> Vec2;

    fn set_pos(&mut self, pos: Vec2);
}
