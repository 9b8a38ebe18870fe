//! Output contract between the engine and whatever actually puts pixels on screen.
//!
//! The engine never owns a window or a GPU context. Items draw themselves by
//! calling `blit` on a `Surface`; `RenderBuffer` is the in-memory implementation
//! the runner uses, and a windowed backend can implement the trait directly.

use crate::api::types::ImageHandle;
use crate::renderer::rect::ScreenRect;

/// A drawing target that accepts image blits in screen space.
///
/// # Example Implementation
///
/// ```ignore
/// struct CanvasSurface {
///     canvas: Canvas,
///     textures: Vec<Texture>,
/// }
///
/// impl Surface for CanvasSurface {
///     fn clear(&mut self) {
///         self.canvas.fill(Color::BLACK);
///     }
///
///     fn blit(&mut self, image: ImageHandle, rect: ScreenRect, rotation_deg: f32) {
///         let tex = &self.textures[image.0 as usize];
///         self.canvas.draw_rotated(tex, rect, rotation_deg);
///     }
/// }
/// ```
pub trait Surface {
    /// Start a new frame.
    fn clear(&mut self);

    /// Draw `image` stretched into `rect`, rotated by `rotation_deg` around the rect center.
    fn blit(&mut self, image: ImageHandle, rect: ScreenRect, rotation_deg: f32);
}
