pub mod camera;
pub mod instance;
pub mod rect;
pub mod traits;

pub use traits::Surface;
