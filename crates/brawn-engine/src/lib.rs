pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod runner;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig};
pub use api::types::{CameraId, ImageHandle, ItemId};
pub use assets::error::AssetError;
pub use assets::manifest::{AssetManifest, ImageDescriptor};
pub use assets::registry::ImageRegistry;
pub use components::composite::{ChildIndex, CompositeItem};
pub use components::drawable::Drawable;
pub use components::item::Item;
pub use components::layer::RenderLayer;
pub use core::scene::Scene;
pub use core::time::FixedTimestep;
pub use input::queue::{InputEvent, InputQueue, Key};
pub use renderer::camera::{Camera, Cameras, MIN_ZOOM};
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use renderer::rect::ScreenRect;
pub use renderer::traits::Surface;
pub use runner::GameRunner;
