use serde::{Deserialize, Serialize};

use crate::assets::error::AssetError;
use crate::assets::registry::ImageRegistry;
use crate::input::queue::InputEvent;
use crate::renderer::traits::Surface;

/// Configuration for the engine, provided by the game.
/// Every field has a default, so a JSON config only needs the fields it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Delay between ticks in milliseconds (default: 40).
    pub tick_ms: u32,
    /// Screen width in pixels (default: 1200).
    pub screen_width: f32,
    /// Screen height in pixels (default: width / (16/9)).
    pub screen_height: f32,
    /// Initial capacity of the per-frame render buffer (default: 512).
    pub max_instances: usize,
}

impl GameConfig {
    pub const DEFAULT_WIDTH: f32 = 1200.0;
    pub const DEFAULT_RATIO: f32 = 16.0 / 9.0;

    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: 40,
            screen_width: Self::DEFAULT_WIDTH,
            screen_height: (Self::DEFAULT_WIDTH / Self::DEFAULT_RATIO).floor(),
            max_instances: 512,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Build the initial scene. Asset errors abort startup.
    fn init(&mut self, ctx: &mut EngineContext) -> Result<(), AssetError>;

    /// React to one input event. Called before `update` for every event of the frame.
    fn handle_input(&mut self, _ctx: &mut EngineContext, _event: &InputEvent) {}

    /// The game loop tick: move cameras, update items, resolve collisions.
    fn update(&mut self, ctx: &mut EngineContext);

    /// Read-only draw pass. Runs after `update` has finished for the frame.
    fn draw(&self, surface: &mut dyn Surface);
}

/// Engine state shared with the game during init and update.
pub struct EngineContext {
    pub config: GameConfig,
    pub images: ImageRegistry,
    frame: u64,
    quit: bool,
}

impl EngineContext {
    pub fn new(config: GameConfig, images: ImageRegistry) -> Self {
        Self {
            config,
            images,
            frame: 0,
            quit: false,
        }
    }

    /// Number of completed update ticks.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub(crate) fn advance_frame(&mut self) {
        self.frame += 1;
    }

    /// Ask the runner to stop after the current frame.
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}
