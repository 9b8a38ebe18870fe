use crate::api::game::{EngineContext, Game};
use crate::assets::error::AssetError;
use crate::assets::registry::ImageRegistry;
use crate::core::time::FixedTimestep;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::instance::RenderBuffer;
use crate::renderer::traits::Surface;

/// Generic game runner that wires up the frame loop.
///
/// Each tick: check for quit, dispatch pending input, update, then rebuild
/// the render buffer from the fully updated state.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    initialized: bool,
    running: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G, images: ImageRegistry) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::from_millis(config.tick_ms);
        let render_buffer = RenderBuffer::with_capacity(config.max_instances);

        Self {
            game,
            ctx: EngineContext::new(config, images),
            input: InputQueue::new(),
            render_buffer,
            timestep,
            initialized: false,
            running: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) -> Result<(), AssetError> {
        self.game.init(&mut self.ctx)?;
        self.initialized = true;
        self.running = true;
        log::info!(
            "runner: initialized ({}x{}, {} ms tick)",
            self.ctx.config.screen_width,
            self.ctx.config.screen_height,
            self.ctx.config.tick_ms
        );
        Ok(())
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Advance by `dt` seconds of wall time, running as many fixed ticks as fit.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized || !self.running {
            return;
        }

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.step();
            if !self.running {
                return;
            }
        }
    }

    /// Run exactly one frame, ignoring wall time.
    pub fn step(&mut self) {
        if !self.initialized || !self.running {
            return;
        }

        // Quit is checked before any other input of the frame is dispatched
        if self.input.has_quit() {
            log::info!("runner: quit requested at frame {}", self.ctx.frame());
            self.input.drain();
            self.running = false;
            return;
        }

        for event in self.input.drain() {
            self.game.handle_input(&mut self.ctx, &event);
        }

        self.game.update(&mut self.ctx);
        self.ctx.advance_frame();

        self.render_buffer.clear();
        self.game.draw(&mut self.render_buffer);

        if self.ctx.quit_requested() {
            log::info!("runner: game stopped at frame {}", self.ctx.frame());
            self.running = false;
        }
    }

    /// Run frames at the fixed tick rate until the game stops or `max_frames`
    /// frames have run. `before_frame` is called ahead of every frame, so a host
    /// can feed input.
    pub fn run<F>(&mut self, max_frames: u64, mut before_frame: F)
    where
        F: FnMut(&mut Self),
    {
        let dt = self.timestep.dt();
        let delay = self.timestep.tick_duration();
        while self.running && self.ctx.frame() < max_frames {
            before_frame(self);
            self.tick(dt);
            std::thread::sleep(delay);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frame(&self) -> u64 {
        self.ctx.frame()
    }

    pub fn render_buffer(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    pub fn game(&self) -> &G {
        &self.game
    }
}
