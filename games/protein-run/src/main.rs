use std::error::Error;

use brawn_engine::{Drawable, GameConfig, GameRunner, ImageRegistry, InputEvent, Key};
use protein_run::assets::MANIFEST_JSON;
use protein_run::RoadScene;

/// Frames to run when no quit arrives earlier.
const MAX_FRAMES: u64 = 600;

/// Scripted key presses: (frame, event).
const SCRIPT: &[(u64, InputEvent)] = &[
    (1, InputEvent::KeyDown(Key::Right)),
    (1, InputEvent::KeyDown(Key::D)),
    (40, InputEvent::KeyDown(Key::Up)),
    (41, InputEvent::KeyUp(Key::Up)),
    (90, InputEvent::KeyDown(Key::W)),
    (91, InputEvent::KeyUp(Key::W)),
    (300, InputEvent::KeyUp(Key::D)),
    (400, InputEvent::KeyUp(Key::Right)),
    (450, InputEvent::KeyDown(Key::Escape)),
];

fn load_config() -> Result<GameConfig, Box<dyn Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            let config = GameConfig::from_json(&json)?;
            log::info!("config loaded from {}", path);
            Ok(config)
        }
        None => Ok(GameConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    let images = ImageRegistry::from_json(MANIFEST_JSON)?;
    log::info!("{} images registered", images.len());

    let mut runner = GameRunner::new(RoadScene::new(config), images);
    runner.init()?;

    runner.run(MAX_FRAMES, |runner| {
        let frame = runner.frame();
        for (_, event) in SCRIPT.iter().filter(|(at, _)| *at == frame) {
            runner.push_input(*event);
        }
    });

    let game = runner.game();
    for lane in 0..2 {
        if let Some(player) = game.player(lane) {
            log::info!(
                "player {}: x {:.3}, power {:.2}, tier {}, {} protein(s)",
                lane + 1,
                player.pos().x,
                player.power(),
                player.muscle_tier(),
                game.collected(lane)
            );
        }
    }
    log::info!(
        "stopped after {} frames, {} instances in the last frame",
        runner.frame(),
        runner.render_buffer().instance_count()
    );
    Ok(())
}
