//! Block Crusher entry point
//!
//! There is no window backend here: the binary drives the launcher headlessly
//! with the paddle on autopilot, which is handy for soak-testing the
//! simulation and for eyeballing the final state.
//!
//! Usage: `block-crusher [settings.json]`

use std::path::PathBuf;
use std::time::Duration;

use block_crusher::sim::TickInput;
use block_crusher::{Launcher, MenuInput, Settings};

fn main() {
    env_logger::init();
    log::info!("Block Crusher (headless) starting...");

    let path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load(path.as_deref());

    let mut launcher = match Launcher::new(&settings) {
        Ok(launcher) => launcher,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };

    // Pick the game from the menu, then let the autopilot play
    let select = MenuInput {
        select_block_crusher: true,
        ..Default::default()
    };
    launcher.frame(&select, &TickInput::default());

    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    let frame_time = Duration::from_secs_f64(1.0 / f64::from(settings.tick_rate.max(1)));

    for _ in 0..settings.demo_ticks {
        launcher.frame(&MenuInput::default(), &input);
        if launcher.game().is_none_or(|g| g.is_game_over()) {
            break;
        }
        if settings.pace {
            std::thread::sleep(frame_time);
        }
    }

    let Some(game) = launcher.game() else {
        log::warn!("No game running at exit");
        return;
    };
    log::info!(
        "Finished: score {}, lives {}, level {}, {} ticks",
        game.score,
        game.lives,
        game.level,
        game.time_ticks
    );

    let summary = serde_json::json!({
        "score": game.score,
        "lives": game.lives,
        "level": game.level,
        "ticks": game.time_ticks,
        "active_balls": game.active_ball_count(),
        "active_blocks": game.active_block_count(),
        "game_over": game.is_game_over(),
    });
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Failed to encode summary: {err}"),
    }

    launcher.shutdown();
}
