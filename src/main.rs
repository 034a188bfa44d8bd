//! HookLeap entry point
//!
//! Headless demo loop: loads a level (JSON path as the first argument, or
//! the built-in sample), drives a few seconds of scripted input through the
//! simulation, and logs what happens. A renderer would consume the same
//! `GameState` accessors this loop logs.

use std::fs;
use std::time::Instant;

use glam::Vec2;

use hookleap::Level;
use hookleap::Settings;
use hookleap::sim::{GamePhase, GameState, TickInput, tick};

/// Scripted demo input: walk right, hop now and then, and try a hook shot
/// up-and-right once airborne time allows.
fn demo_input(frame: u32, state: &GameState) -> TickInput {
    let mut input = TickInput {
        right: true,
        aim: state.player.body.center() + Vec2::new(150.0, -300.0),
        ..Default::default()
    };

    if frame == 0 {
        input.start = true;
        input.right = false;
    }
    if frame % 90 == 45 && state.player.is_on_ground() {
        input.jump = true;
    }
    if frame % 150 == 60 {
        input.fire_hook = true;
    }
    if state.phase == GamePhase::GameOver {
        input.start = true;
    }

    input
}

fn load_level() -> Level {
    let Some(path) = std::env::args().nth(1) else {
        return Level::sample();
    };

    match fs::read_to_string(&path) {
        Ok(json) => match Level::from_json(&json) {
            Ok(level) => {
                log::info!("loaded level '{}' from {path}", level.name);
                level
            }
            Err(err) => {
                log::error!("{path}: invalid level JSON ({err}), using sample level");
                Level::sample()
            }
        },
        Err(err) => {
            log::error!("{path}: {err}, using sample level");
            Level::sample()
        }
    }
}

fn load_settings() -> Settings {
    match fs::read_to_string("settings.json") {
        Ok(json) => Settings::from_json(&json).unwrap_or_else(|err| {
            log::warn!("settings.json: {err}, using defaults");
            Settings::default()
        }),
        Err(_) => Settings::default(),
    }
}

fn main() {
    env_logger::init();
    log::info!("HookLeap (headless) starting...");

    let settings = load_settings();
    log::debug!("settings: {settings:?}");

    let level = load_level();
    let mut state = GameState::from_level(&level);

    let dt = 1.0 / 60.0;
    let frames: u32 = 60 * 20; // 20 simulated seconds
    let started = Instant::now();

    let mut last_behavior = state.player.state();
    for frame in 0..frames {
        let input = demo_input(frame, &state);
        tick(&mut state, &input, dt);

        let behavior = state.player.state();
        if behavior != last_behavior {
            log::info!(
                "t={:6.2}s {:?} -> {:?} at ({:.0}, {:.0})",
                state.time_secs,
                last_behavior,
                behavior,
                state.player.body.pos.x,
                state.player.body.pos.y,
            );
            last_behavior = behavior;
        }

        if state.phase == GamePhase::WinScreen {
            log::info!("level complete at t={:.2}s", state.time_secs);
            break;
        }
    }

    log::info!(
        "demo finished: phase {:?}, score {}, sim time {:.2}s, wall time {:?}",
        state.phase,
        state.player.score(),
        state.time_secs,
        started.elapsed(),
    );
}
