//! Per-frame simulation step
//!
//! One synchronous pass per rendered frame, in a fixed order: input, hook
//! update, swing-or-gravity, position integration, collision resolution,
//! friction, death and pickup evaluation, then the behavior/animation
//! update. The dt is wall-clock elapsed seconds, uncapped - a large frame
//! spike produces a proportionally large integration step, a known source
//! of tunneling at low frame rates that is accepted rather than remedied.

use glam::Vec2;
use log::{debug, info};

use super::physics::{apply_friction, apply_gravity, handle_collisions};
use super::pickup::PickupKind;
use super::state::{GamePhase, GameState};

/// Key states and cursor position supplied by the input source each frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Fire the hook toward `aim`
    pub fire_hook: bool,
    pub release_hook: bool,
    /// World-space cursor position used as the hook target
    pub aim: Vec2,
    /// Menu confirm / restart
    pub start: bool,
    /// Pause toggle
    pub pause: bool,
}

impl TickInput {
    /// Lateral axis as -1/0/+1 for the swing dynamics
    fn swing_axis(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Advance the whole game by one frame of `dt` elapsed seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.phase {
        GamePhase::Menu => {
            if input.start {
                info!("starting level");
                state.phase = GamePhase::Playing;
            }
        }
        GamePhase::Paused => {
            if input.pause {
                state.phase = GamePhase::Playing;
            }
        }
        GamePhase::Playing => {
            if input.pause {
                state.phase = GamePhase::Paused;
                return;
            }
            step_playing(state, input, dt);
        }
        GamePhase::GameOver => {
            if input.start {
                state.respawn();
            }
        }
        GamePhase::WinScreen => {
            if input.start {
                state.phase = GamePhase::Menu;
            }
        }
    }
}

/// One gameplay frame: the ordering here is the contract the whole sim is
/// built around (see module doc).
fn step_playing(state: &mut GameState, input: &TickInput, dt: f32) {
    if !state.player.body.is_alive() {
        return;
    }

    state.time_secs += dt;

    // 1. Input decides desired velocity and hook commands
    state.player.handle_input(input);

    // 2. Hook travel / grapple / break
    state.player.update_hook(dt, &state.platforms);

    // 3. Swing dynamics replace gravity while hooked
    if state.player.hook.is_attached() {
        state.player.apply_swing_physics(dt, input.swing_axis());
    } else {
        apply_gravity(&mut state.player.body.vel, dt);
    }

    // 4. Integrate position
    state.player.body.integrate(dt);

    // 5. Resolve collisions against the platform snapshot
    let outcome = handle_collisions(&mut state.player.body, &state.platforms);
    state.player.set_on_ground(outcome.on_ground);

    // 6. Frame friction
    apply_friction(&mut state.player.body.vel, outcome.on_ground);

    // 7. Fatal conditions
    if outcome.fell_in_pit {
        info!("player fell into a pit");
        let health = state.player.body.health();
        state.player.body.damage(health);
    }
    if outcome.hit_deadly_platform {
        info!("player hit a deadly platform");
        let health = state.player.body.health();
        state.player.body.damage(health);
    }
    if !state.player.body.is_alive() {
        state.phase = GamePhase::GameOver;
        return;
    }

    // 8. Pickups
    collect_pickups(state);

    // 9. Behavior state and animation
    state.player.update_state();
    state.player.animate(dt);
    for pickup in &mut state.pickups {
        pickup.animate(dt);
    }
}

fn collect_pickups(state: &mut GameState) {
    let hitbox = state.player.body.global_hitbox();
    let mut won = false;

    for pickup in &mut state.pickups {
        if pickup.is_collected() {
            continue;
        }
        if hitbox.intersection(&pickup.bounds()).is_none() {
            continue;
        }

        pickup.collect();
        match pickup.kind {
            PickupKind::Coin => {
                state.player.add_score(pickup.kind.score());
                debug!("coin collected, score {}", state.player.score());
            }
            PickupKind::Checkpoint => {
                // Respawn at the checkpoint, not mid-air where we touched it
                state.respawn_point = pickup.pos;
                info!("checkpoint activated at ({:.0}, {:.0})", pickup.pos.x, pickup.pos.y);
            }
            PickupKind::WinPickup => {
                info!("win pickup collected, final score {}", state.player.score());
                won = true;
            }
        }
    }

    // Collected coins and win pickups vanish; checkpoints stay visible
    state.pickups.retain(|p| !p.is_collected() || p.remains_visible());

    if won {
        state.phase = GamePhase::WinScreen;
    }
}
