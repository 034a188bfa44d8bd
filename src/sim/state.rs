//! Top-level game state
//!
//! One simulation context owns everything the per-frame step mutates: the
//! phase dispatcher, the player, the platform registry, and the pickups.
//! Single-threaded by construction; the platform list is a stable snapshot
//! for the whole of each physics pass.

use glam::Vec2;

use super::pickup::Pickup;
use super::platform::Platform;
use super::player::Player;
use crate::level::Level;

/// Which update/render routine runs this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Paused,
    /// Win pickup collected
    WinScreen,
    /// Player died with no checkpoint pending respawn
    GameOver,
}

/// Complete game state for one loaded level
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub pickups: Vec<Pickup>,
    /// Where death or a restart puts the player back
    pub respawn_point: Vec2,
    /// Wall-clock seconds of play accumulated (for the HUD timer)
    pub time_secs: f32,
}

impl GameState {
    /// Build a fresh state from a level description, starting at the menu
    pub fn from_level(level: &Level) -> Self {
        let spawn = Vec2::from(level.spawn);

        let platforms = level
            .platforms
            .iter()
            .map(|record| Platform::new(record.pos.into(), record.size.into(), record.kind))
            .collect();

        let pickups = level
            .pickups
            .iter()
            .map(|record| Pickup::new(record.kind, record.pos.into()))
            .collect();

        let mut player = Player::new();
        let [hx, hy, hw, hh] = level.player.hitbox;
        player.body.set_hitbox(hx, hy, hw, hh);
        for row in &level.player.animation_rows {
            player.set_animation_row(row.state, row.row, row.frame_count, row.looped);
        }
        player.set_animation_fps(level.player.animation_fps);
        player.reset(spawn);

        Self {
            phase: GamePhase::Menu,
            player,
            platforms,
            pickups,
            respawn_point: spawn,
            time_secs: 0.0,
        }
    }

    /// Put the player back at the last checkpoint (or spawn) and resume play
    pub fn respawn(&mut self) {
        let spawn = self.respawn_point;
        self.player.reset(spawn);
        self.phase = GamePhase::Playing;
    }
}
