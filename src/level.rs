//! Flat JSON level-description format
//!
//! The only persistence the game has: platform records, pickup placements,
//! the player spawn, and the sprite-sheet row configuration. The simulation
//! never touches the filesystem - callers hand it a parsed [`Level`] and the
//! binary does the file I/O.

use serde::{Deserialize, Serialize};

use crate::sim::{BehaviorState, PickupKind, PlatformKind};

/// One static platform placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformRecord {
    pub pos: [f32; 2],
    pub size: [f32; 2],
    pub kind: PlatformKind,
}

/// One pickup placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickupRecord {
    pub pos: [f32; 2],
    pub kind: PickupKind,
}

/// Sprite-sheet strip assignment for one behavior state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationRow {
    pub state: BehaviorState,
    pub row: u32,
    pub frame_count: usize,
    pub looped: bool,
}

/// Player setup carried by the level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Hitbox offset and size relative to the sprite: [x, y, w, h]
    pub hitbox: [f32; 4],
    pub animation_fps: u32,
    pub animation_rows: Vec<AnimationRow>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            hitbox: [54.0, 44.0, 20.0, 37.0],
            animation_fps: 20,
            animation_rows: vec![
                AnimationRow { state: BehaviorState::Idle, row: 1, frame_count: 10, looped: true },
                AnimationRow { state: BehaviorState::Walking, row: 3, frame_count: 10, looped: true },
                AnimationRow { state: BehaviorState::Jumping, row: 10, frame_count: 6, looped: false },
                AnimationRow { state: BehaviorState::BeginFalling, row: 11, frame_count: 4, looped: false },
                AnimationRow { state: BehaviorState::Falling, row: 12, frame_count: 3, looped: true },
            ],
        }
    }
}

/// A complete level description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub spawn: [f32; 2],
    #[serde(default)]
    pub player: PlayerConfig,
    pub platforms: Vec<PlatformRecord>,
    #[serde(default)]
    pub pickups: Vec<PickupRecord>,
}

impl Level {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// The built-in map: one ground strip, six floating platforms, a coin
    /// trail, a checkpoint halfway, and the win pickup at the far end.
    pub fn sample() -> Self {
        let floating = |x: f32, y: f32, w: f32| PlatformRecord {
            pos: [x, y],
            size: [w, 20.0],
            kind: PlatformKind::Floating,
        };

        Self {
            name: "HookLeap".to_string(),
            spawn: [100.0, 250.0],
            player: PlayerConfig::default(),
            platforms: vec![
                PlatformRecord {
                    pos: [0.0, 500.0],
                    size: [320.0, 16.0],
                    kind: PlatformKind::Ground,
                },
                floating(200.0, 400.0, 150.0),
                floating(450.0, 350.0, 150.0),
                floating(100.0, 250.0, 120.0),
                floating(550.0, 200.0, 120.0),
                floating(900.0, 300.0, 150.0),
                floating(1200.0, 250.0, 150.0),
            ],
            pickups: vec![
                PickupRecord { pos: [250.0, 360.0], kind: PickupKind::Coin },
                PickupRecord { pos: [500.0, 310.0], kind: PickupKind::Coin },
                PickupRecord { pos: [600.0, 160.0], kind: PickupKind::Coin },
                PickupRecord { pos: [950.0, 260.0], kind: PickupKind::Checkpoint },
                PickupRecord { pos: [1150.0, 200.0], kind: PickupKind::Coin },
                PickupRecord { pos: [1260.0, 220.0], kind: PickupKind::WinPickup },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let level = Level::sample();
        let json = level.to_json().unwrap();
        let parsed = Level::from_json(&json).unwrap();
        assert_eq!(parsed, level);
    }

    #[test]
    fn test_minimal_level_uses_defaults() {
        let json = r#"{
            "name": "flat",
            "spawn": [0.0, 0.0],
            "platforms": [
                { "pos": [0.0, 100.0], "size": [500.0, 16.0], "kind": "Ground" }
            ]
        }"#;
        let level = Level::from_json(json).unwrap();
        assert_eq!(level.player, PlayerConfig::default());
        assert!(level.pickups.is_empty());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Level::from_json("{ not json").is_err());
        assert!(Level::from_json(r#"{"name": "x"}"#).is_err());
    }

    #[test]
    fn test_sample_level_is_playable() {
        let level = Level::sample();
        // The spawn must sit above some platform so the player can land
        let spawn_x = level.spawn[0];
        assert!(level.platforms.iter().any(|p| {
            p.pos[0] <= spawn_x && spawn_x <= p.pos[0] + p.size[0] && p.pos[1] > level.spawn[1]
        }));
        // Exactly one way to win
        let wins = level
            .pickups
            .iter()
            .filter(|p| p.kind == PickupKind::WinPickup)
            .count();
        assert_eq!(wins, 1);
    }
}
