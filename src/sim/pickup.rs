//! Collectible pickups
//!
//! One tagged union instead of an inheritance chain: the kind decides
//! collection behavior and animation policy. Coins score and disappear,
//! checkpoints activate once and stay visible, the win pickup ends the
//! level.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::animation::{AnimationClock, AnimationStrip};
use super::rect::Rect;
use crate::consts::COIN_SCORE;

/// What collecting this pickup does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    /// Scores points and disappears
    Coin,
    /// Records a respawn point; stays visible once activated
    Checkpoint,
    /// Flips the game to the win screen
    WinPickup,
}

impl PickupKind {
    /// Sprite cell size for this pickup's sheet
    fn cell(self) -> f32 {
        match self {
            PickupKind::Coin | PickupKind::Checkpoint => 32.0,
            PickupKind::WinPickup => 16.0,
        }
    }

    fn frame_count(self) -> usize {
        match self {
            PickupKind::Coin => 12,
            PickupKind::Checkpoint | PickupKind::WinPickup => 6,
        }
    }

    fn looped(self) -> bool {
        // Checkpoints play once on activation and hold their last frame
        !matches!(self, PickupKind::Checkpoint)
    }

    /// Points awarded on collection
    pub fn score(self) -> i32 {
        match self {
            PickupKind::Coin => COIN_SCORE,
            _ => 0,
        }
    }
}

/// A placed pickup instance
#[derive(Debug, Clone)]
pub struct Pickup {
    pub kind: PickupKind,
    pub pos: Vec2,
    collected: bool,
    strip: AnimationStrip,
    clock: AnimationClock,
}

impl Pickup {
    pub fn new(kind: PickupKind, pos: Vec2) -> Self {
        let strip = AnimationStrip::from_sheet_row(0, kind.frame_count(), kind.looped(), kind.cell());
        let mut clock = AnimationClock::new(10);
        clock.rebind(&strip);
        Self {
            kind,
            pos,
            collected: false,
            strip,
            clock,
        }
    }

    #[inline]
    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Collecting is one-shot; repeat contacts are no-ops
    pub fn collect(&mut self) {
        self.collected = true;
    }

    /// Whether a renderer should keep drawing this after collection
    pub fn remains_visible(&self) -> bool {
        self.kind == PickupKind::Checkpoint
    }

    /// World-space bounds used for the player-overlap check
    pub fn bounds(&self) -> Rect {
        Rect::from_corner_size(self.pos, Vec2::splat(self.kind.cell()))
    }

    /// Source rectangle a renderer should draw this frame
    pub fn current_frame(&self) -> Rect {
        self.clock.current_frame
    }

    /// Advance the pickup's animation. Checkpoints stay on frame 0 until
    /// activated, then play through once and hold.
    pub fn animate(&mut self, dt: f32) {
        if self.kind == PickupKind::Checkpoint && !self.collected {
            return;
        }
        self.clock.advance(&self.strip, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_scores_and_disappears() {
        let mut coin = Pickup::new(PickupKind::Coin, Vec2::new(100.0, 100.0));
        assert_eq!(coin.kind.score(), COIN_SCORE);
        coin.collect();
        assert!(coin.is_collected());
        assert!(!coin.remains_visible());
    }

    #[test]
    fn test_checkpoint_frozen_until_activated() {
        let mut cp = Pickup::new(PickupKind::Checkpoint, Vec2::ZERO);
        cp.animate(1.0);
        assert_eq!(cp.clock.frame_id, 0);

        cp.collect();
        for _ in 0..20 {
            cp.animate(0.2);
        }
        // Played through once and held the last frame
        assert_eq!(cp.clock.frame_id, 5);
        assert!(cp.remains_visible());
    }

    #[test]
    fn test_coin_animation_loops() {
        let mut coin = Pickup::new(PickupKind::Coin, Vec2::ZERO);
        // 12 frames at 10 fps: 13 advances wrap past the end
        for _ in 0..13 {
            coin.animate(0.1);
        }
        assert_eq!(coin.clock.frame_id, 1);
    }

    #[test]
    fn test_bounds_match_cell_size() {
        let win = Pickup::new(PickupKind::WinPickup, Vec2::new(10.0, 20.0));
        assert_eq!(win.bounds(), Rect::new(10.0, 20.0, 16.0, 16.0));
        let coin = Pickup::new(PickupKind::Coin, Vec2::new(10.0, 20.0));
        assert_eq!(coin.bounds(), Rect::new(10.0, 20.0, 32.0, 32.0));
    }
}
