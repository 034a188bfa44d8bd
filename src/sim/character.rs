//! Pose, health, and hitbox component
//!
//! Shared by anything dynamic (currently just the player). Composition
//! instead of a sprite inheritance chain: the character holds position,
//! velocity, health, and an optional hitbox offset from its position.

use glam::Vec2;

use super::rect::Rect;

/// A movable character with health and a collision hitbox
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    /// World position (sprite top-left)
    pub pos: Vec2,
    /// Velocity in units/s
    pub vel: Vec2,
    /// Full sprite extent, the hitbox fallback and center reference
    pub sprite_size: Vec2,
    health: f32,
    max_health: f32,
    /// Hitbox relative to `pos`; `None` falls back to full sprite bounds
    hitbox: Option<Rect>,
}

impl Character {
    pub fn new(sprite_size: Vec2, max_health: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            sprite_size,
            health: max_health,
            max_health,
            hitbox: None,
        }
    }

    /// Reduce health; negative amounts are ignored
    pub fn damage(&mut self, amount: f32) {
        if amount < 0.0 {
            return;
        }
        self.health = (self.health - amount).max(0.0);
    }

    /// Restore health up to the maximum; negative amounts are ignored
    pub fn heal(&mut self, amount: f32) {
        if amount < 0.0 {
            return;
        }
        self.health = (self.health + amount).min(self.max_health);
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    #[inline]
    pub fn health(&self) -> f32 {
        self.health
    }

    #[inline]
    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    pub fn set_max_health(&mut self, max_health: f32) {
        self.max_health = max_health;
        if self.health > max_health {
            self.health = max_health;
        }
    }

    pub fn restore_health(&mut self) {
        self.health = self.max_health;
    }

    /// Configure a custom hitbox as an offset from the sprite position
    pub fn set_hitbox(&mut self, offset_x: f32, offset_y: f32, width: f32, height: f32) {
        self.hitbox = Some(Rect::new(offset_x, offset_y, width, height));
    }

    pub fn hitbox(&self) -> Option<Rect> {
        self.hitbox
    }

    /// Hitbox in world coordinates, falling back to full sprite bounds
    pub fn global_hitbox(&self) -> Rect {
        match self.hitbox {
            Some(local) => local.translated(self.pos),
            None => Rect::from_corner_size(self.pos, self.sprite_size),
        }
    }

    /// Sprite center, the hook's anchor point on the character
    pub fn center(&self) -> Vec2 {
        self.pos + self.sprite_size * 0.5
    }

    /// Explicit-Euler position step
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}
