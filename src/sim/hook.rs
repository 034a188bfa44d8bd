//! Grappling-hook state machine
//!
//! Inactive → Shooting → Attached → Inactive, with self-healing releases:
//! out-of-range, attach timeout, and rope-limit violations all fall back to
//! Inactive on their own. Nothing here is an error condition.

use glam::Vec2;
use log::debug;

use super::platform::Platform;
use crate::consts::*;
use crate::rope_angle_from_vertical;

/// Which phase of the grapple the hook is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HookState {
    #[default]
    Inactive,
    /// Tip travelling along the shoot direction
    Shooting,
    /// Latched to a platform; attach point and rope length are meaningful
    Attached,
    /// Rope limit exceeded, release pending
    Breaking,
}

/// The player's grappling hook
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Hook {
    state: HookState,
    hook_pos: Vec2,
    attach_point: Vec2,
    shoot_direction: Vec2,
    rope_length: f32,
    attach_time: f32,
}

impl Hook {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> HookState {
        self.state
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.state == HookState::Attached
    }

    /// Current tip position (travelling while Shooting, latched while Attached)
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.hook_pos
    }

    /// Only meaningful while Attached
    #[inline]
    pub fn attach_point(&self) -> Vec2 {
        self.attach_point
    }

    #[inline]
    pub fn rope_length(&self) -> f32 {
        self.rope_length
    }

    /// Fire the hook from `origin` toward `aim`. A zero-length aim vector
    /// defaults to straight up rather than failing.
    pub fn shoot(&mut self, origin: Vec2, aim: Vec2) {
        self.state = HookState::Shooting;
        self.hook_pos = origin;
        self.shoot_direction = if aim.length_squared() > 0.0 {
            aim.normalize()
        } else {
            Vec2::new(0.0, -1.0)
        };
    }

    /// Advance the hook by one frame.
    ///
    /// Shooting: the tip travels at [`HOOK_SPEED`] and auto-releases past
    /// [`MAX_HOOK_RANGE`] from the character. Attached: accumulate attach
    /// time and auto-release at [`HOOK_DURATION`].
    pub fn update(&mut self, dt: f32, character_center: Vec2) {
        match self.state {
            HookState::Shooting => {
                self.hook_pos += self.shoot_direction * HOOK_SPEED * dt;
                if self.hook_pos.distance(character_center) > MAX_HOOK_RANGE {
                    debug!("hook out of range, released");
                    self.release();
                }
            }
            HookState::Attached => {
                self.rope_length = (character_center - self.attach_point).length();
                self.attach_time += dt;
                if self.attach_time >= HOOK_DURATION {
                    debug!("hook duration expired, released");
                    self.release();
                }
            }
            HookState::Inactive | HookState::Breaking => {}
        }
    }

    /// Test the travelling tip against one platform, latching on a hit.
    ///
    /// Only floating platforms are grappable, and only those strictly above
    /// the character. Returns true on attach so the caller can stop
    /// scanning.
    pub fn check_platform_collision(&mut self, platform: &Platform, character_center: Vec2) -> bool {
        if self.state != HookState::Shooting {
            return false;
        }
        if !platform.is_grapplable() {
            return false;
        }
        if platform.bounds().top() >= character_center.y {
            return false;
        }

        let bounds = platform.bounds();
        if bounds.contains_point(self.hook_pos) {
            // Latch to the underside, directly above wherever the tip entered
            self.attach(Vec2::new(self.hook_pos.x, bounds.bottom()));
            return true;
        }

        false
    }

    pub fn attach(&mut self, point: Vec2) {
        debug!("hook attached at ({:.1}, {:.1})", point.x, point.y);
        self.state = HookState::Attached;
        self.attach_point = point;
        self.hook_pos = point;
        self.attach_time = 0.0;
    }

    /// Unconditional reset to Inactive (idempotent)
    pub fn release(&mut self) {
        self.state = HookState::Inactive;
        self.rope_length = 0.0;
        self.attach_time = 0.0;
    }

    /// While Attached, judge whether the rope must break: swing excursion
    /// past [`MAX_ROPE_ANGLE`] from vertical, or stretch past the slack
    /// tolerance.
    pub fn should_break(&self, character_center: Vec2) -> bool {
        if self.state != HookState::Attached {
            return false;
        }

        let rope = character_center - self.attach_point;
        if rope_angle_from_vertical(rope) > MAX_ROPE_ANGLE {
            return true;
        }

        rope.length() > MAX_ROPE_LENGTH * ROPE_SLACK
    }
}
