//! Player movement + animation state machine
//!
//! Fuses raw input, hook state, and the frame's physics results into a
//! movement velocity and one discrete behavior state, then drives the
//! animation clock off that state. Swing dynamics while hooked live here
//! too: tangential acceleration, an inextensible-rope velocity constraint,
//! and a hard positional projection onto the rope circle.

use glam::Vec2;
use log::debug;

use super::animation::{AnimationClock, AnimationStrip, AnimationTable};
use super::character::Character;
use super::hook::{Hook, HookState};
use super::platform::Platform;
use super::tick::TickInput;
use crate::consts::*;
use crate::perpendicular;

/// Discrete behavior/animation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum BehaviorState {
    #[default]
    Idle,
    Walking,
    Jumping,
    /// Transitional strip played once when a fall starts
    BeginFalling,
    Falling,
    Hooked,
}

impl BehaviorState {
    pub const COUNT: usize = 6;
}

/// Which way the sprite is mirrored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// The one dynamic entity the simulation resolves
#[derive(Debug, Clone)]
pub struct Player {
    /// Pose, health, and hitbox component
    pub body: Character,
    pub hook: Hook,
    on_ground: bool,
    was_on_ground: bool,
    state: BehaviorState,
    facing: Facing,
    score: i32,
    animations: AnimationTable,
    clock: AnimationClock,
}

impl Player {
    pub fn new() -> Self {
        Self {
            body: Character::new(Vec2::splat(PLAYER_FRAME_SIZE), PLAYER_MAX_HEALTH),
            hook: Hook::new(),
            on_ground: false,
            was_on_ground: false,
            state: BehaviorState::Idle,
            facing: Facing::Right,
            score: 0,
            animations: AnimationTable::new(),
            clock: AnimationClock::new(DEFAULT_ANIMATION_FPS),
        }
    }

    #[inline]
    pub fn state(&self) -> BehaviorState {
        self.state
    }

    #[inline]
    pub fn facing(&self) -> Facing {
        self.facing
    }

    #[inline]
    pub fn is_on_ground(&self) -> bool {
        self.on_ground
    }

    pub fn set_on_ground(&mut self, on_ground: bool) {
        self.on_ground = on_ground;
    }

    #[inline]
    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn add_score(&mut self, points: i32) {
        self.score += points;
    }

    /// Source rectangle a renderer should draw this frame
    pub fn current_frame(&self) -> super::rect::Rect {
        self.clock.current_frame
    }

    pub fn set_animation_fps(&mut self, fps: u32) {
        self.clock.fps = fps;
    }

    /// Configure the strip for one behavior state from a sheet row
    pub fn set_animation_row(&mut self, state: BehaviorState, row: u32, frame_count: usize, looped: bool) {
        let strip = AnimationStrip::from_sheet_row(row, frame_count, looped, PLAYER_FRAME_SIZE);
        self.animations.set(state, strip);
    }

    /// Apply the frame's key states to velocity and the hook.
    ///
    /// Horizontal input and jumping are suppressed while attached; the
    /// swing physics own the velocity then.
    pub fn handle_input(&mut self, input: &TickInput) {
        if input.fire_hook && !self.hook.is_attached() && self.hook.state() == HookState::Inactive {
            self.shoot_hook(input.aim);
        }

        if input.release_hook && self.hook.is_attached() {
            self.hook.release();
        }

        if self.hook.is_attached() {
            return;
        }

        if input.left {
            self.body.vel.x = -MOVE_SPEED;
        } else if input.right {
            self.body.vel.x = MOVE_SPEED;
        }

        if input.jump {
            self.jump();
        }
    }

    /// Jump is only permitted grounded and unhooked
    pub fn jump(&mut self) {
        if !self.on_ground || self.hook.is_attached() {
            return;
        }
        self.body.vel.y = JUMP_FORCE;
        self.on_ground = false;
    }

    /// Fire the hook from the sprite center toward a world-space target
    pub fn shoot_hook(&mut self, target: Vec2) {
        if self.hook.is_attached() {
            return;
        }
        let center = self.body.center();
        self.hook.shoot(center, target - center);
    }

    pub fn release_hook(&mut self) {
        self.hook.release();
    }

    /// Advance the hook: travel/timeout, grapple scan while shooting,
    /// break check while attached.
    pub fn update_hook(&mut self, dt: f32, platforms: &[Platform]) {
        let center = self.body.center();
        self.hook.update(dt, center);

        if self.hook.state() == HookState::Shooting {
            for platform in platforms {
                if self.hook.check_platform_collision(platform, center) {
                    break;
                }
            }
        }

        if self.hook.is_attached() && self.hook.should_break(center) {
            debug!("rope limit exceeded, hook broke");
            self.hook.release();
        }
    }

    /// Swing dynamics for one frame while attached.
    ///
    /// `swing_input` is -1/0/+1 from the lateral keys. Gravity is added
    /// unconditionally; the radial velocity component is then subtracted out
    /// so the rope neither stretches nor compresses, leaving tangential
    /// motion only. If movement still carried the character past the rope
    /// length, the position is projected back onto the rope circle.
    pub fn apply_swing_physics(&mut self, dt: f32, swing_input: f32) {
        if !self.hook.is_attached() {
            return;
        }

        let center = self.body.center();
        let attach = self.hook.attach_point();

        let rope = center - attach;
        let rope_length = rope.length();
        if rope_length < 0.1 {
            return;
        }

        let rope_dir = rope / rope_length;
        let tangent = perpendicular(rope_dir);

        let mut vel = self.body.vel;
        vel += tangent * swing_input * SWING_ACCELERATION * dt;
        vel.y += GRAVITY * dt;

        // Inextensible rope: remove the radial component
        let radial_vel = vel.dot(rope_dir);
        vel -= rope_dir * radial_vel;

        let speed = vel.length();
        if speed > MAX_SWING_SPEED {
            vel = vel / speed * MAX_SWING_SPEED;
        }

        self.body.vel = vel;

        // Hard positional constraint back onto the rope circle
        let rope = self.body.center() - attach;
        let current_length = rope.length();
        if current_length > MAX_ROPE_LENGTH {
            let constrained = attach + rope / current_length * MAX_ROPE_LENGTH;
            self.body.pos = constrained - self.body.sprite_size * 0.5;
        }
    }

    /// Reconcile the frame's velocity, ground flag, and hook state into one
    /// behavior state. Priority: Hooked overrides everything; airborne
    /// states follow the jump/fall ladder; grounded picks Walking or Idle.
    pub fn update_state(&mut self) {
        self.update_facing();

        if self.hook.is_attached() {
            self.change_state(BehaviorState::Hooked);
            self.was_on_ground = self.on_ground;
            return;
        }

        if !self.on_ground {
            if self.body.vel.y < 0.0 {
                self.change_state(BehaviorState::Jumping);
            } else if self.state == BehaviorState::BeginFalling {
                if self.animation_finished() {
                    self.change_state(BehaviorState::Falling);
                }
            } else if self.state == BehaviorState::Jumping && self.animation_finished() {
                self.change_state(BehaviorState::BeginFalling);
            } else if self.was_on_ground && self.state != BehaviorState::Jumping {
                // Walked off a ledge
                self.change_state(BehaviorState::BeginFalling);
            } else if self.state != BehaviorState::Jumping && self.state != BehaviorState::BeginFalling {
                self.change_state(BehaviorState::Falling);
            }
        } else if self.body.vel.x.abs() > STOP_THRESHOLD {
            self.change_state(BehaviorState::Walking);
        } else {
            self.change_state(BehaviorState::Idle);
        }

        self.was_on_ground = self.on_ground;
    }

    /// Advance the animation clock against the current state's strip.
    /// A missing strip is a no-op; the pose freezes but the simulation
    /// continues.
    pub fn animate(&mut self, dt: f32) {
        if let Some(strip) = self.animations.get(self.state) {
            self.clock.advance(strip, dt);
        }
    }

    /// Force a state regardless of transition guards (used by resets)
    pub fn force_state(&mut self, state: BehaviorState) {
        self.state = state;
        self.rebind_first_frame();
    }

    /// Back to spawn conditions: zeroed velocity, released hook, facing
    /// right, full health, Idle with frame 0 bound.
    pub fn reset(&mut self, spawn: Vec2) {
        self.body.pos = spawn;
        self.body.vel = Vec2::ZERO;
        self.body.restore_health();
        self.on_ground = false;
        self.was_on_ground = false;
        self.hook.release();
        self.facing = Facing::Right;
        self.force_state(BehaviorState::Idle);
    }

    fn change_state(&mut self, state: BehaviorState) {
        if self.state == state {
            return;
        }
        self.state = state;
        self.rebind_first_frame();
    }

    /// Bind the new state's first frame immediately so the previous
    /// state's last frame never flashes for a frame.
    fn rebind_first_frame(&mut self) {
        if let Some(strip) = self.animations.get(self.state) {
            self.clock.rebind(strip);
        } else {
            self.clock.frame_id = 0;
            self.clock.timeout = 0.0;
        }
    }

    /// Flip facing off velocity sign, with a deadband so near-zero
    /// velocities never flicker the sprite.
    fn update_facing(&mut self) {
        if self.body.vel.x < -FACING_DEADBAND {
            self.facing = Facing::Left;
        } else if self.body.vel.x > FACING_DEADBAND {
            self.facing = Facing::Right;
        }
    }

    fn animation_finished(&self) -> bool {
        match self.animations.get(self.state) {
            Some(strip) => strip.finished(self.clock.frame_id),
            // Missing strip counts as finished so guards don't stall
            None => true,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
