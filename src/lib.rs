//! HookLeap - a 2D side-scrolling grappling-hook platformer
//!
//! Core modules:
//! - `sim`: single-threaded frame simulation (physics, hook, player state)
//! - `level`: flat JSON level-description format
//! - `settings`: player preferences

pub mod level;
pub mod settings;
pub mod sim;

pub use level::Level;
pub use settings::Settings;

use glam::Vec2;

/// Gameplay tuning constants
pub mod consts {
    /// Downward acceleration (units/s²), +y is down
    pub const GRAVITY: f32 = 980.0;
    /// Terminal fall speed (units/s)
    pub const MAX_FALL_SPEED: f32 = 600.0;
    /// Horizontal damping per frame while grounded
    pub const GROUND_FRICTION: f32 = 0.85;
    /// Horizontal damping per frame while airborne
    pub const AIR_FRICTION: f32 = 0.95;
    /// Horizontal speed below which velocity snaps to zero
    pub const STOP_THRESHOLD: f32 = 0.1;
    /// How far below the lowest platform edge the death pit begins
    pub const PIT_DEPTH_MARGIN: f32 = 200.0;

    /// Hook tip travel speed while shooting (units/s)
    pub const HOOK_SPEED: f32 = 800.0;
    /// Rope length the swing constraint enforces
    pub const MAX_ROPE_LENGTH: f32 = 400.0;
    /// Shooting hook auto-releases past this distance from the player
    pub const MAX_HOOK_RANGE: f32 = 500.0;
    /// Attached hook auto-releases after this many seconds
    pub const HOOK_DURATION: f32 = 3.0;
    /// Rope angle from vertical (degrees) that forces a break
    pub const MAX_ROPE_ANGLE: f32 = 160.0;
    /// Slack tolerance on rope length before a forced break
    pub const ROPE_SLACK: f32 = 1.2;

    /// Horizontal run speed (units/s)
    pub const MOVE_SPEED: f32 = 200.0;
    /// Jump impulse (negative = up)
    pub const JUMP_FORCE: f32 = -500.0;
    /// Tangential swing acceleration while hooked (units/s²)
    pub const SWING_ACCELERATION: f32 = 400.0;
    /// Speed cap while hooked (units/s)
    pub const MAX_SWING_SPEED: f32 = 600.0;
    /// |velocity.x| below this never flips the facing direction
    pub const FACING_DEADBAND: f32 = 0.1;

    /// Player sprite sheet cell size (square)
    pub const PLAYER_FRAME_SIZE: f32 = 128.0;
    /// Default animation playback rate
    pub const DEFAULT_ANIMATION_FPS: u32 = 20;
    /// Starting/maximum player health
    pub const PLAYER_MAX_HEALTH: f32 = 100.0;
    /// Score awarded per coin
    pub const COIN_SCORE: i32 = 10;
}

/// Perpendicular of a vector (rotated 90°), used for the swing tangent
#[inline]
pub fn perpendicular(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Angle of a rope vector from straight-down vertical, in degrees (always ≥ 0).
///
/// The rope vector points from the attach point to the hanging character, so
/// with +y down a character dangling directly below yields 0°.
#[inline]
pub fn rope_angle_from_vertical(rope: Vec2) -> f32 {
    rope.x.atan2(rope.y).to_degrees().abs()
}
