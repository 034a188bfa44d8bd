//! Gravity, friction, and platform collision resolution
//!
//! The resolver is stateless: each call takes the character's current hitbox
//! and velocity plus a read-only platform snapshot, and produces per-axis
//! velocity response, a positional correction, and the frame's ground/death
//! flags. Overlaps resolve along the axis with the smaller penetration
//! (minimum-translation-vector heuristic) - cheap, and sufficient because
//! velocities are bounded and platforms are static rectangles.

use glam::Vec2;

use super::character::Character;
use super::platform::Platform;
use super::rect::Rect;
use crate::consts::*;

/// Flags produced by one collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionOutcome {
    /// A platform contact this frame produced a landing from above
    pub on_ground: bool,
    /// The character dropped below the death-pit threshold
    pub fell_in_pit: bool,
    /// The landing platform was a DeathPit
    pub hit_deadly_platform: bool,
}

/// Accelerate downward, clamped to terminal fall speed
pub fn apply_gravity(vel: &mut Vec2, dt: f32) {
    vel.y += GRAVITY * dt;
    if vel.y > MAX_FALL_SPEED {
        vel.y = MAX_FALL_SPEED;
    }
}

/// Damp horizontal velocity once per frame (not normalized by dt - an
/// intentional simplification, not a physical damping law), snapping to
/// zero below the stop threshold.
pub fn apply_friction(vel: &mut Vec2, on_ground: bool) {
    if on_ground {
        vel.x *= GROUND_FRICTION;
    } else {
        vel.x *= AIR_FRICTION;
    }

    if vel.x.abs() < STOP_THRESHOLD {
        vel.x = 0.0;
    }
}

/// Bottom edge of the lowest platform; the pit threshold hangs off this.
///
/// With zero platforms this is a large negative sentinel, so any character is
/// already below the threshold - an empty registry means everywhere is pit.
fn lowest_platform_bottom(platforms: &[Platform]) -> f32 {
    let mut lowest = -1_000_000.0_f32;
    for platform in platforms {
        let bottom = platform.bounds().bottom();
        if bottom > lowest {
            lowest = bottom;
        }
    }
    lowest
}

/// Resolve one platform against the hitbox: smaller overlap axis wins.
/// Returns true for a landing (vertical contact from above); accumulates the
/// positional correction into `correction`.
fn platform_collision(
    bounds: Rect,
    platform: &Platform,
    vel: &mut Vec2,
    correction: &mut Vec2,
) -> bool {
    let platform_bounds = platform.bounds();
    let Some(overlap) = bounds.intersection(&platform_bounds) else {
        return false;
    };

    if overlap.size.x > overlap.size.y {
        // Vertical collision (top or bottom)
        if bounds.top() < platform_bounds.top() {
            // Landing on top of the platform
            correction.y -= overlap.size.y;
            vel.y = 0.0;
            return true;
        }
        // Hit the platform's underside
        correction.y += overlap.size.y;
        vel.y = 0.0;
    } else {
        // Horizontal collision, pushed back toward the approach side
        if bounds.left() < platform_bounds.left() {
            correction.x -= overlap.size.x;
        } else {
            correction.x += overlap.size.x;
        }
        vel.x = 0.0;
    }

    false
}

/// Resolve the character against every platform for this frame.
///
/// Pit check first: once the hitbox top is more than [`PIT_DEPTH_MARGIN`]
/// below the lowest platform edge the frame ends early, ungrounded, with
/// `fell_in_pit` set.
///
/// Corrections from all colliding platforms are summed and applied once
/// after the scan. Known limitation: simultaneous contact with two platforms
/// (e.g. a seam between adjacent floor tiles) can double-correct; levels are
/// authored expecting seams to behave as contiguous ground, so this is
/// preserved rather than picking a single maximal correction.
pub fn handle_collisions(character: &mut Character, platforms: &[Platform]) -> CollisionOutcome {
    let bounds = character.global_hitbox();
    let mut outcome = CollisionOutcome::default();

    if bounds.top() > lowest_platform_bottom(platforms) + PIT_DEPTH_MARGIN {
        outcome.fell_in_pit = true;
        return outcome;
    }

    let mut total_correction = Vec2::ZERO;

    for platform in platforms {
        let landed = platform_collision(bounds, platform, &mut character.vel, &mut total_correction);
        if landed {
            outcome.on_ground = true;
            if platform.is_deadly() {
                outcome.hit_deadly_platform = true;
            }
        }
    }

    if total_correction != Vec2::ZERO {
        character.pos += total_correction;
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::platform::PlatformKind;
    use proptest::prelude::*;

    fn grounded_character(x: f32, y: f32) -> Character {
        let mut c = Character::new(Vec2::new(128.0, 128.0), 100.0);
        c.set_hitbox(54.0, 44.0, 20.0, 37.0);
        c.pos = Vec2::new(x, y);
        c
    }

    fn floor(y: f32) -> Platform {
        Platform::new(Vec2::new(-1000.0, y), Vec2::new(3000.0, 16.0), PlatformKind::Ground)
    }

    #[test]
    fn test_gravity_accelerates_downward() {
        let mut vel = Vec2::new(0.0, -100.0);
        apply_gravity(&mut vel, 0.1);
        assert!((vel.y - (-100.0 + 98.0)).abs() < 0.001);
    }

    #[test]
    fn test_friction_snaps_to_zero() {
        let mut vel = Vec2::new(0.09, 0.0);
        apply_friction(&mut vel, true);
        assert_eq!(vel.x, 0.0);
    }

    #[test]
    fn test_friction_air_vs_ground() {
        let mut ground_vel = Vec2::new(100.0, 0.0);
        let mut air_vel = Vec2::new(100.0, 0.0);
        apply_friction(&mut ground_vel, true);
        apply_friction(&mut air_vel, false);
        assert!((ground_vel.x - 85.0).abs() < 0.001);
        assert!((air_vel.x - 95.0).abs() < 0.001);
    }

    #[test]
    fn test_landing_from_above() {
        // Hitbox bottom penetrating 5 units into the floor at y=500
        let mut c = grounded_character(0.0, 500.0 - 44.0 - 37.0 + 5.0);
        c.vel = Vec2::new(0.0, 200.0);
        let before = c.pos.y;

        let outcome = handle_collisions(&mut c, &[floor(500.0)]);
        assert!(outcome.on_ground);
        assert!(!outcome.fell_in_pit);
        assert_eq!(c.vel.y, 0.0);
        // Pushed up by the overlap height
        assert!((c.pos.y - (before - 5.0)).abs() < 0.001);
    }

    #[test]
    fn test_landing_idempotent() {
        // Resting exactly on the platform top with downward velocity
        let mut c = grounded_character(0.0, 500.0 - 44.0 - 37.0 + 2.0);
        c.vel = Vec2::new(0.0, 150.0);
        let platforms = [floor(500.0)];

        let outcome = handle_collisions(&mut c, &platforms);
        assert!(outcome.on_ground);
        assert_eq!(c.vel.y, 0.0);
        let resting_y = c.pos.y;

        // Second pass from rest: still grounded, no jitter.
        // The resting hitbox bottom is flush with the platform top; nudge a
        // hair down the way gravity does between frames.
        c.pos.y += 0.001;
        let outcome = handle_collisions(&mut c, &platforms);
        assert!(outcome.on_ground);
        assert_eq!(c.vel.y, 0.0);
        assert!((c.pos.y - resting_y).abs() < 0.01);
    }

    #[test]
    fn test_ceiling_hit_pushes_down() {
        // Platform overhead, hitbox top penetrating 4 units up into it
        let platform = Platform::new(
            Vec2::new(-100.0, 100.0),
            Vec2::new(300.0, 20.0),
            PlatformKind::Floating,
        );
        let mut c = grounded_character(0.0, 120.0 - 44.0 - 4.0);
        c.vel = Vec2::new(0.0, -300.0);
        // Keep the pit check satisfied
        let platforms = [platform, floor(500.0)];

        let outcome = handle_collisions(&mut c, &platforms);
        assert!(!outcome.on_ground);
        assert_eq!(c.vel.y, 0.0);
    }

    #[test]
    fn test_horizontal_push_out() {
        // Tall wall to the right of the character, shallow horizontal overlap
        let wall = Platform::new(
            Vec2::new(96.0, 300.0),
            Vec2::new(40.0, 200.0),
            PlatformKind::Ground,
        );
        // Hitbox x spans [54+x, 74+x]; at x=25 it spans [79, 99], 3 deep in the wall
        let mut c = grounded_character(25.0, 400.0 - 44.0);
        c.vel = Vec2::new(150.0, 0.0);
        let platforms = [wall, floor(600.0)];

        let outcome = handle_collisions(&mut c, &platforms);
        assert!(!outcome.on_ground);
        assert_eq!(c.vel.x, 0.0);
        assert!((c.pos.x - 22.0).abs() < 0.001); // pushed back left by the overlap
    }

    #[test]
    fn test_deadly_platform_still_reports_grounded() {
        let mut pit = floor(500.0);
        pit.set_kind(PlatformKind::DeathPit);
        let mut c = grounded_character(0.0, 500.0 - 44.0 - 37.0 + 3.0);
        c.vel = Vec2::new(0.0, 100.0);

        let outcome = handle_collisions(&mut c, &[pit]);
        assert!(outcome.on_ground);
        assert!(outcome.hit_deadly_platform);
    }

    #[test]
    fn test_pit_threshold() {
        let platforms = [floor(500.0)]; // lowest bottom = 516
        // Hitbox top = pos.y + 44
        let mut above = grounded_character(0.0, 516.0 + 199.99 - 44.0);
        assert!(!handle_collisions(&mut above, &platforms).fell_in_pit);

        let mut below = grounded_character(0.0, 516.0 + 200.01 - 44.0);
        let outcome = handle_collisions(&mut below, &platforms);
        assert!(outcome.fell_in_pit);
        assert!(!outcome.on_ground);
    }

    #[test]
    fn test_no_platforms_is_all_pit() {
        let mut c = grounded_character(0.0, 0.0);
        let outcome = handle_collisions(&mut c, &[]);
        assert!(outcome.fell_in_pit);
    }

    #[test]
    fn test_seam_corrections_are_summed() {
        // Two adjacent floor tiles; standing across the seam double-corrects.
        // Documented behavior, levels are authored around it.
        let tiles = [
            Platform::new(Vec2::new(-500.0, 500.0), Vec2::new(564.0, 16.0), PlatformKind::Ground),
            Platform::new(Vec2::new(64.0, 500.0), Vec2::new(500.0, 16.0), PlatformKind::Ground),
        ];
        let mut c = grounded_character(0.0, 500.0 - 44.0 - 37.0 + 2.0);
        c.vel = Vec2::new(0.0, 100.0);
        let before = c.pos.y;

        let outcome = handle_collisions(&mut c, &tiles);
        assert!(outcome.on_ground);
        // Both tiles contributed a 2-unit upward correction
        assert!((c.pos.y - (before - 4.0)).abs() < 0.001);
    }

    proptest! {
        #[test]
        fn prop_gravity_never_exceeds_terminal(vy in -2000.0f32..2000.0, dt in 0.0001f32..0.5) {
            let mut vel = Vec2::new(0.0, vy);
            for _ in 0..200 {
                apply_gravity(&mut vel, dt);
                prop_assert!(vel.y <= MAX_FALL_SPEED);
            }
        }

        #[test]
        fn prop_friction_converges_to_zero(vx in -600.0f32..600.0) {
            let mut vel = Vec2::new(vx, 0.0);
            let mut previous = vel.x.abs();
            for _ in 0..500 {
                apply_friction(&mut vel, true);
                let magnitude = vel.x.abs();
                prop_assert!(magnitude < previous || magnitude == 0.0);
                previous = magnitude;
                if magnitude == 0.0 {
                    break;
                }
            }
            prop_assert_eq!(vel.x, 0.0);
        }
    }
}
