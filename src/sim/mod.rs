//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module must stay pure and headless:
//! - One synchronous step per rendered frame, wall-clock dt
//! - Stable platform snapshot per physics pass
//! - No rendering, filesystem, or platform dependencies
//! - No failure paths: degenerate inputs degrade to safe defaults

pub mod animation;
pub mod character;
pub mod hook;
pub mod physics;
pub mod pickup;
pub mod platform;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;

pub use animation::{AnimationClock, AnimationStrip, AnimationTable};
pub use character::Character;
pub use hook::{Hook, HookState};
pub use physics::{CollisionOutcome, apply_friction, apply_gravity, handle_collisions};
pub use pickup::{Pickup, PickupKind};
pub use platform::{Platform, PlatformKind};
pub use player::{BehaviorState, Facing, Player};
pub use rect::Rect;
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
