//! Static level platforms
//!
//! Platforms never move; the physics pass and the hook's grapple scan both
//! borrow the same read-only slice of them each frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// What a platform does on contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlatformKind {
    /// Solid ground, walkable
    Ground,
    /// Suspended platform; the only kind the hook can grapple
    #[default]
    Floating,
    /// Kills the player on landing contact
    DeathPit,
}

/// A static axis-aligned platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    bounds: Rect,
    kind: PlatformKind,
}

impl Platform {
    pub fn new(pos: Vec2, size: Vec2, kind: PlatformKind) -> Self {
        Self {
            bounds: Rect::from_corner_size(pos, size),
            kind,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn kind(&self) -> PlatformKind {
        self.kind
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.bounds.size = Vec2::new(width, height);
    }

    pub fn set_kind(&mut self, kind: PlatformKind) {
        self.kind = kind;
    }

    /// Landing on this platform kills the player
    #[inline]
    pub fn is_deadly(&self) -> bool {
        self.kind == PlatformKind::DeathPit
    }

    /// Only floating platforms accept the grappling hook
    #[inline]
    pub fn is_grapplable(&self) -> bool {
        self.kind == PlatformKind::Floating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_flags() {
        let p = Platform::new(Vec2::ZERO, Vec2::new(100.0, 20.0), PlatformKind::Ground);
        assert!(!p.is_deadly());
        assert!(!p.is_grapplable());

        let p = Platform::new(Vec2::ZERO, Vec2::new(100.0, 20.0), PlatformKind::Floating);
        assert!(p.is_grapplable());

        let p = Platform::new(Vec2::ZERO, Vec2::new(100.0, 20.0), PlatformKind::DeathPit);
        assert!(p.is_deadly());
    }

    #[test]
    fn test_setters() {
        let mut p = Platform::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0), PlatformKind::Ground);
        p.set_size(150.0, 20.0);
        assert_eq!(p.bounds(), Rect::new(5.0, 5.0, 150.0, 20.0));
        p.set_kind(PlatformKind::DeathPit);
        assert!(p.is_deadly());
    }
}
