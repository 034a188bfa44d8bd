//! Sprite-strip animation component
//!
//! Each behavior state owns one horizontal strip of fixed-size frames on the
//! sprite sheet. The table is configured once at setup; only the clock's
//! frame index mutates on the per-frame path. A renderer reads
//! [`AnimationClock::current_frame`] as the source rectangle to draw.

use super::player::BehaviorState;
use super::rect::Rect;

/// One row of the sprite sheet: `frame_count` cells starting at column 0
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationStrip {
    /// Sheet row index
    pub row: u32,
    pub frame_count: usize,
    /// Looping strips wrap; non-looping strips hold their last frame
    pub looped: bool,
    /// Precomputed source rectangles, one per frame
    pub frames: Vec<Rect>,
}

impl AnimationStrip {
    /// Build a strip from a sheet row of square cells
    pub fn from_sheet_row(row: u32, frame_count: usize, looped: bool, cell: f32) -> Self {
        let frames = (0..frame_count)
            .map(|i| Rect::new(i as f32 * cell, row as f32 * cell, cell, cell))
            .collect();
        Self {
            row,
            frame_count,
            looped,
            frames,
        }
    }

    /// "Finished" is only defined for non-looping strips: the index has
    /// reached the last frame.
    pub fn finished(&self, frame_id: usize) -> bool {
        !self.looped && frame_id + 1 >= self.frame_count
    }
}

/// Frame clock shared across all of an entity's strips
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClock {
    pub frame_id: usize,
    /// Seconds accumulated toward the next frame
    pub timeout: f32,
    /// Playback rate (frames per second)
    pub fps: u32,
    /// Source rectangle currently bound for rendering
    pub current_frame: Rect,
}

impl AnimationClock {
    pub fn new(fps: u32) -> Self {
        Self {
            frame_id: 0,
            timeout: 0.0,
            fps,
            current_frame: Rect::default(),
        }
    }

    /// Restart at frame 0 and bind it immediately, so a state change never
    /// flashes the previous strip's last frame.
    pub fn rebind(&mut self, strip: &AnimationStrip) {
        self.frame_id = 0;
        self.timeout = 0.0;
        if let Some(first) = strip.frames.first() {
            self.current_frame = *first;
        }
    }

    /// Advance the clock by `dt` against the given strip
    pub fn advance(&mut self, strip: &AnimationStrip, dt: f32) {
        if strip.frames.is_empty() || self.fps == 0 {
            return;
        }

        self.timeout += dt;
        if self.timeout >= 1.0 / self.fps as f32 {
            if strip.looped {
                if self.frame_id + 1 >= strip.frame_count {
                    self.frame_id = 0;
                } else {
                    self.frame_id += 1;
                }
            } else if self.frame_id + 1 < strip.frame_count {
                self.frame_id += 1;
            }
            self.timeout = 0.0;
        }

        // Out-of-range index resets to frame 0 rather than failing
        if self.frame_id >= strip.frames.len() {
            self.frame_id = 0;
        }
        self.current_frame = strip.frames[self.frame_id];
    }
}

/// Per-state strip table, indexed directly by [`BehaviorState`].
///
/// An array rather than a map: lookups are a bounds-free index and total
/// coverage is checkable at configuration time. Unconfigured states are
/// allowed; animating against one is a no-op (the pose freezes).
#[derive(Debug, Clone, Default)]
pub struct AnimationTable {
    strips: [Option<AnimationStrip>; BehaviorState::COUNT],
}

impl AnimationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, state: BehaviorState, strip: AnimationStrip) {
        self.strips[state as usize] = Some(strip);
    }

    pub fn get(&self, state: BehaviorState) -> Option<&AnimationStrip> {
        self.strips[state as usize].as_ref()
    }

    /// True when every behavior state has a strip configured
    pub fn is_complete(&self) -> bool {
        self.strips.iter().all(|s| s.is_some())
    }
}
