//! Falling piece module - the single live tetromino
//!
//! A piece is an anchor position, a rotation-state index, and a tick
//! accumulator. Gravity is frame-based: each frame the accumulator grows by
//! the difficulty-adjusted fall rate (or the soft-drop rate while soft drop
//! is held) and the piece falls one row when it crosses
//! `FALL_TICK_THRESHOLD`. The grid owns all collision decisions; this type
//! only moves where it is told.

use crate::pieces::{rotation_states, PieceShape, SPAWN_POSITION};
use crate::scoring::{adjusted_fall_rate, soft_drop_rate};
use crate::types::{BlockColor, PieceKind, DEFAULT_FALL_RATE, FALL_TICK_THRESHOLD};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallingPiece {
    kind: PieceKind,
    rot_index: usize,
    x: i8,
    y: i8,
    color: BlockColor,
    fall_ticks: u32,
    base_rate: u32,
    fall_rate: u32,
    drop_rate: u32,
    soft_drop: bool,
}

impl FallingPiece {
    /// Create a new piece at the spawn anchor with the default base rate
    pub fn new(kind: PieceKind, difficulty: u32) -> Self {
        Self::with_base_rate(kind, difficulty, DEFAULT_FALL_RATE)
    }

    /// Create a piece with an explicit base fall rate
    pub fn with_base_rate(kind: PieceKind, difficulty: u32, base_rate: u32) -> Self {
        let (x, y) = SPAWN_POSITION;
        let mut piece = Self {
            kind,
            rot_index: 0,
            x,
            y,
            color: kind.color(),
            fall_ticks: 0,
            base_rate,
            fall_rate: 0,
            drop_rate: 0,
            soft_drop: false,
        };
        piece.refresh_rates(difficulty);
        piece
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> BlockColor {
        self.color
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn rot_index(&self) -> usize {
        self.rot_index
    }

    pub fn is_soft_dropping(&self) -> bool {
        self.soft_drop
    }

    pub fn fall_rate(&self) -> u32 {
        self.fall_rate
    }

    pub fn drop_rate(&self) -> u32 {
        self.drop_rate
    }

    pub fn fall_ticks(&self) -> u32 {
        self.fall_ticks
    }

    /// Cell offsets of the current rotation state
    pub fn shape(&self) -> &'static PieceShape {
        &rotation_states(self.kind)[self.rot_index]
    }

    /// Absolute board positions of the four cells
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Advance to the next rotation state
    ///
    /// The caller validates the new footprint and calls [`unrotate`] to back
    /// out if it does not fit.
    ///
    /// [`unrotate`]: FallingPiece::unrotate
    pub fn rotate(&mut self) {
        self.rot_index = (self.rot_index + 1) % self.state_count();
    }

    /// Step back to the previous rotation state
    pub fn unrotate(&mut self) {
        let count = self.state_count();
        self.rot_index = (self.rot_index + count - 1) % count;
    }

    fn state_count(&self) -> usize {
        rotation_states(self.kind).len()
    }

    /// Move the anchor horizontally; the grid checks the target first
    pub fn shift(&mut self, dx: i8) {
        self.x += dx;
    }

    /// Move the anchor one row down; the grid checks the target first
    pub fn descend(&mut self) {
        self.y += 1;
    }

    /// Engage or release soft drop
    pub fn set_soft_drop(&mut self, on: bool) {
        self.soft_drop = on;
    }

    /// Recompute fall and drop rates from the base rate and difficulty
    ///
    /// Called at spawn and after each completed fall step, so a difficulty
    /// change never alters a fall already in progress.
    pub fn refresh_rates(&mut self, difficulty: u32) {
        self.fall_rate = adjusted_fall_rate(self.base_rate, difficulty);
        self.drop_rate = soft_drop_rate(self.fall_rate);
    }

    /// Advance the gravity accumulator by one frame
    ///
    /// Checks the threshold before accumulating, so the fall fires on the
    /// frame after the accumulator crosses it. Returns true when the piece
    /// should fall one row this frame; the accumulator resets then.
    pub fn tick(&mut self) -> bool {
        if self.fall_ticks >= FALL_TICK_THRESHOLD {
            self.fall_ticks = 0;
            return true;
        }
        let rate = if self.soft_drop {
            self.drop_rate
        } else {
            self.fall_rate
        };
        self.fall_ticks += rate;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_state() {
        let piece = FallingPiece::new(PieceKind::T, 1);
        assert_eq!((piece.x(), piece.y()), SPAWN_POSITION);
        assert_eq!(piece.rot_index(), 0);
        assert_eq!(piece.color(), BlockColor::Purple);
        assert!(!piece.is_soft_dropping());

        // 5 * 1 * 5 / 7 = 3, soft drop floored at 30
        assert_eq!(piece.fall_rate(), 3);
        assert_eq!(piece.drop_rate(), 30);
    }

    #[test]
    fn test_tick_accumulates_then_fires() {
        let mut piece = FallingPiece::new(PieceKind::O, 1);

        // Rate 3: accumulator crosses 100 after 34 frames, fires on the 35th
        for frame in 0..34 {
            assert!(!piece.tick(), "fired early on frame {}", frame);
        }
        assert!(piece.tick());
        assert_eq!(piece.fall_ticks(), 0);

        // The cycle repeats from a clean accumulator
        assert!(!piece.tick());
        assert_eq!(piece.fall_ticks(), 3);
    }

    #[test]
    fn test_exact_threshold_hit_fires_next_frame() {
        // Base 28 at difficulty 1 gives rate 20; five frames reach exactly 100
        let mut piece = FallingPiece::with_base_rate(PieceKind::I, 1, 28);
        assert_eq!(piece.fall_rate(), 20);

        for _ in 0..5 {
            assert!(!piece.tick());
        }
        assert_eq!(piece.fall_ticks(), 100);
        assert!(piece.tick());
    }

    #[test]
    fn test_soft_drop_accumulates_faster() {
        let mut piece = FallingPiece::new(PieceKind::S, 1);
        piece.set_soft_drop(true);

        // Floored drop rate 30: fires on the 5th frame instead of the 35th
        for _ in 0..4 {
            assert!(!piece.tick());
        }
        assert!(piece.tick());

        piece.set_soft_drop(false);
        assert!(!piece.tick());
        assert_eq!(piece.fall_ticks(), 3);
    }

    #[test]
    fn test_rotation_cycles_through_states() {
        let mut piece = FallingPiece::new(PieceKind::T, 1);
        for expected in [1, 2, 3, 0, 1] {
            piece.rotate();
            assert_eq!(piece.rot_index(), expected);
        }

        piece.unrotate();
        assert_eq!(piece.rot_index(), 0);
        piece.unrotate();
        assert_eq!(piece.rot_index(), 3);

        // O never leaves its single state
        let mut square = FallingPiece::new(PieceKind::O, 1);
        square.rotate();
        assert_eq!(square.rot_index(), 0);
    }

    #[test]
    fn test_cells_are_anchor_plus_offsets() {
        let piece = FallingPiece::new(PieceKind::O, 1);
        let mut cells = piece.cells();
        cells.sort();
        assert_eq!(cells, [(4, 1), (4, 2), (5, 1), (5, 2)]);
    }

    #[test]
    fn test_refresh_rates_tracks_difficulty() {
        let mut piece = FallingPiece::new(PieceKind::Z, 1);
        assert_eq!(piece.fall_rate(), 3);

        piece.refresh_rates(4);
        assert_eq!(piece.fall_rate(), 14);
        assert_eq!(piece.drop_rate(), 140);
    }
}
