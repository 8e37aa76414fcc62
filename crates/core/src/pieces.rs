//! Pieces module - tetromino shapes as anchor-relative rotation states
//!
//! A shape is four (dx, dy) cell offsets from the piece anchor, and the
//! anchor is always one of the four cells (offset (0, 0)). Rotation walks a
//! fixed per-kind table: O has 1 state, I/S/Z have 2, J/L/T have 4, the
//! four-state tables generated from a base state by successive 90-degree
//! clockwise turns around the anchor. There are no wall kicks: a rotation
//! that would collide or leave the board is refused outright.

use crate::types::PieceKind;

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the piece anchor
pub type PieceShape = [CellOffset; 4];

/// Rotate a shape 90 degrees clockwise around the anchor.
///
/// With y growing downward this is (dx, dy) -> (-dy, dx).
const fn rotate_cw(shape: PieceShape) -> PieceShape {
    let mut out: PieceShape = [(0, 0); 4];
    let mut i = 0;
    while i < 4 {
        let (dx, dy) = shape[i];
        out[i] = (-dy, dx);
        i += 1;
    }
    out
}

/// Expand a base state into its full four-state clockwise cycle
const fn four_states(base: PieceShape) -> [PieceShape; 4] {
    let r1 = rotate_cw(base);
    let r2 = rotate_cw(r1);
    let r3 = rotate_cw(r2);
    [base, r1, r2, r3]
}

/// I piece: horizontal bar and a vertical bar one cell lower than the pure
/// rotation, so flipping near the ceiling stays on the board
const I_STATES: [PieceShape; 2] = [
    [(0, 0), (-1, 0), (1, 0), (-2, 0)],
    [(0, 0), (0, -1), (0, 2), (0, 1)],
];

/// J piece: full clockwise cycle from the nub-top-left base
const J_STATES: [PieceShape; 4] = four_states([(0, 0), (-1, 0), (-1, -1), (1, 0)]);

/// L piece: full clockwise cycle, mirror of J
const L_STATES: [PieceShape; 4] = four_states([(0, 0), (-1, 0), (1, 0), (-1, 1)]);

/// O piece: a 2x2 block is rotation-invariant
const O_STATES: [PieceShape; 1] = [[(0, 0), (0, 1), (-1, 0), (-1, 1)]];

/// S piece: two states, spawning in the vertical orientation
const S_STATES: [PieceShape; 2] = [
    [(0, 0), (-1, 0), (-1, -1), (0, 1)],
    [(0, 0), (0, -1), (1, -1), (-1, 0)],
];

/// Z piece: two states, mirror of S
const Z_STATES: [PieceShape; 2] = [
    [(0, 0), (-1, -1), (1, 0), (0, -1)],
    [(0, 0), (1, -1), (0, 1), (1, 0)],
];

/// T piece: full clockwise cycle from the point-up base
const T_STATES: [PieceShape; 4] = four_states([(0, 0), (0, -1), (1, 0), (-1, 0)]);

/// Get the rotation-state table for a piece kind
///
/// The returned slice has 1, 2, or 4 entries; the active piece holds an index
/// into it and rotation advances the index modulo the length.
pub fn rotation_states(kind: PieceKind) -> &'static [PieceShape] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::T => &T_STATES,
    }
}

/// Spawn anchor for new pieces (x, y)
///
/// Column 5 is the middle of the 10-wide board. Row 1 sits directly below
/// the sentinel row; shape offsets reach at most one row up, so cells with
/// dy = -1 spawn into the sentinel and nothing ever lands above it.
pub const SPAWN_POSITION: (i8, i8) = (5, 1);
