//! RNG module - piece selection
//!
//! Piece choice is the engine's only source of randomness and is injected
//! through the [`PiecePicker`] trait: production sessions use the seeded
//! [`PieceRng`], tests use a scripted [`SequencePicker`]. Every draw is an
//! independent uniform pick among the seven kinds; there is no bag, so
//! droughts and repeats happen just like in the classic game.

use crate::types::PieceKind;

/// Source of the next piece kind
///
/// The grid calls this exactly once per spawn. Implementations own the
/// distribution; the grid never looks ahead.
pub trait PiecePicker {
    fn next_kind(&mut self) -> PieceKind;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct PieceRng {
    state: u32,
}

impl PieceRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

impl PiecePicker for PieceRng {
    fn next_kind(&mut self) -> PieceKind {
        let idx = self.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }
}

/// Scripted piece feed, cycling through a fixed list forever
///
/// Lets tests pin the exact spawn order without faking RNG state.
#[derive(Debug, Clone)]
pub struct SequencePicker {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl SequencePicker {
    /// Build a picker that yields `kinds` in order, wrapping around
    pub fn new(kinds: &[PieceKind]) -> Self {
        assert!(!kinds.is_empty(), "sequence picker needs at least one kind");
        Self {
            kinds: kinds.to_vec(),
            next: 0,
        }
    }
}

impl PiecePicker for SequencePicker {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}
