//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all game rules, session state, and simulation logic.
//! It has **zero dependencies** on UI, timing, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical sessions
//! - **Testable**: Every rule is exercised without a terminal attached
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for frame advancement
//!
//! # Module Structure
//!
//! - [`board`]: 10x21 locked-cell storage with the hidden sentinel row
//! - [`pieces`]: anchor-relative rotation state tables for the seven kinds
//! - [`piece`]: the falling piece and its gravity accumulator
//! - [`scoring`]: reward tables, difficulty staging, and the fall-rate curve
//! - [`rng`]: piece selection, seeded-random or scripted
//! - [`grid`]: the session orchestrator that ties the rest together
//! - [`snapshot`]: renderable copies of a session's state
//!
//! # Game Rules
//!
//! This implementation follows the classic ruleset:
//!
//! - **Uniform Randomizer**: Every spawn draws uniformly from the seven
//!   kinds, so droughts and floods happen
//! - **Pure Rotation**: Pieces rotate about their anchor with no wall kicks;
//!   a blocked rotation is simply refused
//! - **Immediate Lock**: A piece that cannot descend locks where it rests,
//!   with no lock delay and no slide window
//! - **Single Reward**: Each lock awards one table entry for the rows it
//!   cleared, from 1 point for none up to 800 for four
//! - **Difficulty Staging**: Every 20 cleared rows raise the level, scaling
//!   both rewards and gravity up to level 20
//!
//! # Example
//!
//! ```
//! use blockfall_core::types::GameIntent;
//! use blockfall_core::Grid;
//!
//! let mut grid = Grid::new(12345);
//! grid.apply_intent(GameIntent::MoveLeft);
//! grid.apply_intent(GameIntent::SoftDrop(true));
//!
//! for _ in 0..600 {
//!     grid.advance_frame();
//! }
//!
//! // Soft-dropping across an empty board locks at least one piece,
//! // and every lock awards at least the consolation point
//! assert!(grid.score() > 0);
//! ```
//!
//! # Timing
//!
//! The session has no clock of its own. A driver calls
//! [`Grid::advance_frame`](grid::Grid::advance_frame) on a fixed cadence
//! (16ms frames, approximately 60 FPS) and the gravity accumulator converts
//! frames into descent:
//!
//! - **Fall Rate**: `base * difficulty / 1.4` per frame, against a
//!   threshold of 100
//! - **Soft Drop**: 10x the fall rate, floored at 30
//! - **Lock**: immediate on the first blocked descent

pub mod board;
pub mod grid;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use grid::Grid;
pub use piece::FallingPiece;
pub use pieces::{rotation_states, CellOffset, PieceShape, SPAWN_POSITION};
pub use rng::{PiecePicker, PieceRng, SequencePicker};
pub use scoring::{adjusted_fall_rate, soft_drop_rate, Difficulty, ScoreRewards};
pub use snapshot::{ActivePiece, GridSnapshot};
