//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, rendering, drivers, tests).
//!
//! # Board Dimensions
//!
//! Classic falling-block playfield with a hidden overflow row:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 21 rows (indexed 0-20)
//! - **Row 0**: hidden sentinel row; pieces spawn into it and a locked cell
//!   there means the stack has topped out
//! - **Rows 1-20**: the visible playfield
//!
//! # Game Timing Constants
//!
//! Gravity is driven by an accumulator, not wall-clock time: every frame the
//! active piece adds its fall rate to a tick counter, and the piece falls one
//! row when the counter crosses the threshold. Higher rates mean faster falls.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Driver frame interval (~60 FPS) |
//! | `FALL_TICK_THRESHOLD` | 100 | Accumulator value that triggers a fall step |
//! | `DEFAULT_FALL_RATE` | 5 | Base ticks added per frame before difficulty scaling |
//! | `SOFT_DROP_MULTIPLIER` | 10 | Soft drop accumulates 10x faster |
//! | `SOFT_DROP_FLOOR` | 30 | Minimum soft-drop rate at low difficulty |
//! | `SOFT_DROP_GRACE_MS` | 150 | Driver-side soft drop release timeout |
//!
//! # Difficulty and Scoring
//!
//! Difficulty starts at 1 and rises by 1 for every `STAGE_THRESHOLD` cleared
//! rows, capping at `MAX_DIFFICULTY`. Rewards scale linearly with difficulty:
//!
//! | Rows cleared at once | Base reward |
//! |----------------------|-------------|
//! | 0 (plain lock) | 1 |
//! | 1 | 100 |
//! | 2 | 300 |
//! | 3 | 500 |
//! | 4 | 800 |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{BlockColor, GameIntent, PieceKind, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! // Every kind appears exactly once in the canonical ordering
//! assert_eq!(PieceKind::ALL.len(), 7);
//!
//! // Kind determines color
//! assert_eq!(PieceKind::I.color(), BlockColor::Cyan);
//! assert_eq!(PieceKind::Z.color(), BlockColor::Red);
//!
//! // Horizontal movement intents
//! let intent = GameIntent::MoveLeft;
//! assert_ne!(intent, GameIntent::MoveRight);
//!
//! // Board dimensions (height includes the hidden sentinel row)
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 21);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (21 rows: sentinel row 0 plus 20 visible rows)
pub const BOARD_HEIGHT: u8 = 21;

/// Number of rows shown by renderers (everything below the sentinel row)
pub const VISIBLE_ROWS: u8 = 20;

/// Driver frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Accumulated ticks required before the active piece falls one row
pub const FALL_TICK_THRESHOLD: u32 = 100;

/// Base ticks-per-frame fall rate before difficulty scaling
pub const DEFAULT_FALL_RATE: u32 = 5;

/// Soft drop accumulates ticks 10x faster than the adjusted fall rate
pub const SOFT_DROP_MULTIPLIER: u32 = 10;

/// Minimum soft-drop rate, so early levels still drop briskly
pub const SOFT_DROP_FLOOR: u32 = 30;

/// Driver-side timeout before a held soft drop is released (no key-up events
/// on plain terminals)
pub const SOFT_DROP_GRACE_MS: u32 = 150;

/// Difficulty at the start of a session
pub const START_DIFFICULTY: u32 = 1;

/// Difficulty never rises past this value
pub const MAX_DIFFICULTY: u32 = 20;

/// Cleared rows needed to advance one difficulty level
pub const STAGE_THRESHOLD: u32 = 20;

/// Reward table indexed by rows cleared in a single lock (0-4)
///
/// The award for a lock is `BASE_REWARDS[n] * difficulty`; index 0 is the
/// consolation point for a lock that clears nothing.
pub const BASE_REWARDS: [u32; 5] = [1, 100, 300, 500, 800];


/// The seven tetromino piece kinds
///
/// Each kind owns one color and one table of rotation states:
/// - **I**: Cyan, horizontal bar (2 rotation states)
/// - **J**: Blue, J-shaped (4 states)
/// - **L**: Orange, L-shaped, mirror of J (4 states)
/// - **O**: Yellow, 2x2 square (1 state)
/// - **S**: Green, S-shaped (2 states)
/// - **Z**: Red, Z-shaped, mirror of S (2 states)
/// - **T**: Purple, T-shaped (4 states)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    Z,
    T,
}

impl PieceKind {
    /// All kinds in canonical order; piece pickers index into this
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
    ];

    /// The fixed color cells of this kind carry once locked
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::{BlockColor, PieceKind};
    ///
    /// assert_eq!(PieceKind::O.color(), BlockColor::Yellow);
    /// assert_eq!(PieceKind::T.color(), BlockColor::Purple);
    /// ```
    pub fn color(&self) -> BlockColor {
        match self {
            PieceKind::I => BlockColor::Cyan,
            PieceKind::J => BlockColor::Blue,
            PieceKind::L => BlockColor::Orange,
            PieceKind::O => BlockColor::Yellow,
            PieceKind::S => BlockColor::Green,
            PieceKind::Z => BlockColor::Red,
            PieceKind::T => BlockColor::Purple,
        }
    }
}

/// Display color of a locked or falling block
///
/// The engine never inspects colors; they ride along in cells so renderers
/// can paint the stack without consulting piece history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Blue,
    Cyan,
    Green,
    Orange,
    Purple,
    Red,
    Yellow,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(BlockColor)`: Cell filled by a locked block of that color
///
/// Used internally by the board as a flat array of cells.
pub type Cell = Option<BlockColor>;

/// Player intents that steer the active piece
///
/// Intents are requests: the grid silently ignores any intent whose result
/// would collide with the stack or leave the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameIntent {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Advance piece to its next rotation state
    Rotate,
    /// Engage (`true`) or release (`false`) the accelerated soft drop
    SoftDrop(bool),
}

/// Sound cue selected by the engine after a piece locks
///
/// Cues are decided inside the lock step because the level-up cue depends on
/// stage progress only the engine tracks. Audio backends map `index()` to a
/// slot in their sample table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// A piece locked without clearing anything
    PieceLocked,
    /// One row cleared
    Single,
    /// Two rows cleared
    Double,
    /// Three rows cleared
    Triple,
    /// Four rows cleared
    Tetris,
    /// The lock pushed the session over a difficulty stage boundary
    LevelUp,
}

impl SoundCue {
    /// Cue for a lock that cleared `lines` rows (0-4)
    pub fn for_lines(lines: u32) -> Self {
        match lines {
            0 => SoundCue::PieceLocked,
            1 => SoundCue::Single,
            2 => SoundCue::Double,
            3 => SoundCue::Triple,
            _ => SoundCue::Tetris,
        }
    }

    /// Sample-table slot for this cue
    pub fn index(&self) -> usize {
        match self {
            SoundCue::PieceLocked => 0,
            SoundCue::Single => 1,
            SoundCue::Double => 2,
            SoundCue::Triple => 3,
            SoundCue::Tetris => 4,
            SoundCue::LevelUp => 5,
        }
    }

    /// Short human-readable label, used by the TUI status line
    pub fn label(&self) -> &'static str {
        match self {
            SoundCue::PieceLocked => "lock",
            SoundCue::Single => "single",
            SoundCue::Double => "double",
            SoundCue::Triple => "triple",
            SoundCue::Tetris => "tetris",
            SoundCue::LevelUp => "level up",
        }
    }
}

/// Engine-side event emitted while a frame advances
///
/// Events accumulate in the grid until a driver drains them, so collaborators
/// (score displays, audio) can react without the engine knowing about them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Points were added to the session score
    ScoreAwarded { points: u32 },
    /// A lock resolved; `count` rows were cleared (may be 0)
    LinesCleared { count: u32 },
    /// The engine picked a sound cue for the last lock
    CueSelected(SoundCue),
    /// The stack topped out; the session is over
    GameOver,
}
