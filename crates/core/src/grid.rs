//! Grid module - the complete game session
//!
//! Ties the board, the falling piece, scoring, and piece selection into one
//! session. A driver calls [`Grid::advance_frame`] once per frame, feeds
//! player intents, drains events, and polls [`Grid::check_game_over`];
//! everything else happens in here.
//!
//! A frame advances in a fixed order: a pending level-up applies first, then
//! the gravity accumulator ticks, and a fired tick either descends the piece
//! or locks it. Locking assimilates the cells into the board, resolves full
//! rows, awards score, selects a sound cue, and spawns the replacement
//! piece. Game over latches when a lock leaves the sentinel row occupied or
//! the replacement cannot fit; from then on every mutating entry point is
//! inert until a fresh grid replaces this one.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::piece::FallingPiece;
use crate::rng::{PiecePicker, PieceRng};
use crate::scoring::{Difficulty, ScoreRewards};
use crate::snapshot::{ActivePiece, GridSnapshot};
use crate::types::{GameEvent, GameIntent, SoundCue, BOARD_HEIGHT, BOARD_WIDTH};

/// Event buffer capacity; a single frame emits at most four events
const EVENT_CAPACITY: usize = 8;

/// Complete game session, generic over the piece source
#[derive(Debug, Clone)]
pub struct Grid<P: PiecePicker = PieceRng> {
    board: Board,
    piece: FallingPiece,
    picker: P,
    score: u32,
    difficulty: Difficulty,
    rewards: ScoreRewards,
    game_over: bool,
    events: ArrayVec<GameEvent, EVENT_CAPACITY>,
}

impl Grid {
    /// Create a new session with a seeded random piece source
    pub fn new(seed: u32) -> Self {
        Self::with_picker(PieceRng::new(seed))
    }
}

impl<P: PiecePicker> Grid<P> {
    /// Create a new session drawing pieces from `picker`
    ///
    /// The first piece spawns immediately; on an empty board a spawn can
    /// never be blocked.
    pub fn with_picker(mut picker: P) -> Self {
        let difficulty = Difficulty::new();
        let rewards = ScoreRewards::for_difficulty(difficulty.level());
        let piece = FallingPiece::new(picker.next_kind(), difficulty.level());

        Self {
            board: Board::new(),
            piece,
            picker,
            score: 0,
            difficulty,
            rewards,
            game_over: false,
            events: ArrayVec::new(),
        }
    }

    /// Advance the session by one frame
    ///
    /// Applies a pending level-up, ticks gravity, and on a fired tick either
    /// descends the piece one row or locks it in place. Does nothing once
    /// game over has latched.
    pub fn advance_frame(&mut self) {
        if self.game_over {
            return;
        }

        // Level-ups apply at the frame boundary so rewards and rates change
        // between falls, never inside one
        if self.difficulty.apply_level_up() {
            self.rewards = ScoreRewards::for_difficulty(self.difficulty.level());
        }

        if !self.piece.tick() {
            return;
        }

        // Rates follow completed fall steps, not individual frames
        self.piece.refresh_rates(self.difficulty.level());

        if self.would_collide((0, 1)) || self.is_out_of_bounds((0, 1)) {
            self.lock_piece();
        } else {
            self.piece.descend();
        }
    }

    /// Apply a player intent; impossible requests are silently ignored
    pub fn apply_intent(&mut self, intent: GameIntent) {
        match intent {
            GameIntent::MoveLeft => self.move_left(),
            GameIntent::MoveRight => self.move_right(),
            GameIntent::Rotate => self.try_rotate(),
            GameIntent::SoftDrop(on) => self.set_soft_drop(on),
        }
    }

    /// Shift the piece one column left if the target footprint is free
    pub fn move_left(&mut self) {
        if !self.game_over {
            self.try_shift(-1);
        }
    }

    /// Shift the piece one column right if the target footprint is free
    pub fn move_right(&mut self) {
        if !self.game_over {
            self.try_shift(1);
        }
    }

    fn try_shift(&mut self, dx: i8) {
        if !self.would_collide((dx, 0)) && !self.is_out_of_bounds((dx, 0)) {
            self.piece.shift(dx);
        }
    }

    /// Advance the piece to its next rotation state, backing out if the new
    /// footprint collides or leaves the board
    pub fn try_rotate(&mut self) {
        if self.game_over {
            return;
        }
        self.piece.rotate();
        if self.would_collide((0, 0)) || self.is_out_of_bounds((0, 0)) {
            self.piece.unrotate();
        }
    }

    /// Engage or release soft drop for the active piece
    pub fn set_soft_drop(&mut self, on: bool) {
        if !self.game_over {
            self.piece.set_soft_drop(on);
        }
    }

    /// Would the piece, shifted by `offset`, overlap a locked cell
    ///
    /// Occupancy and bounds are separate questions: a cell beyond the walls
    /// or floor is not "occupied", it is out of bounds, and
    /// [`is_out_of_bounds`] answers that. Callers consult both before
    /// committing any move.
    ///
    /// [`is_out_of_bounds`]: Grid::is_out_of_bounds
    pub fn would_collide(&self, offset: (i8, i8)) -> bool {
        let (dx, dy) = offset;
        self.piece
            .cells()
            .iter()
            .any(|&(x, y)| self.board.is_occupied(x + dx, y + dy))
    }

    /// Would the piece, shifted by `offset`, cross a wall or the floor
    ///
    /// The sentinel row is in bounds, and there is no ceiling check: spawn
    /// geometry keeps every reachable cell at row 0 or below.
    pub fn is_out_of_bounds(&self, offset: (i8, i8)) -> bool {
        let (dx, dy) = offset;
        self.piece.cells().iter().any(|&(x, y)| {
            let nx = x + dx;
            let ny = y + dy;
            nx < 0 || nx >= BOARD_WIDTH as i8 || ny >= BOARD_HEIGHT as i8
        })
    }

    /// Lock the piece where it rests, resolve the board, and spawn the next
    /// piece
    fn lock_piece(&mut self) {
        self.board
            .lock_cells(&self.piece.cells(), self.piece.color());

        self.clear_lines();

        // A cell left in the sentinel row means the stack reached the top
        if self.board.is_sentinel_occupied() {
            self.latch_game_over();
        }

        self.spawn_next();
    }

    /// Clear full rows, award score, advance the stage, and pick the cue
    fn clear_lines(&mut self) {
        // Single top-to-bottom pass: removing a row shifts only rows above
        // the scan point, so each original row is examined exactly once
        let mut cleared = 0u32;
        for y in 0..BOARD_HEIGHT as usize {
            if self.board.is_row_full(y) {
                self.board.remove_row(y);
                cleared += 1;
            }
        }

        let points = self.rewards.reward(cleared);
        self.score = self.score.saturating_add(points);
        self.push_event(GameEvent::ScoreAwarded { points });
        self.push_event(GameEvent::LinesCleared { count: cleared });

        self.difficulty.record_cleared(cleared);

        // The level-up fanfare outranks the per-clear cues
        let cue = if self.difficulty.level_up_pending() {
            SoundCue::LevelUp
        } else {
            SoundCue::for_lines(cleared)
        };
        self.push_event(GameEvent::CueSelected(cue));
    }

    /// Replace the active piece with a fresh spawn
    ///
    /// The grid always owns a piece, so the replacement is constructed even
    /// when it cannot fit; an overlapping spawn latches game over and the
    /// frozen piece simply never moves again.
    fn spawn_next(&mut self) {
        let kind = self.picker.next_kind();
        let piece = FallingPiece::new(kind, self.difficulty.level());

        if !self.game_over {
            let blocked = piece
                .cells()
                .iter()
                .any(|&(x, y)| self.board.is_occupied(x, y));
            if blocked {
                self.latch_game_over();
            }
        }

        self.piece = piece;
    }

    fn latch_game_over(&mut self) {
        self.game_over = true;
        self.push_event(GameEvent::GameOver);
    }

    fn push_event(&mut self, event: GameEvent) {
        // With no draining driver the overflow is dropped, never resized
        let _ = self.events.try_push(event);
    }

    /// Whether the session has ended
    ///
    /// Latches true when a lock leaves the sentinel row occupied or a fresh
    /// spawn cannot fit, and stays true until a new grid replaces this one.
    pub fn check_game_over(&self) -> bool {
        self.game_over
    }

    /// Drain all pending events in emission order
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, EVENT_CAPACITY> {
        std::mem::take(&mut self.events)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current difficulty level (1..=20)
    pub fn difficulty(&self) -> u32 {
        self.difficulty.level()
    }

    /// Rows cleared since the last level-up
    pub fn stage(&self) -> u32 {
        self.difficulty.stage()
    }

    /// The reward table currently in effect
    pub fn score_rewards(&self) -> [u32; 5] {
        self.rewards.as_array()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn piece(&self) -> &FallingPiece {
        &self.piece
    }

    /// Renderable view of the active piece
    pub fn active_piece(&self) -> ActivePiece {
        ActivePiece::from(&self.piece)
    }

    /// Fill a caller-owned snapshot without allocating
    pub fn snapshot_into(&self, out: &mut GridSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active_piece();
        out.score = self.score;
        out.difficulty = self.difficulty.level();
        out.stage = self.difficulty.stage();
        out.rewards = self.rewards.as_array();
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GridSnapshot {
        let mut snapshot = GridSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}
