//! Scoring module - reward table, difficulty ramp, and fall-rate arithmetic
//!
//! Classic single-award rules: a lock awards `BASE_REWARDS[n] * difficulty`
//! for `n` rows cleared at once, with index 0 the consolation point for a
//! lock that clears nothing. Difficulty starts at 1, rises by one for every
//! `STAGE_THRESHOLD` cleared rows, and tops out at `MAX_DIFFICULTY`; the
//! reward table is rebuilt whenever difficulty changes.

use crate::types::{
    BASE_REWARDS, MAX_DIFFICULTY, SOFT_DROP_FLOOR, SOFT_DROP_MULTIPLIER, STAGE_THRESHOLD,
    START_DIFFICULTY,
};

/// Reward table for a single difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRewards {
    rewards: [u32; 5],
}

impl ScoreRewards {
    /// Build the table for a difficulty level: every base reward scales
    /// linearly
    pub fn for_difficulty(difficulty: u32) -> Self {
        Self {
            rewards: BASE_REWARDS.map(|base| base * difficulty),
        }
    }

    /// Award for clearing `lines` rows in one lock (0-4)
    pub fn reward(&self, lines: u32) -> u32 {
        self.rewards.get(lines as usize).copied().unwrap_or(0)
    }

    /// The full table, indexed by rows cleared
    pub fn as_array(&self) -> [u32; 5] {
        self.rewards
    }
}

/// Difficulty level plus progress toward the next one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difficulty {
    level: u32,
    stage: u32,
}

impl Difficulty {
    pub fn new() -> Self {
        Self {
            level: START_DIFFICULTY,
            stage: 0,
        }
    }

    /// Current difficulty level (1..=MAX_DIFFICULTY)
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Rows cleared since the last level-up
    pub fn stage(&self) -> u32 {
        self.stage
    }

    /// Record rows cleared by a lock
    pub fn record_cleared(&mut self, lines: u32) {
        self.stage = self.stage.saturating_add(lines);
    }

    /// Whether enough rows have accumulated to raise the level
    ///
    /// Never true at `MAX_DIFFICULTY`; a capped-out session keeps playing at
    /// the top level.
    pub fn level_up_pending(&self) -> bool {
        self.stage >= STAGE_THRESHOLD && self.level < MAX_DIFFICULTY
    }

    /// Raise the level if one is pending, resetting stage progress
    ///
    /// Returns true when the level changed so callers can rebuild anything
    /// derived from it (reward table, fall rates).
    pub fn apply_level_up(&mut self) -> bool {
        if !self.level_up_pending() {
            return false;
        }
        self.level += 1;
        self.stage = 0;
        true
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::new()
    }
}

/// Difficulty-adjusted fall rate in ticks per frame
///
/// The classic curve divides `base * difficulty` by 1.4; since 1.4 = 7/5,
/// multiplying by 5 and dividing by 7 is the same truncated result in pure
/// integer arithmetic.
pub fn adjusted_fall_rate(base: u32, difficulty: u32) -> u32 {
    base * difficulty * 5 / 7
}

/// Soft-drop rate for an adjusted fall rate
///
/// Ten times the gravity rate, floored so soft drop feels responsive even at
/// difficulty 1.
pub fn soft_drop_rate(adjusted: u32) -> u32 {
    (adjusted * SOFT_DROP_MULTIPLIER).max(SOFT_DROP_FLOOR)
}
