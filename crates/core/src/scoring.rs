//! Scoring engine: line-clear points, combo streaks, back-to-back bonuses,
//! and drop points.
//!
//! All score state for a session lives here and is only mutated through
//! these methods; the placement path calls `score_clear` on clearing locks
//! and `reset_combo` on non-clearing ones.

use blockfall_types::{
    BACK_TO_BACK_BONUS, CLEAR_BASE_POINTS, CLEAR_EXTRA_LINE_POINTS, COMBO_STEP_POINTS,
    GRAVITY_FLOOR_MS, GRAVITY_INTERVALS_MS, HARD_DROP_POINTS, SOFT_DROP_POINTS,
};

#[derive(Debug, Clone, Default)]
pub struct ScoreKeeper {
    points: u32,
    combo_streak: u32,
    last_clear_was_tetris: bool,
}

impl ScoreKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score a placement that removed `lines` rows (must be >= 1).
    ///
    /// Advances the combo streak, applies the back-to-back bonus when this
    /// and the previous clear were both exactly four lines, updates the
    /// four-line flag, and returns the points awarded by this clear.
    pub fn score_clear(&mut self, lines: u32) -> u32 {
        debug_assert!(lines >= 1, "non-clearing placements go through reset_combo");

        let base = if (lines as usize) < CLEAR_BASE_POINTS.len() {
            CLEAR_BASE_POINTS[lines as usize]
        } else {
            // Beyond four lines cannot happen with 4-cell pieces; priced anyway.
            CLEAR_BASE_POINTS[4] + (lines - 4) * CLEAR_EXTRA_LINE_POINTS
        };

        self.combo_streak += 1;
        let combo_bonus = (self.combo_streak - 1) * COMBO_STEP_POINTS;

        let is_tetris = lines == 4;
        let back_to_back = if is_tetris && self.last_clear_was_tetris {
            BACK_TO_BACK_BONUS
        } else {
            0
        };
        self.last_clear_was_tetris = is_tetris;

        let awarded = base + combo_bonus + back_to_back;
        self.points = self.points.saturating_add(awarded);
        awarded
    }

    /// A placement that cleared nothing: the streak and the four-line flag
    /// both fall back to their idle state.
    pub fn reset_combo(&mut self) {
        self.combo_streak = 0;
        self.last_clear_was_tetris = false;
    }

    /// Points for cells descended by explicit player soft drops.
    pub fn score_soft_drop(&mut self, cells: u32) -> u32 {
        let awarded = cells * SOFT_DROP_POINTS;
        self.points = self.points.saturating_add(awarded);
        awarded
    }

    /// Points for the distance between a hard drop's start and resting rows.
    pub fn score_hard_drop(&mut self, cells: u32) -> u32 {
        let awarded = cells * HARD_DROP_POINTS;
        self.points = self.points.saturating_add(awarded);
        awarded
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn combo_streak(&self) -> u32 {
        self.combo_streak
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Gravity interval for the external driver, decreasing as lines clear.
/// The engine never consumes this itself; it only reacts to delivered ticks.
pub fn gravity_interval_ms(lines_cleared: u32) -> u64 {
    let level = (lines_cleared / 10) as usize;
    if level < GRAVITY_INTERVALS_MS.len() {
        GRAVITY_INTERVALS_MS[level]
    } else {
        GRAVITY_FLOOR_MS
    }
}
