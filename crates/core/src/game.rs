//! Game session: the placement controller and everything it owns.
//!
//! One `Game` value is one session. It owns the grid, the piece sequencer,
//! the score keeper, the lock-delay machine, the active placement, and the
//! hold slot, and is mutated only through its public operations. All timing
//! lives outside: the driver delivers gravity ticks and the one-shot lock
//! deadline; the engine never blocks or sleeps.

use blockfall_types::{GameCommand, GameConfig, PieceKind, Shape, EMPTY_SHAPE};

use crate::bag::PieceSequencer;
use crate::catalog;
use crate::grid::Grid;
use crate::lock::LockDelay;
use crate::scoring::{gravity_interval_ms, ScoreKeeper};

/// Horizontal wall-kick candidates for a blocked rotation, tried in order:
/// in place, then left by 1..3, then right by 1..3. The first candidate
/// that fits commits. This is the one canonical kick table; there are no
/// vertical kicks.
const KICK_OFFSETS: [i8; 7] = [0, -1, -2, -3, 1, 2, 3];

/// The active falling piece: kind, rotation index, and the board position
/// of its 4x4 box's top-left corner. `y` may be negative while the piece is
/// partially above the visible board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    pub fn shape(&self) -> Shape {
        catalog::shape(self.kind, self.rotation)
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    sequencer: PieceSequencer,
    score: ScoreKeeper,
    lock: LockDelay,
    active: Option<ActivePiece>,
    held: Option<PieceKind>,
    hold_available: bool,
    game_over: bool,
}

impl Game {
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    pub fn with_config(config: GameConfig, seed: u32) -> Self {
        Self {
            grid: Grid::new(config),
            sequencer: PieceSequencer::new(seed),
            score: ScoreKeeper::new(),
            lock: LockDelay::new(),
            active: None,
            held: None,
            hold_available: true,
            game_over: false,
        }
    }

    /// Spawn the first piece. Idempotent once a piece is in play.
    pub fn start(&mut self) {
        if self.active.is_none() && !self.game_over {
            self.spawn_piece();
        }
    }

    /// Wipe the session and spawn afresh. The piece stream continues from
    /// the current RNG state so restarts do not replay the same game.
    pub fn start_new_game(&mut self) {
        self.grid.reset();
        self.score.reset();
        self.lock.reset();
        self.active = None;
        self.held = None;
        self.hold_available = true;
        self.game_over = false;
        self.sequencer = PieceSequencer::new(self.sequencer.rng_state());
        self.spawn_piece();
    }

    /// Spawn position: horizontally centered 4x4 box, one hidden row of
    /// headroom, or two when the stack already reaches the top rows.
    fn spawn_point(&self) -> (i8, i8) {
        let x = self.grid.width() as i8 / 2 - 2;
        let y = if self.grid.is_near_top() { -2 } else { -1 };
        (x, y)
    }

    /// Draw and place the next piece. Returns false when the fresh piece
    /// could not descend even one row: that is the game-over signal, and
    /// the piece is left in place for a final render.
    pub fn spawn_piece(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let (x, y) = self.spawn_point();
        let kind = self.sequencer.draw();
        let piece = ActivePiece {
            kind,
            rotation: 0,
            x,
            y,
        };
        let dead_on_arrival = self.grid.intersects(&piece.shape(), x, y + 1);
        self.active = Some(piece);
        self.lock.reset();
        if dead_on_arrival {
            self.game_over = true;
            return false;
        }
        true
    }

    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::MoveLeft => self.move_left(),
            GameCommand::MoveRight => self.move_right(),
            GameCommand::SoftDrop => self.move_down(),
            GameCommand::HardDrop => self.hard_drop(),
            GameCommand::Rotate => self.rotate(),
            GameCommand::Hold => self.hold(),
            GameCommand::NewGame => {
                self.start_new_game();
                true
            }
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(-1, 0, false)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(1, 0, false)
    }

    /// Player-initiated downward step. Scores one point per cell, unlike
    /// the gravity tick.
    pub fn move_down(&mut self) -> bool {
        self.shift(0, 1, true)
    }

    /// Externally scheduled gravity: one unscored downward step.
    ///
    /// Gravity is not player input, so it neither consumes lock-delay
    /// resets nor triggers the exhausted-budget commit; a grounded piece
    /// just keeps waiting for the deadline.
    pub fn gravity_tick(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };
        let shape = piece.shape();
        if self.grid.intersects(&shape, piece.x, piece.y + 1) {
            self.lock.begin_grace();
            return false;
        }
        self.active = Some(ActivePiece {
            y: piece.y + 1,
            ..piece
        });
        true
    }

    fn shift(&mut self, dx: i8, dy: i8, player_descent: bool) -> bool {
        if self.game_over {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };
        // Out of lock-delay resets: the next command commits the piece
        // instead of being applied, whether or not it would have fit.
        if self.lock.reset_budget_spent() {
            self.lock_active_piece();
            return false;
        }

        let shape = piece.shape();
        if self.grid.intersects(&shape, piece.x + dx, piece.y + dy) {
            if dy > 0 {
                // Failed descent is what arms the lock-delay grace period.
                self.lock.begin_grace();
            }
            return false;
        }

        let moved = ActivePiece {
            x: piece.x + dx,
            y: piece.y + dy,
            ..piece
        };
        let can_descend = !self.grid.intersects(&shape, moved.x, moved.y + 1);
        self.active = Some(moved);
        if player_descent && dy > 0 {
            self.score.score_soft_drop(dy as u32);
        }
        self.lock.register_action(can_descend);
        true
    }

    /// Advance to the next rotation state, kicking horizontally when the
    /// in-place rotation is blocked. Fails without side effects when no
    /// candidate fits.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };
        if self.lock.reset_budget_spent() {
            self.lock_active_piece();
            return false;
        }

        let next_rotation = (piece.rotation + 1) % catalog::rotation_count(piece.kind);
        let shape = catalog::shape(piece.kind, next_rotation);
        for dx in KICK_OFFSETS {
            if self.grid.intersects(&shape, piece.x + dx, piece.y) {
                continue;
            }
            let rotated = ActivePiece {
                rotation: next_rotation,
                x: piece.x + dx,
                ..piece
            };
            let can_descend = !self.grid.intersects(&shape, rotated.x, rotated.y + 1);
            self.active = Some(rotated);
            self.lock.register_action(can_descend);
            return true;
        }
        false
    }

    /// Repeated descent until blocked, then an immediate lock. Scores five
    /// points per cell between the start and resting rows.
    pub fn hard_drop(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };
        let shape = piece.shape();
        let mut y = piece.y;
        let mut distance: u32 = 0;
        while !self.grid.intersects(&shape, piece.x, y + 1) {
            y += 1;
            distance += 1;
        }
        self.active = Some(ActivePiece { y, ..piece });
        self.score.score_hard_drop(distance);
        self.lock_active_piece();
        true
    }

    /// Stash or swap the active piece. Allowed once per lock.
    ///
    /// A swap returns the stashed piece at the default spawn point (never
    /// the raised near-top variant) in rotation 0.
    pub fn hold(&mut self) -> bool {
        if self.game_over || !self.hold_available {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };
        self.hold_available = false;

        match self.held {
            None => {
                self.held = Some(piece.kind);
                self.spawn_piece();
            }
            Some(stashed) => {
                self.held = Some(piece.kind);
                let x = self.grid.width() as i8 / 2 - 2;
                let swapped = ActivePiece {
                    kind: stashed,
                    rotation: 0,
                    x,
                    y: -1,
                };
                let dead_on_arrival = self.grid.intersects(&swapped.shape(), swapped.x, swapped.y + 1);
                self.active = Some(swapped);
                self.lock.reset();
                if dead_on_arrival {
                    self.game_over = true;
                }
            }
        }
        true
    }

    /// Merge the active piece into the grid, consuming it.
    pub fn merge_active_piece(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(piece) = self.active.take() else {
            return false;
        };
        self.grid.merge(&piece.shape(), piece.x, piece.y);
        true
    }

    /// Clear full rows and feed the result to the scoring engine: a
    /// clearing placement extends the combo, a non-clearing one breaks it.
    pub fn clear_rows(&mut self) -> u32 {
        if self.game_over {
            return 0;
        }
        let result = self.grid.clear_full_rows();
        if result.removed > 0 {
            self.score.score_clear(result.removed);
        } else {
            self.score.reset_combo();
        }
        result.removed
    }

    /// Commit pipeline: merge, clear, score, re-enable hold, spawn.
    fn lock_active_piece(&mut self) {
        if self.active.is_none() || self.game_over {
            return;
        }
        self.lock.force_lock();
        self.merge_active_piece();
        self.clear_rows();
        self.hold_available = true;
        if self.grid.is_top_row_occupied() {
            self.game_over = true;
            return;
        }
        self.spawn_piece();
    }

    /// Externally delivered lock-deadline expiry. Commits the piece when
    /// the grace period is still running; stale timers are ignored.
    pub fn lock_deadline_expired(&mut self) {
        if self.game_over {
            return;
        }
        if self.lock.deadline_expired() {
            self.lock_active_piece();
        }
    }

    /// Row where the active piece would come to rest if dropped straight
    /// down. Read-only projection for the renderer.
    pub fn ghost_row(&self) -> Option<i8> {
        let piece = self.active?;
        let shape = piece.shape();
        let mut y = piece.y;
        while !self.grid.intersects(&shape, piece.x, y + 1) {
            y += 1;
        }
        Some(y)
    }

    pub fn board(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn active_shape(&self) -> Option<Shape> {
        self.active.map(|piece| piece.shape())
    }

    pub fn held_kind(&self) -> Option<PieceKind> {
        self.held
    }

    /// Spawn-orientation matrix of the held piece; all-empty when nothing
    /// is held.
    pub fn held_shape(&self) -> Shape {
        self.held.map(catalog::preview_shape).unwrap_or(EMPTY_SHAPE)
    }

    pub fn hold_available(&self) -> bool {
        self.hold_available
    }

    /// The next `count` kinds in draw order, without consuming them.
    pub fn upcoming_kinds(&mut self, count: usize) -> Vec<PieceKind> {
        self.sequencer.peek(count)
    }

    /// Spawn-orientation matrices of the next `count` pieces.
    pub fn upcoming_shapes(&mut self, count: usize) -> Vec<Shape> {
        self.sequencer
            .peek(count)
            .into_iter()
            .map(catalog::preview_shape)
            .collect()
    }

    pub fn pieces_placed(&self) -> u32 {
        self.grid.pieces_placed()
    }

    pub fn lines_cleared(&self) -> u32 {
        self.grid.lines_cleared()
    }

    pub fn score(&self) -> u32 {
        self.score.points()
    }

    pub fn combo_streak(&self) -> u32 {
        self.score.combo_streak()
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// True while the lock-delay grace period runs; the driver keeps a
    /// one-shot deadline scheduled whenever this is set.
    pub fn lock_pending(&self) -> bool {
        self.lock.is_grace()
    }

    /// Bumped on every grace arm/re-arm; a change tells the driver to
    /// reschedule its deadline timer.
    pub fn lock_epoch(&self) -> u32 {
        self.lock.epoch()
    }

    /// Current gravity interval for the driver, derived from lines cleared.
    pub fn gravity_interval_ms(&self) -> u64 {
        gravity_interval_ms(self.grid.lines_cleared())
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: ActivePiece) {
        self.active = Some(piece);
    }

    #[cfg(test)]
    pub(crate) fn force_game_over(&mut self) {
        self.game_over = true;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_types::LOCK_RESET_LIMIT;

    fn square_at(x: i8, y: i8) -> ActivePiece {
        ActivePiece {
            kind: PieceKind::O,
            rotation: 0,
            x,
            y,
        }
    }

    #[test]
    fn spawn_point_centers_the_box() {
        let mut game = Game::new(12345);
        game.start();
        let piece = game.active().unwrap();
        assert_eq!(piece.x, 3);
        assert_eq!(piece.y, -1);
        assert_eq!(piece.rotation, 0);
    }

    #[test]
    fn spawn_raises_by_one_row_near_the_top() {
        let mut game = Game::new(12345);
        game.board_mut().set_cell(0, 1, 1);
        game.start();
        assert_eq!(game.active().unwrap().y, -2);
    }

    #[test]
    fn square_descends_to_row_seventeen() {
        let mut game = Game::new(1);
        game.set_active(square_at(4, 0));

        let mut steps = 0;
        while game.move_down() {
            steps += 1;
        }
        let piece = game.active().unwrap();
        assert_eq!(piece.y, 17, "2x2 footprint fills the bottom two rows");
        assert_eq!(steps, 17);
        // Every step was a player descent: one point per cell.
        assert_eq!(game.score(), 17);
    }

    #[test]
    fn horizontal_moves_stop_at_the_walls() {
        let mut game = Game::new(1);
        game.set_active(square_at(4, 5));

        let mut lefts = 0;
        while game.move_left() {
            lefts += 1;
        }
        // Occupied columns are box cols 1-2: x can reach -1.
        assert_eq!(game.active().unwrap().x, -1);
        assert_eq!(lefts, 5);

        let mut rights = 0;
        while game.move_right() {
            rights += 1;
        }
        assert_eq!(game.active().unwrap().x, 7);
        assert_eq!(rights, 8);
    }

    #[test]
    fn gravity_tick_descends_without_scoring() {
        let mut game = Game::new(1);
        game.set_active(square_at(4, 5));
        assert!(game.gravity_tick());
        assert_eq!(game.active().unwrap().y, 6);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn rotation_cycles_back_to_the_start_in_open_space() {
        let mut game = Game::new(1);
        let start = ActivePiece {
            kind: PieceKind::T,
            rotation: 0,
            x: 3,
            y: 5,
        };
        game.set_active(start);

        let original_shape = start.shape();
        for _ in 0..4 {
            assert!(game.rotate());
        }
        let piece = game.active().unwrap();
        assert_eq!(piece.rotation, 0);
        assert_eq!(piece.x, start.x, "no kick was needed");
        assert_eq!(piece.y, start.y);
        assert_eq!(piece.shape(), original_shape);
    }

    #[test]
    fn blocked_rotation_kicks_off_the_wall() {
        let mut game = Game::new(1);
        // Vertical I hugging the left wall: its occupied column is box
        // col 2, so x = -2 puts it at board column 0.
        game.set_active(ActivePiece {
            kind: PieceKind::I,
            rotation: 1,
            x: -2,
            y: 5,
        });

        assert!(game.rotate());
        let piece = game.active().unwrap();
        assert_eq!(piece.rotation, 0);
        // The horizontal bar needs columns 0..=3: a two-cell right kick.
        assert_eq!(piece.x, 0);
    }

    #[test]
    fn impossible_rotation_changes_nothing() {
        let mut game = Game::new(1);
        let start = ActivePiece {
            kind: PieceKind::I,
            rotation: 1,
            x: -2,
            y: 5,
        };
        game.set_active(start);
        // Wall off every kick candidate on the row the bar would occupy,
        // leaving the column the vertical piece itself stands in.
        for x in 1..10 {
            game.board_mut().set_cell(x, 6, 1);
        }

        assert!(!game.rotate());
        assert_eq!(game.active().unwrap(), start);
    }

    #[test]
    fn failed_descent_arms_lock_delay() {
        let mut game = Game::new(1);
        game.set_active(square_at(4, 17));
        assert!(!game.lock_pending());
        assert!(!game.move_down());
        assert!(game.lock_pending());
    }

    #[test]
    fn deadline_expiry_commits_the_piece() {
        let mut game = Game::new(1);
        game.set_active(square_at(4, 17));
        game.move_down();

        game.lock_deadline_expired();
        assert_eq!(game.pieces_placed(), 1);
        assert_eq!(game.board().cell(5, 19), PieceKind::O.color_code());
        // A fresh piece spawned and is airborne again.
        assert!(!game.lock_pending());
        assert!(game.active().is_some());
    }

    #[test]
    fn stale_deadline_outside_grace_is_ignored() {
        let mut game = Game::new(1);
        game.set_active(square_at(4, 5));
        game.lock_deadline_expired();
        assert_eq!(game.pieces_placed(), 0);
        assert_eq!(game.active().unwrap().y, 5);
    }

    #[test]
    fn successful_move_off_a_ledge_cancels_grace() {
        let mut game = Game::new(1);
        // One-cell ledge under the square's right column only.
        game.board_mut().set_cell(6, 10, 1);
        game.set_active(square_at(4, 7));

        assert!(!game.move_down(), "resting on the ledge");
        assert!(game.lock_pending());

        // Sliding left clears the ledge; the piece can fall again.
        assert!(game.move_left());
        assert!(!game.lock_pending());
    }

    #[test]
    fn eleventh_grace_reset_locks_immediately() {
        let mut game = Game::new(1);
        game.set_active(square_at(4, 17));
        assert!(!game.move_down());

        // Ten grounded wiggles are allowed, each re-arming the deadline.
        for i in 0..LOCK_RESET_LIMIT {
            let moved = if i % 2 == 0 {
                game.move_left()
            } else {
                game.move_right()
            };
            assert!(moved, "reset {}", i);
            assert!(game.lock_pending());
        }

        // The eleventh attempt commits instead of moving, even though the
        // move itself would have fit.
        assert!(!game.move_left());
        assert_eq!(game.pieces_placed(), 1);
        assert!(game.active().is_some(), "next piece spawned");
    }

    #[test]
    fn hard_drop_locks_and_scores_distance() {
        let mut game = Game::new(1);
        game.set_active(square_at(4, -1));
        assert!(game.hard_drop());
        // 18 rows from y = -1 to the resting y = 17, at 5 points each.
        assert_eq!(game.score(), 90);
        assert_eq!(game.pieces_placed(), 1);
        assert_eq!(game.board().cell(5, 19), PieceKind::O.color_code());
    }

    #[test]
    fn lock_clears_rows_and_scores_them() {
        let mut game = Game::new(1);
        // Bottom two rows full except the square's slot at columns 5-6.
        for x in 0..10 {
            if x == 5 || x == 6 {
                continue;
            }
            game.board_mut().set_cell(x, 18, 1);
            game.board_mut().set_cell(x, 19, 1);
        }
        game.set_active(square_at(4, 10));
        assert!(game.hard_drop());

        assert_eq!(game.lines_cleared(), 2);
        assert_eq!(game.combo_streak(), 1);
        // 7 cells dropped (y 10 -> 17) plus a double clear.
        assert_eq!(game.score(), 7 * 5 + 300);
        assert!(game.board().cells().iter().all(|&cell| cell == 0));
    }

    #[test]
    fn non_clearing_lock_breaks_the_combo() {
        let mut game = Game::new(1);
        for x in 0..10 {
            if x == 5 || x == 6 {
                continue;
            }
            game.board_mut().set_cell(x, 19, 1);
        }
        game.set_active(square_at(4, 10));
        game.hard_drop();
        assert_eq!(game.combo_streak(), 1);

        game.set_active(square_at(0, 10));
        game.hard_drop();
        assert_eq!(game.combo_streak(), 0);
    }

    #[test]
    fn hold_stashes_and_spawns_when_empty() {
        let mut game = Game::new(12345);
        game.start();
        let first = game.active().unwrap().kind;
        let next = game.upcoming_kinds(1)[0];

        assert!(game.hold());
        assert_eq!(game.held_kind(), Some(first));
        assert_eq!(game.active().unwrap().kind, next);
        assert!(!game.hold_available());
    }

    #[test]
    fn second_hold_before_a_lock_fails() {
        let mut game = Game::new(12345);
        game.start();
        let first = game.active().unwrap().kind;

        assert!(game.hold());
        assert!(!game.hold(), "hold is spent until the next lock");
        assert_eq!(game.held_kind(), Some(first), "slot unchanged");
    }

    #[test]
    fn hold_swap_resets_to_the_default_spawn_point() {
        let mut game = Game::new(12345);
        game.start();
        let first = game.active().unwrap().kind;
        game.hold();
        let second = game.active().unwrap().kind;

        // Locking re-enables hold; move the piece away from spawn first.
        game.hard_drop();
        assert!(game.hold_available());
        game.move_right();
        game.rotate();

        assert!(game.hold());
        let swapped = game.active().unwrap();
        assert_eq!(swapped.kind, first);
        assert_eq!(swapped.rotation, 0);
        assert_eq!(swapped.x, 3);
        assert_eq!(swapped.y, -1, "swap never uses the raised spawn row");
        let _ = second;
    }

    #[test]
    fn blocked_spawn_signals_game_over_and_freezes_input() {
        let mut game = Game::new(12345);
        // A wall across rows 0-2 leaves no room for any fresh piece to
        // take its first step down.
        for x in 0..10 {
            for y in 0..3 {
                game.board_mut().set_cell(x, y, 1);
            }
        }
        assert!(!game.spawn_piece());
        assert!(game.game_over());
        // The dead piece stays visible for a final render.
        assert!(game.active().is_some());

        // Defense in depth: every mutating command is now a no-op.
        let before = game.active().unwrap();
        assert!(!game.move_left());
        assert!(!game.move_right());
        assert!(!game.move_down());
        assert!(!game.rotate());
        assert!(!game.hold());
        assert!(!game.hard_drop());
        assert!(!game.gravity_tick());
        assert_eq!(game.active().unwrap(), before);
        assert_eq!(game.pieces_placed(), 0);
    }

    #[test]
    fn topping_out_after_a_lock_ends_the_game() {
        let mut game = Game::new(12345);
        // A two-wide tower right up to row 1 leaves the square resting
        // with its lower half in row 0.
        for y in 1..20 {
            game.board_mut().set_cell(5, y, 1);
            game.board_mut().set_cell(6, y, 1);
        }
        game.set_active(square_at(4, -2));
        game.hard_drop();
        // The merge reached row 0, which is the canonical game-over check.
        assert!(game.game_over());
        assert_eq!(game.board().cell(5, 0), PieceKind::O.color_code());
    }

    #[test]
    fn new_game_clears_everything() {
        let mut game = Game::new(12345);
        game.start();
        game.hold();
        game.hard_drop();
        game.force_game_over();

        assert!(game.apply(GameCommand::NewGame));
        assert!(!game.game_over());
        assert_eq!(game.score(), 0);
        assert_eq!(game.pieces_placed(), 0);
        assert_eq!(game.lines_cleared(), 0);
        assert_eq!(game.held_kind(), None);
        assert!(game.hold_available());
        assert!(game.active().is_some());
        assert!(game.board().cells().iter().all(|&cell| cell == 0));
    }

    #[test]
    fn preview_matches_the_next_spawn() {
        let mut game = Game::new(777);
        game.start();
        let predicted = game.upcoming_kinds(1)[0];
        game.hard_drop();
        assert_eq!(game.active().unwrap().kind, predicted);
    }

    #[test]
    fn ghost_row_projects_the_resting_row() {
        let mut game = Game::new(1);
        game.set_active(square_at(4, 0));
        assert_eq!(game.ghost_row(), Some(17));

        // Drop a floor obstacle under it and the projection shortens.
        game.board_mut().set_cell(5, 12, 1);
        assert_eq!(game.ghost_row(), Some(9));

        // The ghost is read-only: the piece itself has not moved.
        assert_eq!(game.active().unwrap().y, 0);
    }

    #[test]
    fn held_shape_is_empty_until_used() {
        let mut game = Game::new(12345);
        game.start();
        assert_eq!(game.held_shape(), EMPTY_SHAPE);
        game.hold();
        assert_ne!(game.held_shape(), EMPTY_SHAPE);
    }

    #[test]
    fn gravity_interval_follows_lines_cleared() {
        let game = Game::new(1);
        assert_eq!(game.gravity_interval_ms(), 1000);
    }
}
