//! Read-only render snapshot of a game session.
//!
//! Everything in here is copied out of the engine, so callers can hold,
//! mutate, or discard a snapshot without touching live state.

use blockfall_types::{Cell, PieceKind, Shape};

use crate::game::{ActivePiece, Game};

/// Rendering data for the active piece: its current matrix and the board
/// position of the matrix's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveView {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveView {
    fn from(piece: ActivePiece) -> Self {
        Self {
            kind: piece.kind,
            shape: piece.shape(),
            x: piece.x,
            y: piece.y,
        }
    }
}

/// One frame's worth of game state for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major copy of the board cells.
    pub cells: Vec<Cell>,
    pub active: Option<ActiveView>,
    pub ghost_row: Option<i8>,
    /// All-empty matrix when nothing is held.
    pub held: Shape,
    /// Spawn-orientation matrices of the upcoming pieces, draw order.
    pub next: Vec<Shape>,
    pub score: u32,
    pub combo_streak: u32,
    pub lines_cleared: u32,
    pub pieces_placed: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Capture the current state. Takes `&mut Game` because previewing may
    /// extend the sequencer's buffer; draw order is never altered.
    pub fn capture(game: &mut Game, preview: usize) -> Self {
        Self {
            width: game.board().width(),
            height: game.board().height(),
            cells: game.board().cells().to_vec(),
            active: game.active().map(ActiveView::from),
            ghost_row: game.ghost_row(),
            held: game.held_shape(),
            next: game.upcoming_shapes(preview),
            score: game.score(),
            combo_streak: game.combo_streak(),
            lines_cleared: game.lines_cleared(),
            pieces_placed: game.pieces_placed(),
            game_over: game.game_over(),
        }
    }

    /// Board cell at (x, y); 0 off the board.
    pub fn cell(&self, x: i8, y: i8) -> Cell {
        if x < 0 || x as u8 >= self.width || y < 0 || y as u8 >= self.height {
            return 0;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }
}
