//! GameView: composes a `GameSnapshot` into a frame of styled glyphs.
//!
//! This module is pure (no I/O), so layout is unit-testable. The renderer
//! turns the composed frame into terminal output.

use blockfall_core::GameSnapshot;
use blockfall_types::{Cell, SHAPE_SIZE};

/// One character plus the color code of the piece that painted it.
/// Code 0 renders in the default chrome color.
pub type Glyph = (char, Cell);

/// A composed frame: rows of glyphs, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub rows: Vec<Vec<Glyph>>,
}

impl Frame {
    /// The frame as plain text, styling dropped. Test and debug helper.
    pub fn to_plain_lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|&(ch, _)| ch).collect())
            .collect()
    }
}

/// Board cells are drawn two terminal columns wide to compensate for the
/// glyph aspect ratio.
const CELL_STR_FILLED: [char; 2] = ['[', ']'];
const CELL_STR_GHOST: [char; 2] = ['(', ')'];
const CELL_STR_EMPTY: [char; 2] = [' ', '.'];

/// Gap between the board frame and the side panel.
const PANEL_GAP: usize = 3;

#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Compose one frame from a snapshot.
    pub fn compose(&self, snapshot: &GameSnapshot, paused: bool) -> Frame {
        let width = snapshot.width as usize;
        let height = snapshot.height as usize;
        let board_cols = width * 2;

        let mut rows: Vec<Vec<Glyph>> = Vec::with_capacity(height + 2);
        rows.push(border_row(board_cols));
        for y in 0..height {
            let mut row: Vec<Glyph> = Vec::with_capacity(board_cols + 2);
            row.push(('|', 0));
            for x in 0..width {
                let glyph = self.board_cell(snapshot, x as i8, y as i8);
                row.extend(glyph);
            }
            row.push(('|', 0));
            rows.push(row);
        }
        rows.push(border_row(board_cols));

        self.paint_panel(snapshot, paused, &mut rows);
        Frame { rows }
    }

    /// Pick the glyph pair for one board position: the active piece wins,
    /// then its ghost projection, then whatever is locked on the board.
    fn board_cell(&self, snapshot: &GameSnapshot, x: i8, y: i8) -> [Glyph; 2] {
        if let Some(active) = &snapshot.active {
            if let Some(code) = shape_cell_at(&active.shape, active.x, active.y, x, y) {
                return [(CELL_STR_FILLED[0], code), (CELL_STR_FILLED[1], code)];
            }
            if let Some(ghost_y) = snapshot.ghost_row {
                if ghost_y != active.y {
                    if let Some(code) = shape_cell_at(&active.shape, active.x, ghost_y, x, y) {
                        return [(CELL_STR_GHOST[0], code), (CELL_STR_GHOST[1], code)];
                    }
                }
            }
        }

        let code = snapshot.cell(x, y);
        if code != 0 {
            [(CELL_STR_FILLED[0], code), (CELL_STR_FILLED[1], code)]
        } else {
            [(CELL_STR_EMPTY[0], 0), (CELL_STR_EMPTY[1], 0)]
        }
    }

    fn paint_panel(&self, snapshot: &GameSnapshot, paused: bool, rows: &mut Vec<Vec<Glyph>>) {
        let panel_x = snapshot.width as usize * 2 + 2 + PANEL_GAP;
        let mut panel: Vec<Vec<Glyph>> = Vec::new();

        panel.push(text_glyphs(&format!("SCORE  {}", snapshot.score)));
        panel.push(text_glyphs(&format!("LINES  {}", snapshot.lines_cleared)));
        panel.push(text_glyphs(&format!("PIECES {}", snapshot.pieces_placed)));
        if snapshot.combo_streak > 1 {
            panel.push(text_glyphs(&format!("COMBO  x{}", snapshot.combo_streak)));
        }
        panel.push(Vec::new());

        panel.push(text_glyphs("HOLD"));
        panel.extend(shape_glyph_rows(&snapshot.held));
        panel.push(Vec::new());

        panel.push(text_glyphs("NEXT"));
        for shape in &snapshot.next {
            panel.extend(shape_glyph_rows(shape));
            panel.push(Vec::new());
        }

        if snapshot.game_over {
            panel.push(text_glyphs("GAME OVER"));
            panel.push(text_glyphs("n: new game  q: quit"));
        } else if paused {
            panel.push(text_glyphs("PAUSED"));
        }

        for (i, line) in panel.into_iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            while rows.len() <= i {
                rows.push(Vec::new());
            }
            let row = &mut rows[i];
            while row.len() < panel_x {
                row.push((' ', 0));
            }
            row.extend(line);
        }
    }
}

fn border_row(board_cols: usize) -> Vec<Glyph> {
    let mut row = Vec::with_capacity(board_cols + 2);
    row.push(('+', 0));
    row.extend(std::iter::repeat(('-', 0)).take(board_cols));
    row.push(('+', 0));
    row
}

fn text_glyphs(text: &str) -> Vec<Glyph> {
    text.chars().map(|ch| (ch, 0)).collect()
}

/// Spawn-orientation shapes only occupy matrix rows 1..=2, so previews
/// render those two rows.
fn shape_glyph_rows(shape: &blockfall_types::Shape) -> Vec<Vec<Glyph>> {
    (1..3)
        .map(|r| {
            let mut row = Vec::with_capacity(SHAPE_SIZE * 2);
            for c in 0..SHAPE_SIZE {
                let code = shape[r][c];
                if code != 0 {
                    row.push((CELL_STR_FILLED[0], code));
                    row.push((CELL_STR_FILLED[1], code));
                } else {
                    row.push((' ', 0));
                    row.push((' ', 0));
                }
            }
            row
        })
        .collect()
}

/// Color code of the shape cell covering board position (x, y) when the
/// shape's box sits at (shape_x, shape_y); `None` when uncovered.
fn shape_cell_at(
    shape: &blockfall_types::Shape,
    shape_x: i8,
    shape_y: i8,
    x: i8,
    y: i8,
) -> Option<Cell> {
    let c = x - shape_x;
    let r = y - shape_y;
    if !(0..SHAPE_SIZE as i8).contains(&c) || !(0..SHAPE_SIZE as i8).contains(&r) {
        return None;
    }
    let code = shape[r as usize][c as usize];
    if code != 0 {
        Some(code)
    } else {
        None
    }
}
