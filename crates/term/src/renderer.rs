//! TerminalRenderer: flushes composed frames to a real terminal.
//!
//! Full redraw per frame. The board is small enough that diffing buys
//! nothing at the frame rates a falling-block game needs.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use blockfall_types::Cell;

use crate::game_view::Frame;

/// Foreground color for a piece color code; chrome for 0.
pub fn cell_color(code: Cell) -> Color {
    match code {
        1 => Color::Cyan,
        2 => Color::Yellow,
        3 => Color::Magenta,
        4 => Color::Green,
        5 => Color::Red,
        6 => Color::Blue,
        7 => Color::DarkYellow,
        _ => Color::Grey,
    }
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        let mut current: Option<Cell> = None;
        for (y, row) in frame.rows.iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(0, y as u16))?;
            for &(ch, code) in row {
                if current != Some(code) {
                    self.stdout.queue(SetForegroundColor(cell_color(code)))?;
                    current = Some(code);
                }
                self.stdout.queue(Print(ch))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
