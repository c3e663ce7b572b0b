//! Terminal front end for the blockfall engine.
//!
//! `GameView` composes engine snapshots into styled frames (pure, tested);
//! `TerminalRenderer` owns the terminal session and flushes frames to it.

pub mod game_view;
pub mod renderer;

pub use game_view::{Frame, GameView, Glyph};
pub use renderer::{cell_color, TerminalRenderer};
