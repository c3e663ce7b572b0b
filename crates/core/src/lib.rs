//! Deterministic falling-block engine - pure, synchronous, and testable.
//!
//! This crate is the whole game brain with **zero dependencies** on UI,
//! timers, or I/O:
//!
//! - **Deterministic**: the same seed replays the same piece stream
//! - **Synchronous**: every operation runs to completion; nothing suspends
//! - **Externally clocked**: gravity ticks and the lock deadline are
//!   events the driver delivers, never timers the engine runs
//!
//! # Module structure
//!
//! - [`catalog`]: the seven tetromino kinds as static 4x4 rotation tables
//! - [`bag`]: 7-bag piece sequencing with non-consuming lookahead
//! - [`grid`]: board matrix, collision tests, merges, row clears, counters
//! - [`scoring`]: clear/combo/back-to-back/drop points
//! - [`lock`]: the airborne/grace/locked state machine with a bounded
//!   reset budget
//! - [`game`]: the session tying it all together - movement, rotation
//!   with horizontal wall kicks, spawning, hold, ghost projection
//! - [`snapshot`]: copied-out render state for the UI layer
//!
//! # Example
//!
//! ```
//! use blockfall_core::Game;
//! use blockfall_types::GameCommand;
//!
//! let mut game = Game::new(12345);
//! game.start();
//!
//! game.apply(GameCommand::MoveRight);
//! game.apply(GameCommand::Rotate);
//! game.apply(GameCommand::HardDrop);
//!
//! assert!(game.score() > 0); // hard drops award points per cell
//! assert_eq!(game.pieces_placed(), 1);
//! ```

pub mod bag;
pub mod catalog;
pub mod game;
pub mod grid;
pub mod lock;
pub mod scoring;
pub mod snapshot;

pub use bag::{BagRng, PieceSequencer};
pub use game::{ActivePiece, Game};
pub use grid::{ClearResult, Grid};
pub use lock::{GraceOutcome, LockDelay, LockPhase};
pub use scoring::{gravity_interval_ms, ScoreKeeper};
pub use snapshot::{ActiveView, GameSnapshot};
