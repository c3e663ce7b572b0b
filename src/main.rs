//! Terminal runner (default binary).
//!
//! The engine owns no clocks, so this loop is the external timing
//! collaborator: it schedules gravity ticks from the engine's current
//! interval, keeps a one-shot lock deadline in sync with the engine's
//! grace state, and delivers both as events. Pausing simply stops
//! delivering; the engine has no pause concept of its own.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{Game, GameSnapshot};
use blockfall::input::{command_for_key, should_quit, toggles_pause};
use blockfall::term::{GameView, TerminalRenderer};
use blockfall::types::{GameCommand, LOCK_DELAY_MS, PREVIEW_COUNT};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore the terminal state.
    let _ = term.exit();
    result
}

fn wall_clock_seed() -> u32 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.subsec_nanos() ^ elapsed.as_secs() as u32,
        Err(_) => 1,
    }
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new(wall_clock_seed());
    game.start();

    let view = GameView;
    let mut paused = false;

    let mut gravity_due = Instant::now() + Duration::from_millis(game.gravity_interval_ms());
    let mut lock_deadline: Option<Instant> = None;
    let mut lock_epoch = game.lock_epoch();

    loop {
        let snapshot = GameSnapshot::capture(&mut game, PREVIEW_COUNT);
        term.draw(&view.compose(&snapshot, paused))?;

        // Sleep in input poll until the next scheduled engine event.
        let timeout = if paused || game.game_over() {
            Duration::from_millis(250)
        } else {
            let mut next = gravity_due;
            if let Some(deadline) = lock_deadline {
                next = next.min(deadline);
            }
            next.saturating_duration_since(Instant::now())
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if toggles_pause(key) {
                        paused = !paused;
                        if !paused {
                            // Rebase clocks so pause time never counts.
                            gravity_due =
                                Instant::now() + Duration::from_millis(game.gravity_interval_ms());
                            if lock_deadline.is_some() {
                                lock_deadline =
                                    Some(Instant::now() + Duration::from_millis(LOCK_DELAY_MS));
                            }
                        }
                    } else if let Some(command) = command_for_key(key) {
                        // A paused session delivers nothing except restart.
                        if !paused || command == GameCommand::NewGame {
                            game.apply(command);
                            if command == GameCommand::NewGame {
                                paused = false;
                                gravity_due = Instant::now()
                                    + Duration::from_millis(game.gravity_interval_ms());
                                lock_deadline = None;
                                lock_epoch = game.lock_epoch();
                            }
                        }
                    }
                }
            }
        }

        if !paused && !game.game_over() {
            let now = Instant::now();
            if let Some(deadline) = lock_deadline {
                if now >= deadline {
                    game.lock_deadline_expired();
                    lock_deadline = None;
                }
            }
            if now >= gravity_due {
                game.gravity_tick();
                gravity_due = now + Duration::from_millis(game.gravity_interval_ms());
            }
        }

        // Keep the one-shot deadline in lockstep with the engine: arm on
        // entering grace, re-arm when the epoch moves, drop otherwise.
        if game.lock_pending() {
            let epoch = game.lock_epoch();
            if lock_deadline.is_none() || epoch != lock_epoch {
                lock_deadline = Some(Instant::now() + Duration::from_millis(LOCK_DELAY_MS));
                lock_epoch = epoch;
            }
        } else {
            lock_deadline = None;
        }
    }
}
