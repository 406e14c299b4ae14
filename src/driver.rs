//! Async drivers around a [`SharedBoard`].
//!
//! Gravity and input are independent producers: the gravity task drops the
//! piece on a level-dependent timer, the input task forwards key presses. Both
//! end when the shutdown flag flips.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use tokio::sync::{mpsc, watch};

use crate::core::{gravity_interval_ms, SharedBoard, StepReport};
use crate::input::{handle_key_event, should_quit};
use crate::session_log::SessionLog;
use crate::types::Command;

const INPUT_POLL_MS: u64 = 50;

/// Gravity timing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    pub base_ms: u64,
    pub decay: f64,
}

impl Gravity {
    pub fn interval(&self, level: u32) -> Duration {
        Duration::from_millis(gravity_interval_ms(level, self.base_ms, self.decay))
    }
}

/// What the input task hands to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Command(Command),
    Resize,
    Quit,
}

pub fn translate(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if should_quit(key) => Some(InputEvent::Quit),
        Event::Key(key) => handle_key_event(key).map(InputEvent::Command),
        Event::Resize(_, _) => Some(InputEvent::Resize),
        _ => None,
    }
}

/// Apply one command and log what it did.
pub fn apply_command(board: &SharedBoard, log: &SessionLog, command: Command) -> StepReport {
    let report = board.apply(command);
    log.record(&report);
    report
}

/// Drop the active piece one row per interval. The interval is re-read from
/// the level after every drop.
pub async fn run_gravity(
    board: SharedBoard,
    gravity: Gravity,
    log: SessionLog,
    mut shutdown: watch::Receiver<bool>,
) {
    loop {
        let interval = gravity.interval(board.level());
        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
                continue;
            }
        }

        let report = board.gravity_step();
        log.record(&report);
    }
}

/// Blocking input loop; run it with `spawn_blocking`.
pub fn run_input(
    tx: mpsc::UnboundedSender<InputEvent>,
    shutdown: watch::Receiver<bool>,
) -> Result<()> {
    let poll = Duration::from_millis(INPUT_POLL_MS);

    while !*shutdown.borrow() {
        if !event::poll(poll)? {
            continue;
        }
        let Some(input) = translate(event::read()?) else {
            continue;
        };
        let quit = input == InputEvent::Quit;
        if tx.send(input).is_err() || quit {
            break;
        }
    }
    Ok(())
}
