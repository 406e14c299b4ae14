//! Terminal runner (default binary).
//!
//! Wires a [`SharedBoard`] to three producers/consumers on a tokio runtime:
//! the gravity task, a blocking crossterm input task, and the render loop on
//! the main task. Configuration comes from the environment (see
//! [`tetris_board::config`]).

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::{mpsc, watch};

use tetris_board::config::Config;
use tetris_board::core::{GameSnapshot, SharedBoard};
use tetris_board::driver::{apply_command, run_gravity, run_input, Gravity, InputEvent};
use tetris_board::session_log::{SessionLog, SessionRecord};
use tetris_board::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetris_board::types::TICK_MS;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env().context("reading configuration")?;

    let (log, log_task) = SessionLog::spawn(config.log_path.clone());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, log).await;

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(task) = log_task {
        let _ = task.await;
    }
    result
}

async fn run(term: &mut TerminalRenderer, config: &Config, log: SessionLog) -> Result<()> {
    let board = SharedBoard::new(config.seed);
    log.send(SessionRecord::Start {
        episode_id: board.with_board(|b| b.episode_id()),
        seed: config.seed,
    });

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<InputEvent>();

    let gravity = tokio::spawn(run_gravity(
        board.clone(),
        Gravity {
            base_ms: config.base_interval_ms,
            decay: config.gravity_decay,
        },
        log.clone(),
        shutdown_rx.clone(),
    ));
    let input = tokio::task::spawn_blocking(move || run_input(input_tx, shutdown_rx));

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut frame = tokio::time::interval(Duration::from_millis(TICK_MS as u64));
    frame.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result: Result<()> = loop {
        tokio::select! {
            _ = frame.tick() => {
                let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
                board.snapshot_into(&mut snap);
                view.render_into(&snap, Viewport::new(w, h), &mut fb);
                if let Err(e) = term.draw(&fb) {
                    break Err(e);
                }
            }
            input = input_rx.recv() => match input {
                Some(InputEvent::Command(command)) => {
                    apply_command(&board, &log, command);
                }
                Some(InputEvent::Resize) => term.invalidate(),
                Some(InputEvent::Quit) | None => break Ok(()),
            }
        }
    };

    let _ = shutdown_tx.send(true);
    let _ = gravity.await;
    let input_result = input.await.context("input task panicked")?;

    // Dropping the last sender lets the writer task drain and exit.
    drop(log);

    result.and(input_result)
}
