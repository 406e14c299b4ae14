//! SharedBoard - one board, many callers
//!
//! The gravity driver and the key handler run independently and both mutate
//! the same board. Every operation here holds a single mutex for its whole
//! duration, so each logical action (including a lock, clear, and respawn) is
//! atomic with respect to the other caller. Renderers read through the same
//! lock via [`SharedBoard::snapshot`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::board::{Board, MoveOutcome};
use crate::snapshot::GameSnapshot;
use crate::types::{Command, LockEvent};

/// What one serialized step did, captured under the lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub changed: bool,
    /// Set when this step locked a piece
    pub lock: Option<LockEvent>,
    /// This step moved the board from playing to game over
    pub ended: bool,
    /// This step started a new episode
    pub restarted: bool,
    pub episode_id: u32,
    pub score: u32,
    pub level: u32,
}

/// Cloneable handle to a mutex-guarded [`Board`]
#[derive(Debug, Clone)]
pub struct SharedBoard {
    inner: Arc<Mutex<Board>>,
}

impl SharedBoard {
    pub fn new(seed: u32) -> Self {
        Self::from_board(Board::new(seed))
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            inner: Arc::new(Mutex::new(board)),
        }
    }

    // Board mutations never panic mid-write; a poisoned lock still guards a
    // consistent board.
    fn lock(&self) -> MutexGuard<'_, Board> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` on the board under the lock and report what changed
    fn step(&self, f: impl FnOnce(&mut Board) -> bool) -> StepReport {
        let mut board = self.lock();
        let was_over = board.is_game_over();
        let episode = board.episode_id();

        // Stale events from direct `Board` use must not be attributed here.
        board.take_last_event();
        let changed = f(&mut board);

        StepReport {
            changed,
            lock: board.take_last_event(),
            ended: !was_over && board.is_game_over(),
            restarted: board.episode_id() != episode,
            episode_id: board.episode_id(),
            score: board.score(),
            level: board.level(),
        }
    }

    pub fn move_by(&self, d_row: i8, d_col: i8) -> StepReport {
        self.step(|b| b.move_by(d_row, d_col).changed())
    }

    /// One gravity tick: `move_by(1, 0)`
    pub fn gravity_step(&self) -> StepReport {
        self.step(|b| b.move_by(1, 0) != MoveOutcome::Ignored)
    }

    pub fn rotate(&self) -> StepReport {
        self.step(Board::rotate)
    }

    pub fn reset(&self) -> StepReport {
        self.step(|b| {
            b.reset();
            true
        })
    }

    pub fn apply(&self, command: Command) -> StepReport {
        self.step(|b| b.apply(command))
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.lock().snapshot_into(out);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.lock().snapshot()
    }

    /// Read the board under the lock
    pub fn with_board<R>(&self, f: impl FnOnce(&Board) -> R) -> R {
        f(&self.lock())
    }

    pub fn level(&self) -> u32 {
        self.lock().level()
    }

    pub fn is_game_over(&self) -> bool {
        self.lock().is_game_over()
    }
}

impl Default for SharedBoard {
    fn default() -> Self {
        Self::new(1)
    }
}
