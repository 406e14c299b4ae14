//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the board engine: the settled field, the falling piece,
//! rotation, line clears, scoring, and the playing/game-over state machine.
//! It has **zero dependencies** on UI, timers, or I/O:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is reachable through the public API
//! - **Portable**: Terminal, GUI, or headless front ends drive it the same way
//!
//! # Module Structure
//!
//! - [`field`]: 20x10 settled field with free-cell checks and line clearing
//! - [`board`]: The engine (`move_by`, `rotate`, `apply_piece`, `reset`, queries)
//! - [`shapes`]: Tetromino catalog, clockwise rotation, and boundary wall kick
//! - [`rng`]: Seeded uniform picks of shape and color
//! - [`scoring`]: Line-clear points, level, and gravity interval
//! - [`shared`]: Mutex-guarded handle shared by gravity and input drivers
//! - [`snapshot`]: Render-ready copies of the board
//!
//! # Game Rules
//!
//! - Pieces spawn at row -2, column 5 with a random shape and color
//! - A blocked downward move locks the piece, unless part of it is still
//!   above the field: then the game is over
//! - Full rows vanish and the rows above fall; scoring is 40/100/300/1200
//!   times (level + 1); every 10 lines is a level
//! - Rotating while the game is over starts a new game
//!
//! # Example
//!
//! ```
//! use tetris_board_core::{Board, MoveOutcome};
//!
//! let mut board = Board::new(12345);
//!
//! board.move_by(0, -1);
//! board.rotate();
//!
//! // Drop until the piece locks.
//! while board.move_by(1, 0) == MoveOutcome::Moved {}
//!
//! assert_eq!(board.field().filled_count(), 4);
//! assert_eq!(board.score(), 0);
//! ```

pub mod board;
pub mod field;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod shared;
pub mod snapshot;

pub use tetris_board_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, MoveOutcome, Piece};
pub use field::Field;
pub use rng::SimpleRng;
pub use scoring::{gravity_interval_ms, level_for_lines, line_clear_score};
pub use shapes::{absolute_cells, rotate_cw, same_cells, shape_of, try_rotate, wall_kick, Shape};
pub use shared::{SharedBoard, StepReport};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
