//! Terminal input module (board-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]. Arrow keys,
//! vim keys, and WASD all work; Up rotates (and restarts after game over).

pub mod map;

pub use tetris_board_types as types;

pub use map::{handle_key_event, should_quit, triggers_command};
