//! Terminal falling-block game (workspace facade crate).
//!
//! The engine, input mapping, and renderer live in dedicated crates under
//! `crates/`; this package re-exports them as
//! `tetris_board::{core,input,term,types}` and adds the pieces the binary
//! needs around them: environment config, the session log, and the async
//! drivers.

pub use tetris_board_core as core;
pub use tetris_board_input as input;
pub use tetris_board_term as term;
pub use tetris_board_types as types;

pub mod config;
pub mod driver;
pub mod session_log;
