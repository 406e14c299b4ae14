//! Terminal renderer for the board.
//!
//! Renders a [`core::GameSnapshot`] into a plain framebuffer, then flushes
//! only the cells that changed. No widget toolkit; cells are 2 columns wide
//! so the well keeps a roughly square aspect ratio.

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tetris_board_core as core;
pub use tetris_board_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use palette::Palette;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
