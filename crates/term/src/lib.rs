//! Console output for games in progress.
//!
//! The grid is printed as rows of `0`/`1` cells followed by a blank line. This
//! is presentation only: nothing here feeds back into the rules or the search.

pub mod game_view;
pub mod renderer;

pub use tetris_lookahead_core as core;
pub use tetris_lookahead_types as types;

pub use game_view::{encode_grid_into, GameView};
pub use renderer::{render_grid, ConsoleRenderer};
