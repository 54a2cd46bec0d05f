//! GameView: maps a grid or game state into console text.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write;

use crate::core::{GameState, Grid};

/// How much of a state to print besides the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameView {
    /// Print a `score: .. lines: .. next: ..` line under the grid.
    pub show_status: bool,
}

impl GameView {
    pub fn new(show_status: bool) -> Self {
        Self { show_status }
    }

    /// Append the text for `state` to `out`.
    pub fn render_into(&self, state: &GameState, out: &mut String) {
        encode_grid_into(state.grid(), out);
        if self.show_status {
            let next: Vec<&str> = state.queue().iter().map(|kind| kind.as_str()).collect();
            // Writing into a String cannot fail.
            let _ = writeln!(
                out,
                "score: {} lines: {} pieces: {} next: {}",
                state.score(),
                state.lines(),
                state.pieces(),
                next.join(" ")
            );
        }
        out.push('\n');
    }

    pub fn render(&self, state: &GameState) -> String {
        let mut out = String::new();
        self.render_into(state, &mut out);
        out
    }
}

/// One line per row, top first, cells as `0`/`1` in list form: `[0, 1, ...]`.
pub fn encode_grid_into(grid: &Grid, out: &mut String) {
    for row in grid.rows() {
        out.push('[');
        for (column, &cell) in row.iter().enumerate() {
            if column > 0 {
                out.push_str(", ");
            }
            out.push(if cell { '1' } else { '0' });
        }
        out.push_str("]\n");
    }
}
