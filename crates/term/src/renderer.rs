//! ConsoleRenderer: writes rendered states to an output stream.
//!
//! Text is built in a reusable buffer and written with a single call per
//! frame.

use std::io::{self, Write};

use anyhow::Result;

use crate::core::{GameState, Grid};
use crate::game_view::{encode_grid_into, GameView};

/// Write `grid` as `[0, 1, ...]` rows followed by a blank line
pub fn render_grid(grid: &Grid, out: &mut impl Write) -> io::Result<()> {
    let mut buf = String::with_capacity(grid.height() * 32);
    encode_grid_into(grid, &mut buf);
    buf.push('\n');
    out.write_all(buf.as_bytes())
}

pub struct ConsoleRenderer<W: Write = io::Stdout> {
    out: W,
    view: GameView,
    buf: String,
}

impl ConsoleRenderer {
    /// Renderer printing to standard output
    pub fn stdout(view: GameView) -> Self {
        Self::new(io::stdout(), view)
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, view: GameView) -> Self {
        Self {
            out,
            view,
            buf: String::with_capacity(1024),
        }
    }

    pub fn draw(&mut self, state: &GameState) -> Result<()> {
        self.buf.clear();
        self.view.render_into(state, &mut self.buf);
        self.out.write_all(self.buf.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    /// Print a free-form line, e.g. the game-over banner
    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedPieces;
    use crate::types::PieceKind;

    #[test]
    fn draw_writes_whole_frame() {
        let mut source = ScriptedPieces::repeat(PieceKind::L);
        let state = GameState::new(&mut source);
        let mut renderer = ConsoleRenderer::new(Vec::new(), GameView::default());

        renderer.draw(&state).unwrap();
        renderer.line("Game over!").unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text.lines().count(), 22);
        assert!(text.ends_with("\nGame over!\n"));
    }

    #[test]
    fn render_grid_ends_with_blank_line() {
        let mut grid = Grid::new();
        grid.set(19, 4, true);
        let mut out = Vec::new();
        render_grid(&grid, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 21);
        assert!(text.ends_with("[0, 0, 0, 0, 1, 0, 0, 0, 0, 0]\n\n"));
    }
}
