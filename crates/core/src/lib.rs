//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game: the grid, the
//! piece catalog, the upcoming-piece queue, legal placement enumeration, line
//! clearing and scoring. It has no dependency on rendering, timing or the
//! search, which makes it:
//!
//! - **Deterministic**: randomness only enters through a [`PieceSource`]
//! - **Immutable**: every transition returns a new [`GameState`]
//! - **Testable**: scenarios are built directly from a [`Grid`] and a [`BlockQueue`]
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 occupancy grid with fit checks and line clearing
//! - [`shapes`]: base shapes and their precomputed clockwise rotations
//! - [`queue`]: the four-piece lookahead queue and piece sources
//! - [`scoring`]: points per number of rows cleared
//! - [`game_state`]: legal actions, transitions and game-over detection
//!
//! # Game Rules
//!
//! - **Straight drops only**: a piece falls vertically from above the grid;
//!   it never slides sideways into a gap.
//! - **Line clear**: full rows are removed, rows above shift down.
//! - **Game over**: the front piece has no legal placement.
//!
//! # Example
//!
//! ```
//! use tetris_lookahead_core::{GameState, UniformPieces};
//!
//! let mut source = UniformPieces::seeded(12345);
//! let state = GameState::new(&mut source);
//!
//! let action = state.legal_actions()[0];
//! let next = state.step(action, &mut source);
//!
//! assert_eq!(next.pieces(), 1);
//! assert!(!state.is_done());
//! ```

pub mod game_state;
pub mod grid;
pub mod queue;
pub mod scoring;
pub mod shapes;

pub use tetris_lookahead_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, Placement};
pub use grid::Grid;
pub use queue::{BlockQueue, PieceSource, ScriptedPieces, UniformPieces};
pub use scoring::line_clear_score;
pub use shapes::{library, rotate, shape, Shape, ShapeLibrary};
