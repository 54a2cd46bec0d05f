//! Lookahead engine - chooses moves for the core game
//!
//! Given a [`GameState`](crate::core::GameState), the [`Planner`] explores the
//! moves of every known upcoming piece breadth-first, scores each reachable
//! state with an [`Evaluator`] and returns the first move on the path to the
//! best-scored state. The search is bounded by the queue length and a
//! wall-clock budget read from a [`Clock`].
//!
//! # Module Structure
//!
//! - [`planner`]: the ply loop, pruning, four-row shortcut and move selection
//! - [`tree`]: index-addressed arena of explored states
//! - [`evaluate`]: stack height / gap heuristic
//! - [`clock`]: monotonic and hand-driven time sources
//! - [`config`]: search budget and switches
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use tetris_lookahead_core::{GameState, UniformPieces};
//! use tetris_lookahead_engine::{Planner, SearchConfig};
//!
//! let mut game = UniformPieces::seeded(1);
//! let mut lookahead = UniformPieces::seeded(2);
//! let planner = Planner::new(SearchConfig::default().with_budget(Duration::from_millis(20)));
//!
//! let state = GameState::new(&mut game);
//! let action = planner.choose_action(&state, &mut lookahead).unwrap();
//! let next = state.step(action, &mut game);
//! assert_eq!(next.pieces(), 1);
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod planner;
pub mod tree;

pub use tetris_lookahead_core as core;
pub use tetris_lookahead_types as types;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::{SearchConfig, DEFAULT_BUDGET};
pub use error::SearchError;
pub use evaluate::{Evaluation, Evaluator, StackEvaluator};
pub use planner::{Planner, SearchReport, StopReason};
pub use tree::{NodeId, SearchNode, SearchTree};
