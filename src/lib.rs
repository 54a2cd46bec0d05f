//! Tetris lookahead (workspace facade crate).
//!
//! Re-exports the member crates as `tetris_lookahead::{core,engine,term,types}`
//! so the binary, the integration tests and the benches share one import path.

pub use tetris_lookahead_core as core;
pub use tetris_lookahead_engine as engine;
pub use tetris_lookahead_term as term;
pub use tetris_lookahead_types as types;
