//! Move selection - time-boxed breadth-first lookahead
//!
//! The planner grows a [`SearchTree`] one ply at a time. Every ply applies
//! each candidate move of every frontier node, scores the resulting states
//! with an [`Evaluator`] and remembers the single best node seen anywhere in
//! the tree (the first one found wins ties). When the deadline passes or the
//! known queue is exhausted, the move leading from the root toward that node
//! is returned.
//!
//! The deadline is checked after every frontier node and before every ply
//! except the first, so even a zero budget yields a one-ply decision.

use std::time::Duration;

use tracing::{debug, trace};

use crate::clock::{Clock, MonotonicClock};
use crate::config::SearchConfig;
use crate::core::{GameState, PieceSource};
use crate::error::SearchError;
use crate::evaluate::{Evaluator, StackEvaluator};
use crate::tree::SearchTree;
use crate::types::{Action, PieceKind, GRID_WIDTH, POINTS_FOR_TETRIS};

/// Why the search stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The bar could clear four rows; no tree was built
    TetrisShortcut,
    /// Every known piece was placed
    DepthReached,
    /// The time budget ran out
    Deadline,
}

/// Outcome of one [`Planner::search`] call
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub action: Action,
    /// Evaluation of the best node found; `None` for the shortcut
    pub evaluation: Option<f64>,
    /// Deepest ply that was started
    pub plies: usize,
    /// States created below the root
    pub nodes: usize,
    /// States kept in the search tree for expansion; the last ply is only scored
    pub stored: usize,
    pub stop: StopReason,
}

/// Chooses the next move for a game state
#[derive(Debug, Clone)]
pub struct Planner<E = StackEvaluator, C = MonotonicClock> {
    config: SearchConfig,
    evaluator: E,
    clock: C,
}

impl Planner {
    /// Planner with the stack heuristic and the system clock
    pub fn new(config: SearchConfig) -> Self {
        Self::with_parts(config, StackEvaluator, MonotonicClock::new())
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<E: Evaluator, C: Clock> Planner<E, C> {
    pub fn with_parts(config: SearchConfig, evaluator: E, clock: C) -> Self {
        Self {
            config,
            evaluator,
            clock,
        }
    }

    pub fn with_clock<C2: Clock>(self, clock: C2) -> Planner<E, C2> {
        Planner::with_parts(self.config, self.evaluator, clock)
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Best move for `state`.
    ///
    /// Hypothetical steps inside the search draw their tail pieces from
    /// `source`; those pieces never reach the front within the ply limit.
    pub fn choose_action(
        &self,
        state: &GameState,
        source: &mut impl PieceSource,
    ) -> Result<Action, SearchError> {
        self.search(state, source).map(|report| report.action)
    }

    /// Run the search and report how it went.
    ///
    /// Fails with [`SearchError::NoLegalActions`] when `state` is game over.
    pub fn search(
        &self,
        state: &GameState,
        source: &mut impl PieceSource,
    ) -> Result<SearchReport, SearchError> {
        let deadline = self
            .clock
            .now()
            .checked_add(self.config.budget)
            .unwrap_or(Duration::MAX);

        let legal = state.legal_actions();
        if legal.is_empty() {
            return Err(SearchError::NoLegalActions);
        }

        if self.config.tetris_shortcut && state.front_piece() == PieceKind::I {
            if let Some(action) = find_tetris(state, &legal) {
                debug!(%action, "taking four-row clear");
                return Ok(SearchReport {
                    action,
                    evaluation: None,
                    plies: 0,
                    nodes: 0,
                    stored: 0,
                    stop: StopReason::TetrisShortcut,
                });
            }
        }

        let mut tree = SearchTree::new(state.clone());
        let root = tree.root();
        // First move on the path to the best state, and that state's value
        let mut best: Option<(Action, f64)> = None;
        let mut frontier = vec![root];
        let mut created = 0;
        let mut plies = 0;
        let mut stop = StopReason::DepthReached;
        let limit = self.config.ply_limit();

        'plies: while plies < limit {
            if plies > 0 && self.expired(deadline) {
                stop = StopReason::Deadline;
                break;
            }
            plies += 1;
            // Children at the last ply are scored but never expanded, so they stay out of the arena
            let last_ply = plies == limit;

            let mut next_frontier = Vec::new();
            for &node in &frontier {
                let parent_state = tree.state(node);
                let first_move = tree
                    .first_ply_ancestor(node)
                    .and_then(|id| tree.node(id).action);
                let candidates = if node == root {
                    self.root_candidates(parent_state, &legal)
                } else {
                    self.candidates(parent_state)
                };

                let children: Vec<_> = candidates
                    .into_iter()
                    .map(|action| {
                        let child = parent_state.step(action, &mut *source);
                        let value = self.evaluator.evaluate(&child);
                        (action, child, value)
                    })
                    .collect();
                created += children.len();

                for (action, child, value) in children {
                    if best.map_or(true, |(_, best_value)| value > best_value) {
                        trace!(ply = plies, %action, value, "new best");
                        best = Some((first_move.unwrap_or(action), value));
                    }
                    if !last_ply {
                        next_frontier.push(tree.add_child(node, action, child));
                    }
                }

                if self.expired(deadline) {
                    stop = StopReason::Deadline;
                    break 'plies;
                }
            }

            debug!(
                ply = plies,
                frontier = next_frontier.len(),
                nodes = created,
                "ply expanded"
            );
            frontier = next_frontier;
        }

        let (action, value) = best.ok_or(SearchError::NoLegalActions)?;
        let stored = tree.len() - 1;

        debug!(
            %action,
            value,
            plies,
            nodes = created,
            stored,
            ?stop,
            "search finished"
        );

        Ok(SearchReport {
            action,
            evaluation: Some(value),
            plies,
            nodes: created,
            stored,
            stop,
        })
    }

    fn expired(&self, deadline: Duration) -> bool {
        self.clock.now() >= deadline
    }

    /// Legal actions of a searched state after pruning
    fn candidates(&self, state: &GameState) -> Vec<Action> {
        let legal = state.legal_actions_iter();
        if self.config.keep_right_column_free {
            legal
                .filter(|&action| leaves_right_column_free(state, action))
                .collect()
        } else {
            legal.collect()
        }
    }

    /// Like [`Planner::candidates`], but never prunes the root down to nothing.
    ///
    /// Applying the right-column rule unconditionally leaves a root whose
    /// only moves touch the last column with no candidates, and the search
    /// then has no move to return at all. Such a root keeps every legal action.
    fn root_candidates(&self, state: &GameState, legal: &[Action]) -> Vec<Action> {
        if !self.config.keep_right_column_free {
            return legal.to_vec();
        }
        let kept: Vec<Action> = legal
            .iter()
            .copied()
            .filter(|&action| leaves_right_column_free(state, action))
            .collect();
        if kept.is_empty() {
            debug!(legal = legal.len(), "every move touches the right column, not pruning");
            legal.to_vec()
        } else {
            kept
        }
    }
}

/// First legal action that clears four rows at once
pub fn find_tetris(state: &GameState, legal: &[Action]) -> Option<Action> {
    legal.iter().copied().find(|&action| {
        state
            .placement(action)
            .is_some_and(|placement| placement.score_delta >= POINTS_FOR_TETRIS)
    })
}

/// Whether the placed shape stays clear of the last grid column
pub fn leaves_right_column_free(state: &GameState, action: Action) -> bool {
    let shape = state.front_shape(action.rotation);
    action.position.column + shape.width() <= GRID_WIDTH - 1
}
