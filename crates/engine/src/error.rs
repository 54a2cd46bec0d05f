use thiserror::Error;

/// Why the planner could not produce an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The state is already game over; check `GameState::is_done` first
    #[error("no legal action for the front piece")]
    NoLegalActions,
}

impl SearchError {
    pub fn code(self) -> &'static str {
        match self {
            SearchError::NoLegalActions => "no_legal_actions",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            SearchError::NoLegalActions => "the front piece cannot be placed anywhere",
        }
    }
}
