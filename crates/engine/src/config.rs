//! Search configuration

use std::time::Duration;

use crate::types::QUEUE_LEN;

/// Default wall-clock budget per decision
pub const DEFAULT_BUDGET: Duration = Duration::from_secs(10);

/// Knobs for [`crate::Planner`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Wall-clock budget for one decision
    pub budget: Duration,
    /// Deepest ply explored; capped at the queue length because deeper plies
    /// would place pieces nobody has seen yet
    pub max_plies: usize,
    /// Prune search moves that touch the rightmost column
    pub keep_right_column_free: bool,
    /// With the bar in front, take any four-row clear without searching
    pub tetris_shortcut: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            max_plies: QUEUE_LEN,
            keep_right_column_free: true,
            tetris_shortcut: true,
        }
    }
}

impl SearchConfig {
    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_max_plies(mut self, max_plies: usize) -> Self {
        self.max_plies = max_plies;
        self
    }

    pub fn with_keep_right_column_free(mut self, enabled: bool) -> Self {
        self.keep_right_column_free = enabled;
        self
    }

    pub fn with_tetris_shortcut(mut self, enabled: bool) -> Self {
        self.tetris_shortcut = enabled;
        self
    }

    /// Ply bound actually used: `max_plies` clamped to `1..=QUEUE_LEN`
    pub fn ply_limit(&self) -> usize {
        self.max_plies.clamp(1, QUEUE_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.budget, Duration::from_secs(10));
        assert_eq!(config.ply_limit(), 4);
        assert!(config.keep_right_column_free);
        assert!(config.tetris_shortcut);
    }

    #[test]
    fn ply_limit_is_clamped() {
        assert_eq!(SearchConfig::default().with_max_plies(0).ply_limit(), 1);
        assert_eq!(SearchConfig::default().with_max_plies(9).ply_limit(), 4);
        assert_eq!(SearchConfig::default().with_max_plies(2).ply_limit(), 2);
    }
}
