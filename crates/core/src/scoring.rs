//! Scoring module - points per placement
//!
//! Scoring is a fixed table lookup on the number of rows cleared by one
//! placement; there is no level multiplier, combo or back-to-back bonus.

use tracing::warn;

use crate::types::LINE_SCORES;

/// Points for clearing `lines` rows with a single placement.
///
/// The catalog's tallest piece spans four rows, so more than four is not
/// reachable; if it ever happens it is logged and scored as four.
pub fn line_clear_score(lines: usize) -> u32 {
    match LINE_SCORES.get(lines) {
        Some(&points) => points,
        None => {
            warn!(lines, "placement cleared more rows than the scoring table covers");
            LINE_SCORES[LINE_SCORES.len() - 1]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores_exact() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 300);
        assert_eq!(line_clear_score(3), 500);
        assert_eq!(line_clear_score(4), 800);
    }

    #[test]
    fn test_more_than_four_rows_saturates() {
        assert_eq!(line_clear_score(5), 800);
    }
}
