//! Static evaluation of a game state
//!
//! The default [`StackEvaluator`] rewards low, dense stacks: it multiplies how
//! solid the stack is (few enclosed gaps) by how much of the grid is still
//! empty above it. Values lie in `[0, 1)`; higher is better.

use crate::core::{GameState, Grid};

/// Heuristic score of a snapshot; higher is better
pub trait Evaluator {
    fn evaluate(&self, state: &GameState) -> f64;
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    fn evaluate(&self, state: &GameState) -> f64 {
        (**self).evaluate(state)
    }
}

/// Terms of a [`StackEvaluator`] score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Contiguous non-empty rows counted up from the floor
    pub stack_height: usize,
    /// Enclosed empty cells below the top stack row
    pub gaps: usize,
    pub filled_ratio: f64,
    pub empty_row_ratio: f64,
    /// `filled_ratio * empty_row_ratio`
    pub value: f64,
}

/// Stack height and gap count heuristic
#[derive(Debug, Clone, Copy, Default)]
pub struct StackEvaluator;

impl StackEvaluator {
    pub fn breakdown(&self, grid: &Grid) -> Evaluation {
        let height = grid.height();
        let width = grid.width();
        let stack_height = stack_height(grid);
        let gaps = count_gaps(grid, stack_height);

        // The top stack row is excluded from the area, it is still open from above
        let filled_ratio = if stack_height <= 1 {
            0.0
        } else {
            let area = (width * (stack_height - 1)) as f64;
            (area - gaps as f64) / area
        };
        let empty_row_ratio = (height - stack_height) as f64 / height as f64;

        Evaluation {
            stack_height,
            gaps,
            filled_ratio,
            empty_row_ratio,
            value: filled_ratio * empty_row_ratio,
        }
    }
}

impl Evaluator for StackEvaluator {
    fn evaluate(&self, state: &GameState) -> f64 {
        self.breakdown(state.grid()).value
    }
}

/// Non-empty rows from the bottom up to the first empty row
pub fn stack_height(grid: &Grid) -> usize {
    (0..grid.height())
        .rev()
        .take_while(|&row| !grid.is_row_empty(row))
        .count()
}

/// Gaps in the rows under the top stack row.
///
/// A gap is an empty cell whose upper, left and right neighbours are all
/// occupied. Cells on the grid edge never count.
pub fn count_gaps(grid: &Grid, stack_height: usize) -> usize {
    let top_row = grid.height() - stack_height;
    (top_row + 1..grid.height())
        .map(|row| {
            (1..grid.width().saturating_sub(1))
                .filter(|&column| {
                    !grid.is_occupied(row, column)
                        && grid.is_occupied(row - 1, column)
                        && grid.is_occupied(row, column - 1)
                        && grid.is_occupied(row, column + 1)
                })
                .count()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GRID_WIDTH;

    #[test]
    fn empty_grid_scores_zero() {
        let eval = StackEvaluator.breakdown(&Grid::new());
        assert_eq!(eval.stack_height, 0);
        assert_eq!(eval.gaps, 0);
        assert_eq!(eval.value, 0.0);
        assert_eq!(eval.empty_row_ratio, 1.0);
    }

    #[test]
    fn single_row_stack_has_no_filled_ratio() {
        let mut grid = Grid::new();
        grid.set(19, 3, true);
        let eval = StackEvaluator.breakdown(&grid);
        assert_eq!(eval.stack_height, 1);
        assert_eq!(eval.value, 0.0);
    }

    #[test]
    fn solid_two_rows() {
        let mut grid = Grid::new();
        for column in 0..GRID_WIDTH - 1 {
            grid.set(19, column, true);
        }
        grid.set(18, 0, true);
        let eval = StackEvaluator.breakdown(&grid);
        assert_eq!(eval.stack_height, 2);
        assert_eq!(eval.gaps, 0);
        assert_eq!(eval.filled_ratio, 1.0);
        assert_eq!(eval.value, 18.0 / 20.0);
    }

    #[test]
    fn enclosed_cell_counts_as_gap() {
        let mut grid = Grid::new();
        // Row 19: X X . X ...   Row 18: . . X . ...
        grid.set(19, 1, true);
        grid.set(19, 3, true);
        grid.set(18, 2, true);
        let eval = StackEvaluator.breakdown(&grid);
        assert_eq!(eval.stack_height, 2);
        assert_eq!(eval.gaps, 1);
        assert_eq!(eval.filled_ratio, 9.0 / 10.0);
    }

    #[test]
    fn edge_cells_are_never_gaps() {
        let mut grid = Grid::new();
        grid.set(18, 0, true);
        grid.set(19, 1, true);
        let eval = StackEvaluator.breakdown(&grid);
        assert_eq!(eval.gaps, 0);
    }

    #[test]
    fn stack_height_stops_at_first_empty_row() {
        let mut grid = Grid::new();
        grid.set(19, 0, true);
        grid.set(17, 0, true);
        assert_eq!(stack_height(&grid), 1);
    }

    #[test]
    fn lower_stack_scores_higher() {
        let mut low = Grid::new();
        let mut high = Grid::new();
        for column in 0..GRID_WIDTH {
            for row in 18..20 {
                low.set(row, column, column != 9);
            }
            for row in 14..20 {
                high.set(row, column, column != 9);
            }
        }
        assert!(StackEvaluator.breakdown(&low).value > StackEvaluator.breakdown(&high).value);
    }
}
