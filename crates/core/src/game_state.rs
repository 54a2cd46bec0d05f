//! Game state - grid, upcoming pieces and score
//!
//! A [`GameState`] is an immutable snapshot. Every transition builds a new
//! value with its own grid copy, which lets the search keep thousands of
//! hypothetical futures side by side without any sharing concerns.
//!
//! # Placement rules
//!
//! Pieces enter from above and fall straight down; there is no sideways entry
//! and no hold. A placement of the front piece is legal when:
//!
//! 1. none of the rotated shape's filled cells overlaps an occupied cell, and
//! 2. the piece can come to rest there: in at least one of its columns, the
//!    lowest filled cell sits directly on an occupied cell (or the floor) and
//!    the grid column above that cell is empty all the way up to row 0.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::queue::{BlockQueue, PieceSource};
use crate::scoring::line_clear_score;
use crate::shapes::{shape, Shape};
use crate::types::{Action, PieceKind, Position, Rotation, GRID_HEIGHT, GRID_WIDTH};

/// Result of dropping the front piece, before the queue moves on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Grid after stamping the piece and clearing full rows
    pub grid: Grid,
    /// Row indices that were full before removal, bottom to top
    pub cleared_rows: ArrayVec<usize, GRID_HEIGHT>,
    /// Points earned by this placement
    pub score_delta: u32,
}

impl Placement {
    pub fn lines_cleared(&self) -> usize {
        self.cleared_rows.len()
    }
}

/// Complete, immutable game snapshot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    grid: Grid,
    queue: BlockQueue,
    score: u32,
    lines: u32,
    pieces: u32,
}

impl GameState {
    /// Start a game: empty grid, a full queue drawn from `source`, score 0
    pub fn new(source: &mut impl PieceSource) -> Self {
        Self::from_parts(Grid::new(), BlockQueue::new(source), 0)
    }

    /// Assemble a state from existing parts (scenarios, replays, tests)
    pub fn from_parts(grid: Grid, queue: BlockQueue, score: u32) -> Self {
        Self {
            grid,
            queue,
            score,
            lines: 0,
            pieces: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn queue(&self) -> &BlockQueue {
        &self.queue
    }

    /// The piece the next action places
    pub fn front_piece(&self) -> PieceKind {
        self.queue.front()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared since the game started
    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Total pieces placed since the game started
    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    /// Rotated shape of the front piece
    pub fn front_shape(&self, rotation: Rotation) -> &'static Shape {
        shape(self.front_piece(), rotation)
    }

    /// Every legal placement of the front piece.
    ///
    /// Ordered by rotation, then row (top to bottom), then column (left to
    /// right). Empty means the game is over.
    pub fn legal_actions(&self) -> Vec<Action> {
        self.legal_actions_iter().collect()
    }

    /// Lazy version of [`GameState::legal_actions`], same order
    pub fn legal_actions_iter(&self) -> impl Iterator<Item = Action> + '_ {
        Rotation::ALL.into_iter().flat_map(move |rotation| {
            let shape = self.front_shape(rotation);
            let rows = 0..=GRID_HEIGHT - shape.height();
            rows.flat_map(move |row| {
                (0..=GRID_WIDTH - shape.width()).filter_map(move |column| {
                    let position = Position::new(row, column);
                    self.can_place(shape, position)
                        .then(|| Action::new(position, rotation))
                })
            })
        })
    }

    /// Whether `action` is one of [`GameState::legal_actions`]
    pub fn is_legal(&self, action: Action) -> bool {
        self.can_place(self.front_shape(action.rotation), action.position)
    }

    fn can_place(&self, shape: &Shape, position: Position) -> bool {
        self.grid.fits(shape, position) && self.can_fall_there(shape, position)
    }

    fn can_fall_there(&self, shape: &Shape, position: Position) -> bool {
        (0..shape.width()).any(|shape_column| {
            let bottom = position.row + shape.bottom_row_in_column(shape_column);
            let column = position.column + shape_column;
            let supported = bottom + 1 >= GRID_HEIGHT || self.grid.is_occupied(bottom + 1, column);
            supported && (0..bottom).all(|row| !self.grid.is_occupied(row, column))
        })
    }

    /// Drop the front piece and clear rows, without drawing a new piece.
    ///
    /// Returns `None` when the shape does not fit at the action's position.
    pub fn placement(&self, action: Action) -> Option<Placement> {
        let mut grid = self.grid.clone();
        if !grid.stamp(self.front_shape(action.rotation), action.position) {
            return None;
        }
        let cleared_rows = grid.clear_full_rows();
        let score_delta = line_clear_score(cleared_rows.len());
        Some(Placement {
            grid,
            cleared_rows,
            score_delta,
        })
    }

    /// Apply `action` and return the next state.
    ///
    /// The front piece is removed from the queue and one piece drawn from
    /// `source` is appended.
    ///
    /// # Panics
    ///
    /// Panics if the front piece does not fit at the action's position.
    /// Actions are only meaningful for the state that enumerated them.
    pub fn step(&self, action: Action, source: &mut impl PieceSource) -> GameState {
        debug_assert!(self.is_legal(action), "illegal action {action}");
        let placement = self
            .placement(action)
            .unwrap_or_else(|| panic!("action {action} does not fit the grid"));
        self.advance(placement, source)
    }

    /// Finish a transition from an already computed placement
    pub fn advance(&self, placement: Placement, source: &mut impl PieceSource) -> GameState {
        let lines = placement.lines_cleared() as u32;
        GameState {
            grid: placement.grid,
            queue: self.queue.advance(source),
            score: self.score + placement.score_delta,
            lines: self.lines + lines,
            pieces: self.pieces + 1,
        }
    }

    /// True iff the front piece has no legal placement
    pub fn is_done(&self) -> bool {
        self.legal_actions_iter().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::ScriptedPieces;

    fn state_with(front: PieceKind, grid: Grid) -> GameState {
        GameState::from_parts(grid, BlockQueue::from_pieces([front; 4]), 0)
    }

    #[test]
    fn test_new_state_is_empty() {
        let mut source = ScriptedPieces::repeat(PieceKind::O);
        let state = GameState::new(&mut source);
        assert_eq!(state.grid().occupied_count(), 0);
        assert_eq!(state.score(), 0);
        assert_eq!(state.queue().len(), 4);
        assert!(!state.is_done());
    }

    #[test]
    fn test_square_on_empty_grid_rests_on_floor() {
        let state = state_with(PieceKind::O, Grid::new());
        let actions = state.legal_actions();

        // One per column for each of the four identical rotations
        assert_eq!(actions.len(), 4 * 9);
        assert!(actions.iter().all(|a| a.position.row == 18));
    }

    #[test]
    fn test_piece_cannot_pass_through_overhang() {
        let mut grid = Grid::new();
        // Roof over column 0 at row 10
        grid.set(10, 0, true);
        let state = state_with(PieceKind::I, grid);

        let north_col0: Vec<_> = state
            .legal_actions()
            .into_iter()
            .filter(|a| a.rotation == Rotation::North && a.position.column == 0)
            .collect();
        assert_eq!(north_col0, vec![Action::new(Position::new(6, 0), Rotation::North)]);
    }

    #[test]
    fn test_can_fall_checks_whole_column_above() {
        let mut grid = Grid::new();
        // S piece resting on a step; column 2 has a block far above
        grid.set(19, 0, true);
        grid.set(19, 1, true);
        grid.set(5, 2, true);
        let state = state_with(PieceKind::S, grid);
        let action = Action::new(Position::new(17, 0), Rotation::North);

        // Column 0 and 1 bottoms rest on row 19 blocks with clear columns above
        assert!(state.is_legal(action));
    }

    #[test]
    fn test_step_stamps_and_advances_queue() {
        let mut source = ScriptedPieces::repeat(PieceKind::Z);
        let state = GameState::from_parts(
            Grid::new(),
            BlockQueue::from_pieces([PieceKind::O, PieceKind::L, PieceKind::J, PieceKind::S]),
            0,
        );
        let next = state.step(Action::new(Position::new(18, 3), Rotation::North), &mut source);

        assert_eq!(next.grid().occupied_count(), 4);
        assert!(next.grid().is_occupied(18, 3) && next.grid().is_occupied(19, 4));
        assert_eq!(
            next.queue().as_slice(),
            &[PieceKind::L, PieceKind::J, PieceKind::S, PieceKind::Z]
        );
        assert_eq!(next.pieces(), 1);
        // Snapshot semantics
        assert_eq!(state.grid().occupied_count(), 0);
    }

    #[test]
    fn test_placement_reports_cleared_rows() {
        let mut grid = Grid::new();
        for column in 0..GRID_WIDTH - 1 {
            grid.set(19, column, true);
            grid.set(18, column, true);
        }
        let state = state_with(PieceKind::I, grid);
        let placement = state
            .placement(Action::new(Position::new(16, 9), Rotation::North))
            .unwrap();

        assert_eq!(placement.lines_cleared(), 2);
        assert_eq!(placement.score_delta, 300);
        assert_eq!(placement.grid.occupied_count(), 2);
        assert!(placement.grid.is_occupied(19, 9) && placement.grid.is_occupied(18, 9));
    }

    #[test]
    fn test_placement_rejects_overlap() {
        let mut grid = Grid::new();
        grid.set(19, 0, true);
        let state = state_with(PieceKind::O, grid);
        assert!(state
            .placement(Action::new(Position::new(18, 0), Rotation::North))
            .is_none());
    }
}
