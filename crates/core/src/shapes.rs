//! Shapes module - piece catalog and clockwise rotation
//!
//! Each piece kind has a base shape; the other three orientations are derived
//! by rotating it 90° clockwise one, two and three times. The full
//! `[piece][rotation]` table is computed once per process and shared.

use std::sync::OnceLock;

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Rotation, MAX_SHAPE_SIDE};

/// Rectangular boolean matrix, row-major, at most 4x4
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    height: usize,
    width: usize,
    cells: ArrayVec<bool, { MAX_SHAPE_SIDE * MAX_SHAPE_SIDE }>,
}

impl Shape {
    /// Build a shape from rows of cells.
    ///
    /// Panics if the rows are ragged, empty, or larger than 4x4. Shapes are
    /// static configuration, so a malformed one is a programming error.
    pub fn from_rows(rows: &[&[bool]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        assert!(
            (1..=MAX_SHAPE_SIDE).contains(&height) && (1..=MAX_SHAPE_SIDE).contains(&width),
            "shape must be between 1x1 and {MAX_SHAPE_SIDE}x{MAX_SHAPE_SIDE}, got {height}x{width}"
        );
        let mut cells = ArrayVec::new();
        for row in rows {
            assert_eq!(row.len(), width, "shape rows must all have the same width");
            cells.extend(row.iter().copied());
        }
        Self {
            height,
            width,
            cells,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Cell at (row, column) of the bounding box
    #[inline(always)]
    pub fn get(&self, row: usize, column: usize) -> bool {
        row < self.height && column < self.width && self.cells[row * self.width + column]
    }

    /// Offsets of the filled cells, row by row
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height)
            .flat_map(move |row| (0..self.width).map(move |column| (row, column)))
            .filter(move |&(row, column)| self.get(row, column))
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Lowest filled row of the given shape column.
    ///
    /// # Panics
    ///
    /// Panics if the column has no filled cell: the shape table is corrupt and
    /// there is no meaningful resting row.
    pub fn bottom_row_in_column(&self, column: usize) -> usize {
        match (0..self.height).rev().find(|&row| self.get(row, column)) {
            Some(row) => row,
            None => panic!(
                "shape column {column} has no filled cell; the shape table is corrupt: {self:?}"
            ),
        }
    }

    /// True when every column holds at least one filled cell
    pub fn has_no_empty_column(&self) -> bool {
        (0..self.width).all(|column| (0..self.height).any(|row| self.get(row, column)))
    }
}

/// Rotate 90° clockwise: cell (r, c) of an h x w shape lands on (c, h-1-r) of a w x h shape
fn rotate_90(shape: &Shape) -> Shape {
    let height = shape.width;
    let width = shape.height;
    let mut cells: ArrayVec<bool, { MAX_SHAPE_SIDE * MAX_SHAPE_SIDE }> =
        (0..height * width).map(|_| false).collect();
    for row in 0..shape.height {
        for column in 0..shape.width {
            cells[column * width + (shape.height - 1 - row)] = shape.get(row, column);
        }
    }
    Shape {
        height,
        width,
        cells,
    }
}

/// Rotate a shape clockwise by the given rotation
pub fn rotate(shape: &Shape, rotation: Rotation) -> Shape {
    let mut rotated = shape.clone();
    for _ in 0..rotation.index() {
        rotated = rotate_90(&rotated);
    }
    rotated
}

const X: bool = true;
const O: bool = false;

/// Base (North) shape of a piece kind
pub fn base_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::L => Shape::from_rows(&[&[X, O], &[X, O], &[X, X]]),
        PieceKind::J => Shape::from_rows(&[&[O, X], &[O, X], &[X, X]]),
        PieceKind::O => Shape::from_rows(&[&[X, X], &[X, X]]),
        PieceKind::S => Shape::from_rows(&[&[O, X, X], &[X, X, O]]),
        PieceKind::Z => Shape::from_rows(&[&[X, X, O], &[O, X, X]]),
        PieceKind::I => Shape::from_rows(&[&[X], &[X], &[X], &[X]]),
    }
}

/// Precomputed rotations of every base shape, indexed `[piece][rotation]`
#[derive(Debug, Clone)]
pub struct ShapeLibrary {
    shapes: [[Shape; 4]; 6],
}

impl ShapeLibrary {
    /// Build the table and check the catalog invariants.
    ///
    /// Every rotation must keep the filled-cell count of its base shape and
    /// must not contain an all-empty column.
    pub fn new() -> Self {
        let shapes = PieceKind::ALL.map(|kind| {
            let base = base_shape(kind);
            Rotation::ALL.map(|rotation| {
                let rotated = rotate(&base, rotation);
                assert_eq!(
                    rotated.filled_count(),
                    base.filled_count(),
                    "rotating {kind} by {rotation} changed its cell count"
                );
                assert!(
                    rotated.has_no_empty_column(),
                    "{kind} rotated {rotation} has an empty column"
                );
                rotated
            })
        });
        Self { shapes }
    }

    /// Shape of `kind` in the given rotation
    #[inline]
    pub fn get(&self, kind: PieceKind, rotation: Rotation) -> &Shape {
        &self.shapes[kind.index()][rotation.index()]
    }
}

impl Default for ShapeLibrary {
    fn default() -> Self {
        Self::new()
    }
}

static LIBRARY: OnceLock<ShapeLibrary> = OnceLock::new();

/// Process-wide shape table, built on first use
pub fn library() -> &'static ShapeLibrary {
    LIBRARY.get_or_init(ShapeLibrary::new)
}

/// Shape of `kind` in the given rotation from the process-wide table
pub fn shape(kind: PieceKind, rotation: Rotation) -> &'static Shape {
    library().get(kind, rotation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_90_reindexes_cells() {
        let l = base_shape(PieceKind::L);
        let east = rotate(&l, Rotation::East);

        assert_eq!((east.height(), east.width()), (2, 3));
        // X X X
        // X . .
        assert!(east.get(0, 0) && east.get(0, 1) && east.get(0, 2));
        assert!(east.get(1, 0));
        assert!(!east.get(1, 1) && !east.get(1, 2));
    }

    #[test]
    fn test_full_turn_is_identity() {
        for kind in PieceKind::ALL {
            let base = base_shape(kind);
            let mut shape = base.clone();
            for _ in 0..4 {
                shape = rotate(&shape, Rotation::East);
            }
            assert_eq!(shape, base, "{kind} changed after 360°");
        }
    }

    #[test]
    fn test_bar_orientations() {
        let lib = ShapeLibrary::new();
        let north = lib.get(PieceKind::I, Rotation::North);
        let east = lib.get(PieceKind::I, Rotation::East);
        assert_eq!((north.height(), north.width()), (4, 1));
        assert_eq!((east.height(), east.width()), (1, 4));
    }

    #[test]
    fn test_bottom_row_in_column() {
        let s = base_shape(PieceKind::S);
        assert_eq!(s.bottom_row_in_column(0), 1);
        assert_eq!(s.bottom_row_in_column(1), 1);
        assert_eq!(s.bottom_row_in_column(2), 0);
    }

    #[test]
    #[should_panic(expected = "no filled cell")]
    fn test_bottom_row_panics_on_empty_column() {
        let broken = Shape::from_rows(&[&[X, O], &[X, O]]);
        broken.bottom_row_in_column(1);
    }

    #[test]
    fn test_library_is_shared() {
        assert!(std::ptr::eq(library(), library()));
        assert_eq!(shape(PieceKind::O, Rotation::South).filled_count(), 4);
    }
}
