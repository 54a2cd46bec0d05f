//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the game rules, the search engine and the console renderer alike.
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Piece Queue
//!
//! The game always knows the next [`QUEUE_LEN`] pieces. Placing the front piece
//! removes it and appends one freshly drawn piece at the tail.
//!
//! # Scoring
//!
//! | Rows cleared | Points |
//! |--------------|--------|
//! | 0 | 0 |
//! | 1 | 100 |
//! | 2 | 300 |
//! | 3 | 500 |
//! | 4 | 800 |
//!
//! # Examples
//!
//! ```
//! use tetris_lookahead_types::{Action, PieceKind, Position, Rotation, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(PieceKind::from_index(5), Some(PieceKind::I));
//! assert_eq!(Rotation::from_degrees(270), Some(Rotation::West));
//!
//! let action = Action::new(Position::new(18, 0), Rotation::North);
//! assert_eq!(action.to_string(), "(18, 0) north");
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

use std::fmt;

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: usize = 10;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: usize = 20;

/// Number of upcoming pieces known at any time
pub const QUEUE_LEN: usize = 4;

/// Largest bounding box side of any shape in the catalog
pub const MAX_SHAPE_SIDE: usize = 4;

/// Points per number of rows cleared in a single placement
///
/// Index is the row count. The table is final; it is not derived from a formula.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points for clearing four rows at once
pub const POINTS_FOR_TETRIS: u32 = LINE_SCORES[4];


/// The six piece kinds of the shape catalog, in catalog order
///
/// - **L**: 3-tall column with a foot to the right
/// - **J**: 3-tall column with a foot to the left
/// - **O**: 2x2 square
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
/// - **I**: 4-tall bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    L,
    J,
    O,
    S,
    Z,
    I,
}

impl PieceKind {
    /// Every kind in catalog order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::I,
    ];

    /// Position in the catalog, used for table indexing
    pub fn index(self) -> usize {
        match self {
            PieceKind::L => 0,
            PieceKind::J => 1,
            PieceKind::O => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::I => 5,
        }
    }

    /// Inverse of [`PieceKind::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::I => "i",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clockwise rotation applied to a base shape
///
/// - **North**: base orientation (0°)
/// - **East**: 90° clockwise
/// - **South**: 180°
/// - **West**: 270° clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Every rotation in ordinal order
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Ordinal used for table indexing (0-3)
    pub fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Inverse of [`Rotation::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Clockwise angle in degrees
    pub fn degrees(self) -> u16 {
        self.index() as u16 * 90
    }

    /// Parse from an angle; only 0, 90, 180 and 270 are accepted
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Rotation::North),
            90 => Some(Rotation::East),
            180 => Some(Rotation::South),
            270 => Some(Rotation::West),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grid coordinate of the top-left corner of a shape's bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// A placement of the front piece: where its bounding box goes and how it is rotated
///
/// Only meaningful relative to the game state it was enumerated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    pub position: Position,
    pub rotation: Rotation,
}

impl Action {
    pub fn new(position: Position, rotation: Rotation) -> Self {
        Self { position, rotation }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {}",
            self.position.row, self.position.column, self.rotation
        )
    }
}
