//! Shape catalog tests

use tetris_lookahead::core::shapes::{base_shape, library, rotate, shape, Shape};
use tetris_lookahead::types::{PieceKind, Rotation};

fn rows(shape: &Shape) -> Vec<String> {
    (0..shape.height())
        .map(|row| {
            (0..shape.width())
                .map(|column| if shape.get(row, column) { '#' } else { '.' })
                .collect()
        })
        .collect()
}

#[test]
fn test_l_rotations() {
    let l = PieceKind::L;
    assert_eq!(rows(shape(l, Rotation::North)), ["#.", "#.", "##"]);
    assert_eq!(rows(shape(l, Rotation::East)), ["###", "#.."]);
    assert_eq!(rows(shape(l, Rotation::South)), ["##", ".#", ".#"]);
    assert_eq!(rows(shape(l, Rotation::West)), ["..#", "###"]);
}

#[test]
fn test_s_rotations() {
    let s = PieceKind::S;
    assert_eq!(rows(shape(s, Rotation::North)), [".##", "##."]);
    assert_eq!(rows(shape(s, Rotation::East)), ["#.", "##", ".#"]);
    assert_eq!(rows(shape(s, Rotation::South)), [".##", "##."]);
}

#[test]
fn test_o_is_rotation_invariant() {
    let north = shape(PieceKind::O, Rotation::North);
    for rotation in Rotation::ALL {
        assert_eq!(shape(PieceKind::O, rotation), north);
    }
}

#[test]
fn test_rotation_preserves_cells_and_columns() {
    for kind in PieceKind::ALL {
        let base = base_shape(kind);
        for rotation in Rotation::ALL {
            let rotated = library().get(kind, rotation);
            assert_eq!(rotated.filled_count(), base.filled_count(), "{kind} {rotation}");
            assert!(rotated.has_no_empty_column(), "{kind} {rotation}");
            for column in 0..rotated.width() {
                let bottom = rotated.bottom_row_in_column(column);
                assert!(rotated.get(bottom, column));
            }
        }
    }
}

#[test]
fn test_full_turn_is_identity() {
    for kind in PieceKind::ALL {
        let base = base_shape(kind);
        let mut turned = base.clone();
        for _ in 0..4 {
            turned = rotate(&turned, Rotation::East);
        }
        assert_eq!(turned, base);
        assert_eq!(rotate(&rotate(&base, Rotation::South), Rotation::South), base);
    }
}

#[test]
fn test_rotation_swaps_dimensions() {
    for kind in PieceKind::ALL {
        let north = shape(kind, Rotation::North);
        let east = shape(kind, Rotation::East);
        assert_eq!((north.height(), north.width()), (east.width(), east.height()));
    }
}
