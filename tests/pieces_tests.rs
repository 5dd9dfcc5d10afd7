//! Pieces module tests - spawn templates and rotation

use tetromino::core::{spawn_cells, Piece, PieceRng};
use tetromino::types::PieceKind;

#[test]
fn test_spawn_templates() {
    assert_eq!(
        spawn_cells(PieceKind::O),
        [(-1, 0), (0, 0), (-1, -1), (0, -1)]
    );
    assert_eq!(
        spawn_cells(PieceKind::I),
        [(-2, 0), (-1, 0), (0, 0), (1, 0)]
    );
    assert_eq!(
        spawn_cells(PieceKind::T),
        [(-1, 0), (0, 0), (1, 0), (0, -1)]
    );
}

#[test]
fn test_every_template_contains_the_pivot() {
    for kind in PieceKind::ALL {
        assert!(
            spawn_cells(kind).contains(&(0, 0)),
            "{} template has no pivot cell",
            kind.as_str()
        );
    }
}

#[test]
fn test_four_clockwise_rotations_are_identity() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::new(kind);
        for _ in 0..4 {
            piece.rotate_cw();
        }
        assert_eq!(piece.current_cells(), spawn_cells(kind), "{:?}", kind);
    }
}

#[test]
fn test_four_counter_clockwise_rotations_are_identity() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::new(kind);
        for _ in 0..4 {
            piece.rotate_ccw();
        }
        assert_eq!(piece.current_cells(), spawn_cells(kind), "{:?}", kind);
    }
}

#[test]
fn test_single_rotation_changes_non_o_pieces() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::new(kind);
        piece.rotate_cw();
        if kind == PieceKind::O {
            assert_eq!(piece.current_cells(), spawn_cells(kind));
        } else {
            assert_ne!(piece.current_cells(), spawn_cells(kind), "{:?}", kind);
        }
    }
}

#[test]
fn test_rotating_a_piece_leaves_the_template_intact() {
    let mut first = Piece::new(PieceKind::L);
    first.rotate_cw();
    first.rotate_cw();

    let second = Piece::new(PieceKind::L);
    assert_eq!(second.current_cells(), spawn_cells(PieceKind::L));
    assert_ne!(first.current_cells(), second.current_cells());
}

#[test]
fn test_cells_at_translates_offsets() {
    let piece = Piece::new(PieceKind::I);
    assert_eq!(piece.cells_at(5, 19), [(3, 19), (4, 19), (5, 19), (6, 19)]);
}

#[test]
fn test_create_with_and_without_kind() {
    let mut rng = PieceRng::new(3);
    assert_eq!(
        Piece::create(Some(PieceKind::Z), &mut rng).kind(),
        PieceKind::Z
    );

    let mut a = PieceRng::new(3);
    let mut b = PieceRng::new(3);
    for _ in 0..20 {
        assert_eq!(
            Piece::create(None, &mut a).kind(),
            Piece::create(None, &mut b).kind()
        );
    }
}
