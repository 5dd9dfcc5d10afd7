use tetromino::core::{Board, Piece};
use tetromino::term::{encode_full, BoardView, Viewport};
use tetromino::types::PieceKind;

#[test]
fn term_view_renders_border_corners() {
    let board = Board::new(1);
    let view = BoardView::default();

    // cell_w=2, cell_h=1: 20x20 playfield plus border => 22x22.
    let fb = view.render(&board, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_flips_rows_so_row_zero_is_at_the_bottom() {
    let mut board = Board::new(1);
    board.set_cell(0, 0, true);

    let fb = BoardView::default().render(&board, Viewport::new(22, 22));

    // Inside the border at (1, 1); board row 0 is the last playfield row.
    let y0 = 1 + 19;
    assert_eq!(fb.get(1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(2, y0).unwrap().ch, '█');
    assert_eq!(fb.get(3, y0).unwrap().ch, '·');
    assert_eq!(fb.get(1, 1 + 18).unwrap().ch, '·');
}

#[test]
fn term_view_draws_the_active_piece_on_the_top_row() {
    let mut board = Board::new(1);
    board.spawn(Piece::new(PieceKind::I));

    let fb = BoardView::default().render(&board, Viewport::new(22, 22));

    // I covers columns 3..=6 of row 19 => x 7..15 on screen row 1.
    for x in 7..15 {
        assert_eq!(fb.get(x, 1).unwrap().ch, '█', "x={}", x);
    }
    assert_eq!(fb.get(5, 1).unwrap().ch, '·');
    assert_eq!(fb.get(15, 1).unwrap().ch, '·');
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut board = Board::new(1);
    for x in 0..10 {
        board.set_cell(x, 19, true);
    }
    board.spawn(Piece::new(PieceKind::I));
    assert!(board.is_game_over());

    let fb = BoardView::default().render(&board, Viewport::new(40, 24));
    assert!(fb.to_text().contains("GAME OVER"));
}

#[test]
fn term_view_side_panel_shows_line_count() {
    let board = Board::new(1);
    let fb = BoardView::default().render(&board, Viewport::new(60, 24));
    let text = fb.to_text();
    assert!(text.contains("LINES"));
    assert!(text.contains("PIECES"));
    assert!(!text.contains("GAME OVER"));
}

#[test]
fn term_full_redraw_encodes_every_row() {
    let board = Board::new(1);
    let fb = BoardView::default().render(&board, Viewport::new(22, 22));

    let mut out = Vec::new();
    encode_full(&fb, &mut out).unwrap();
    let text = String::from_utf8_lossy(&out);
    assert!(text.contains('┌'));
    assert!(text.contains('┘'));
}
