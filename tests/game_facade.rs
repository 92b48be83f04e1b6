use minichess::board::{Board, Color, Piece};
use minichess::search::{SearchParams, WIN_SCORE};
use minichess::utils::parse_square;
use minichess::{EngineError, Game};

fn sq(name: &str) -> usize {
    parse_square(name).expect("valid square")
}

#[test]
fn apply_move_rejects_sentinels_before_touching_the_board() {
    let mut game = Game::default();
    let before = game.board().clone();

    assert_eq!(
        game.apply_move(0, sq("c2")),
        Err(EngineError::InvalidSquare { square: 0 })
    );
    assert_eq!(
        game.apply_move(sq("b2"), 19),
        Err(EngineError::InvalidSquare { square: 19 })
    );
    assert_eq!(
        game.apply_move(sq("b2"), 400),
        Err(EngineError::InvalidSquare { square: 400 })
    );
    assert_eq!(game.board(), &before);
}

#[test]
fn apply_move_builds_the_record_from_the_board() {
    let mut game = Game::default();
    let mv = game.apply_move(sq("b2"), sq("g2")).unwrap();
    assert_eq!(mv.piece, Piece::WhiteRook);
    assert_eq!(mv.captured, Piece::BlackBishop);
    assert_eq!(game.piece_at(sq("g2")), Piece::WhiteRook);
    assert_eq!(game.piece_at(sq("b2")), Piece::Empty);
    assert_eq!(game.side(), Color::Black);
}

#[test]
fn apply_legal_move_checks_membership() {
    let mut game = Game::default();
    let err = game.apply_legal_move(sq("b2"), sq("a2")).unwrap_err();
    assert_eq!(
        err,
        EngineError::IllegalMove {
            from: "b2".into(),
            to: "a2".into()
        }
    );
    assert_eq!(game.board(), &Board::start());
    assert!(game.apply_legal_move(sq("b1"), sq("c2")).is_ok());
}

#[test]
fn engine_replies_and_hands_the_move_back() {
    let mut game = Game::new(SearchParams::new().depth(3));
    game.apply_legal_move(sq("b2"), sq("c2")).unwrap();

    let result = game.engine_move().unwrap();
    let mv = result.best_move.unwrap();
    assert_eq!(mv.piece.color(), Some(Color::Black));
    assert_eq!(game.piece_at(mv.to), mv.piece);
    assert_eq!(game.side(), Color::White);
    assert_eq!(game.last_score(), Some(result.score));
    assert!(!game.is_decided());
}

#[test]
fn engine_takes_an_exposed_king() {
    let board = Board::with_pieces(
        &[
            (sq("c2"), Piece::WhiteRook),
            (sq("h2"), Piece::BlackKing),
            (sq("a1"), Piece::WhiteKing),
        ],
        Color::White,
    )
    .unwrap();
    let mut game = Game::from_board(board, SearchParams::new().depth(5));

    let result = game.engine_move().unwrap();
    assert_eq!(result.score, WIN_SCORE);
    assert_eq!(game.winner(), Some(Color::White));
    assert!(game.is_decided());
}

#[test]
fn human_king_capture_ends_the_game() {
    let board = Board::with_pieces(
        &[
            (sq("c2"), Piece::WhiteRook),
            (sq("h2"), Piece::BlackKing),
            (sq("a1"), Piece::WhiteKing),
        ],
        Color::White,
    )
    .unwrap();
    let mut game = Game::from_board(board, SearchParams::default());
    assert_eq!(game.winner(), None);

    game.apply_legal_move(sq("c2"), sq("h2")).unwrap();
    assert_eq!(game.winner(), Some(Color::White));
    assert!(game.is_decided());
}

#[test]
fn engine_without_moves_reports_no_best_move() {
    let placements = [
        (sq("a2"), Piece::BlackBishop),
        (sq("b1"), Piece::BlackBishop),
        (sq("c2"), Piece::BlackBishop),
        (sq("d1"), Piece::BlackBishop),
        (sq("e2"), Piece::BlackBishop),
        (sq("f1"), Piece::BlackBishop),
        (sq("g2"), Piece::BlackBishop),
        (sq("h1"), Piece::BlackBishop),
        (sq("a1"), Piece::WhiteKing),
    ];
    let board = Board::with_pieces(&placements, Color::Black).unwrap();
    let mut game = Game::from_board(board.clone(), SearchParams::new().depth(2));

    assert_eq!(game.engine_move(), Err(EngineError::NoBestMove));
    assert_eq!(game.last_score(), Some(-WIN_SCORE));
    assert!(game.is_decided());
    assert_eq!(game.board(), &board);
}
