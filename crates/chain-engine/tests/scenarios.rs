//! End-to-end scenarios: fixed chains, scoring, and full rounds.

use chain_core::{catalog, parse_chain, BoardPosition, GamePiece, PieceColor, PieceType};
use chain_engine::{
    check_chain, generate_board, score_chain, solve, validate_chain, BoardSave, ChainError,
    Difficulty, EnemyKing, LevelBook, Occupancy, Round, Session,
};

fn pos(x: u8, y: u8) -> BoardPosition {
    BoardPosition::new(x, y).unwrap()
}

fn piece(id: &str) -> GamePiece {
    *catalog::find(id).unwrap()
}

fn rook_then_bishop() -> Occupancy {
    let mut occ = Occupancy::new();
    occ.place(pos(0, 0), piece("rook-blue"));
    occ.place(pos(0, 2), piece("bishop-green"));
    occ
}

#[test]
fn rook_bishop_chain_reaches_king() {
    let occ = rook_then_bishop();
    let chain = parse_chain("0,0 0,2").unwrap();
    assert!(validate_chain(&occ, &chain, &EnemyKing::new(pos(2, 4))));
}

#[test]
fn rook_bishop_chain_misses_shifted_king() {
    let occ = rook_then_bishop();
    let chain = [pos(0, 0), pos(0, 2)];
    let king = EnemyKing::new(pos(2, 3));
    assert!(!validate_chain(&occ, &chain, &king));
    assert_eq!(
        check_chain(&occ, &chain, &king),
        Err(ChainError::KingOutOfReach(pos(0, 2)))
    );
}

#[test]
fn broken_link_is_reported() {
    let occ = rook_then_bishop();
    let chain = [pos(0, 2), pos(0, 0)];
    // A bishop on (0,2) does not reach (0,0).
    assert_eq!(
        check_chain(&occ, &chain, &EnemyKing::new(pos(2, 2))),
        Err(ChainError::CannotCapture {
            from: pos(0, 2),
            to: pos(0, 0)
        })
    );
}

#[test]
fn custom_pieces_score_with_running_multiplier() {
    let mut occ = Occupancy::new();
    occ.place(
        pos(0, 0),
        GamePiece::new("a", PieceType::Rook, PieceColor::Blue, 10, 2.0),
    );
    occ.place(
        pos(0, 1),
        GamePiece::new("b", PieceType::Rook, PieceColor::Red, 20, 3.0),
    );
    let score = score_chain(&occ, &[pos(0, 0), pos(0, 1)]);
    assert_eq!(score.points, 50);
    assert_eq!(score.multiplier_trace, "2x 3");
    assert_eq!(score.total_multiplier(), 6.0);
}

#[test]
fn empty_chain_scores_nothing() {
    let score = score_chain(&Occupancy::new(), &[]);
    assert_eq!(score.points, 0);
    assert_eq!(score.multiplier_trace, "");
    assert!(score.steps.is_empty());
}

#[test]
fn seeded_rounds_repeat() {
    let levels = LevelBook::builtin();
    for difficulty in Difficulty::ALL {
        let a = Round::generate(difficulty, &levels, None, Some("scenario"));
        let b = Round::generate(difficulty, &levels, None, Some("scenario"));
        assert_eq!(a.board(), b.board());
        assert_eq!(a.pieces(), b.pieces());
    }
}

#[test]
fn play_bank_save_and_restore() {
    let board = generate_board(Difficulty::Easy, Some("full-round"));
    let pieces = LevelBook::builtin().select(&board, Some("queen-power"), None);
    let round = Round::new(board, pieces);

    let solution = solve(&round).expect("queens can reach the king");
    let finished = solution.replay(&round).unwrap();
    assert!(finished.is_complete());

    let outcome = Session::new().complete(&finished).unwrap();
    assert_eq!(outcome.session.combo, 1);
    assert_eq!(outcome.session.score, solution.score.points);
    assert!(outcome.next_round.chain().is_empty());

    let save = BoardSave::capture(&finished, outcome.session.score, "queens", 0);
    let json = serde_json::to_string(&save).unwrap();
    let loaded: BoardSave = serde_json::from_str(&json).unwrap();
    let restored = loaded.restore().unwrap();
    assert_eq!(restored.chain(), finished.chain());
    assert_eq!(restored.potential_score(), finished.potential_score());
}
