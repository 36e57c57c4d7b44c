use chesstolang::{ActionNarrator, CoordMove, LanguageInfo, PieceKind, Square};

// Integration tests for the narration pipeline: FEN positions spoken square
// by square, and coordinate moves narrated as phrases and sentences.

const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
const AFTER_E4_D5: &str = "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2";
const AFTER_E4_E5: &str = "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2";

fn narrator() -> ActionNarrator {
    let info = LanguageInfo::builtin().expect("Failed to load bundled language tables");
    ActionNarrator::new(info)
}

fn square(notation: &str) -> Square {
    Square::from_algebraic(notation).expect("Test square should be on the board")
}

fn action(code: &str) -> CoordMove {
    CoordMove::parse(code).expect("Test move code should parse")
}

/// Test that the starting position names every square correctly
#[test]
fn test_starting_position_board_narration() {
    let narrator = narrator();
    let board = narrator
        .board()
        .narrate(STARTPOS)
        .expect("Failed to narrate the starting position");

    // Officers answer to their traditional home names.
    assert_eq!(board.name_at(square("a1")), "White Queen's Rook");
    assert_eq!(board.name_at(square("b1")), "White Queen's Knight");
    assert_eq!(board.name_at(square("c1")), "White Queen's Bishop");
    assert_eq!(board.name_at(square("d1")), "White Queen");
    assert_eq!(board.name_at(square("e1")), "White King");
    assert_eq!(board.name_at(square("f8")), "Black King's Bishop");
    assert_eq!(board.name_at(square("h8")), "Black King's Rook");

    // Pawns are named by file, with the officer possessive.
    assert_eq!(board.name_at(square("a2")), "White Queen Rook's Pawn");
    assert_eq!(board.name_at(square("d2")), "White Queen's Pawn");
    assert_eq!(board.name_at(square("e2")), "White King's Pawn");
    assert_eq!(board.name_at(square("g7")), "Black King Knight's Pawn");

    // Empty squares narrate as ".".
    assert_eq!(board.name_at(square("e4")), ".");

    let names = board.names();
    assert_eq!(names.len(), 64, "Expected one name per square");
    assert_eq!(names[0], "White Queen's Rook", "a1 comes first");
    assert_eq!(names[63], "Black King's Rook", "h8 comes last");
}

/// Test the two spoken forms of the opening pawn push
#[test]
fn test_white_pawn_push() {
    let narration = narrator()
        .narrate(STARTPOS, action("e2e4"))
        .expect("Failed to narrate e2e4");
    assert_eq!(narration.phrase, "White King's Pawn from e2 to e4");
    assert_eq!(narration.sentence, "White Pawn at e2 moves 2 squares forwards");
    assert!(!narration.is_promotion());
}

/// Test that Black's reply reads forwards from Black's point of view
#[test]
fn test_black_pawn_push_is_forwards() {
    let narration = narrator()
        .narrate(AFTER_E4, action("e7e5"))
        .expect("Failed to narrate e7e5");
    assert_eq!(narration.phrase, "Black King's Pawn from e7 to e5");
    assert_eq!(narration.sentence, "Black Pawn at e7 moves 2 squares forwards");
}

/// Test knight moves on both wings, including the second distance
#[test]
fn test_knight_moves_speak_both_distances() {
    let narrator = narrator();

    let kingside = narrator
        .narrate(STARTPOS, action("g1f3"))
        .expect("Failed to narrate g1f3");
    assert_eq!(kingside.phrase, "White King's Knight from g1 to f3");
    assert_eq!(
        kingside.sentence,
        "White Knight at g1 moves 2 squares forwards and 1 square left"
    );

    let queenside = narrator
        .narrate(STARTPOS, action("b1c3"))
        .expect("Failed to narrate b1c3");
    assert_eq!(
        queenside.sentence,
        "White Knight at b1 moves 2 squares forwards and 1 square right"
    );
}

/// Test that a pawn capture names the captured piece
#[test]
fn test_pawn_capture_names_the_victim() {
    let narration = narrator()
        .narrate(AFTER_E4_D5, action("e4d5"))
        .expect("Failed to narrate e4d5");
    assert_eq!(narration.phrase, "White King's Pawn from e4 to d5");
    assert_eq!(
        narration.sentence,
        "White Pawn at e4 captures a pawn by moving 1 square diagonally forwards and left"
    );
    assert_eq!(narration.captured, Some(PieceKind::Pawn));
    assert_eq!(narration.side.to_string(), "White");
    assert_eq!(narration.start.to_string(), "e4");
    assert_eq!(narration.end.to_string(), "d5");
}

/// Test a straight-line capture, which resolves without any fallback
#[test]
fn test_straight_line_queen_capture() {
    let fen = "k7/8/8/3q4/8/8/3Q4/K7 w - - 0 1";
    let narration = narrator()
        .narrate(fen, action("d2d5"))
        .expect("Failed to narrate d2d5");
    assert_eq!(narration.phrase, "White Queen from d2 to d5");
    assert_eq!(
        narration.sentence,
        "White Queen at d2 captures a queen by moving 3 squares forwards"
    );
}

/// Test that a diagonal capture falls back to the diagonal capture manner
#[test]
fn test_diagonal_queen_capture_uses_fallback() {
    let fen = "k7/8/8/6q1/8/8/3Q4/K7 w - - 0 1";
    let narration = narrator()
        .narrate(fen, action("d2g5"))
        .expect("Failed to narrate d2g5");
    assert_eq!(
        narration.sentence,
        "White Queen at d2 captures a queen by moving 3 squares diagonally forwards and right"
    );
}

/// Test that a quiet bishop move falls back to the diagonal manner,
/// since bishops carry no plain move rows at all
#[test]
fn test_quiet_bishop_move_uses_fallback() {
    let narration = narrator()
        .narrate(AFTER_E4_E5, action("f1c4"))
        .expect("Failed to narrate f1c4");
    assert_eq!(narration.phrase, "White King's Bishop from f1 to c4");
    assert_eq!(
        narration.sentence,
        "White Bishop at f1 moves 3 squares diagonally forwards and left"
    );
}

/// Test that castling, encoded as the king's two-square step, narrates as
/// a plain king move
#[test]
fn test_castling_reads_as_a_king_move() {
    let fen = "r1bqk1nr/pppp1ppp/2n5/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";
    let narration = narrator()
        .narrate(fen, action("e1g1"))
        .expect("Failed to narrate e1g1");
    assert_eq!(narration.phrase, "White King from e1 to g1");
    assert_eq!(narration.sentence, "White King at e1 moves 2 squares right");
}

/// Test that straight promotions keep the phrase form for both outputs
#[test]
fn test_straight_promotion() {
    let narrator = narrator();

    let queens_pawn = narrator
        .narrate("k7/3P4/8/8/8/8/8/4K3 w - - 0 1", action("d7d8q"))
        .expect("Failed to narrate d7d8q");
    assert_eq!(
        queens_pawn.sentence,
        "White Queen's Pawn at d7 promoted to a queen"
    );
    assert_eq!(queens_pawn.phrase, queens_pawn.sentence);
    assert!(queens_pawn.is_promotion());
    assert_eq!(queens_pawn.promotion, Some(PieceKind::Queen));

    let kings_pawn = narrator
        .narrate("k7/4P3/8/8/8/8/8/4K3 w - - 0 1", action("e7e8q"))
        .expect("Failed to narrate e7e8q");
    assert_eq!(
        kings_pawn.sentence,
        "White King's Pawn at e7 promoted to a queen"
    );
}

/// Test that a capturing promotion names the landing square
#[test]
fn test_capture_promotion() {
    let narration = narrator()
        .narrate("3rn2k/3P4/8/8/8/8/8/4K3 w - - 0 1", action("d7e8n"))
        .expect("Failed to narrate d7e8n");
    assert_eq!(
        narration.sentence,
        "White Queen's Pawn at d7 captures a piece on e8 and is promoted to a knight"
    );
    assert_eq!(narration.phrase, narration.sentence);
    assert_eq!(narration.captured, Some(PieceKind::Knight));
    assert_eq!(narration.promotion, Some(PieceKind::Knight));
}

/// Test that a push to the back rank without a promotion letter narrates
/// as an ordinary move
#[test]
fn test_push_to_back_rank_without_choice() {
    let narration = narrator()
        .narrate("k7/3P4/8/8/8/8/8/4K3 w - - 0 1", action("d7d8"))
        .expect("Failed to narrate d7d8");
    assert_eq!(narration.sentence, "White Pawn at d7 moves 1 square forwards");
    assert_eq!(narration.phrase, "White Queen's Pawn from d7 to d8");
    assert!(!narration.is_promotion());
}

/// Test that Black promotions mirror White's
#[test]
fn test_black_promotion() {
    let narration = narrator()
        .narrate("4k3/8/8/8/8/8/3p4/6K1 b - - 0 1", action("d2d1q"))
        .expect("Failed to narrate d2d1q");
    assert_eq!(
        narration.sentence,
        "Black Queen's Pawn at d2 promoted to a queen"
    );
}

/// Test that an en passant capture still reads as a capture even though
/// the end square is empty
#[test]
fn test_en_passant_reads_as_a_capture() {
    let fen = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3";
    let narration = narrator()
        .narrate(fen, action("e5d6"))
        .expect("Failed to narrate e5d6");
    assert_eq!(
        narration.sentence,
        "White Pawn at e5 captures a piece by moving 1 square diagonally forwards and left"
    );
    assert_eq!(narration.captured, None, "d6 itself is empty");
}

/// Test error handling for every rejected input
#[test]
fn test_error_handling() {
    use chesstolang::Error;

    let narrator = narrator();

    // A move starting on an empty square is a board mismatch, not a guess.
    let err = narrator
        .narrate(STARTPOS, action("e3e4"))
        .expect_err("Should reject a move starting on an empty square");
    assert!(matches!(err, Error::EmptyStartSquare { .. }));
    assert!(
        err.to_string().contains("e3"),
        "Error should name the empty square: {}",
        err
    );

    // A move that goes nowhere has no direction.
    let err = narrator
        .narrate(STARTPOS, action("e2e2"))
        .expect_err("Should reject a null move");
    assert!(matches!(err, Error::NullMove(_)));

    // Garbage positions are rejected before any narration happens.
    let err = narrator
        .narrate("not a position at all", action("e2e4"))
        .expect_err("Should reject an unparseable FEN");
    assert!(matches!(err, Error::InvalidPosition(_)));

    // Garbage move codes never reach the narrator.
    assert!(CoordMove::parse("e2").is_err(), "Too short to name two squares");
    assert!(CoordMove::parse("e2e9").is_err(), "Rank 9 is off the board");
    assert!(CoordMove::parse("e7e8x").is_err(), "x is not a promotion piece");
}

/// Test that narration is deterministic across narrator instances
#[test]
fn test_narration_is_deterministic() {
    let first = narrator()
        .narrate(STARTPOS, action("e2e4"))
        .expect("Failed to narrate e2e4");
    let second = narrator()
        .narrate(STARTPOS, action("e2e4"))
        .expect("Failed to narrate e2e4");
    assert_eq!(first, second, "Fresh narrators should agree word for word");

    let narrator = narrator();
    let once = narrator
        .narrate(AFTER_E4_D5, action("e4d5"))
        .expect("Failed to narrate e4d5");
    let twice = narrator
        .narrate(AFTER_E4_D5, action("e4d5"))
        .expect("Failed to narrate e4d5");
    assert_eq!(once, twice, "Repeated narration should agree word for word");
}

/// Test that repeated requests for one position share a cached narration
#[test]
fn test_positions_are_cached() {
    use std::sync::Arc;

    let narrator = narrator();
    narrator
        .narrate(STARTPOS, action("e2e4"))
        .expect("Failed to narrate e2e4");
    narrator
        .narrate(STARTPOS, action("g1f3"))
        .expect("Failed to narrate g1f3");
    assert_eq!(
        narrator.board().cached_positions(),
        1,
        "Both moves were played from the same position"
    );

    let first = narrator
        .board()
        .narrate(STARTPOS)
        .expect("Failed to narrate the starting position");
    let second = narrator
        .board()
        .narrate(STARTPOS)
        .expect("Failed to narrate the starting position");
    assert!(
        Arc::ptr_eq(&first, &second),
        "Cached narrations should be shared, not copied"
    );
}
