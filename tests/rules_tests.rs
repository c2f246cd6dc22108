//! Tests for win detection and the game driver

use hexapawn::{
    Board, DecisionEngine, Error, Game, Side, Signature, VictoryReason, evaluate,
    hexapawn::classify, types::Relocation,
};

fn signature(text: &str) -> Signature {
    text.parse().expect("test signature should parse")
}

#[test]
fn test_h_eliminated_means_a_wins() {
    let board = signature(".../.../A.A");
    assert_eq!(evaluate(&board, Side::A), Some(Side::A));
    assert_eq!(evaluate(&board, Side::H), Some(Side::A));
}

#[test]
fn test_a_eliminated_means_h_wins() {
    let board = signature("H../.H./...");
    assert_eq!(evaluate(&board, Side::A), Some(Side::H));
}

#[test]
fn test_h_on_row_two_wins_with_a_remaining() {
    let board = signature(".../A.A/HHH");
    assert_eq!(
        classify(&board, Side::H).map(|victory| (victory.winner, victory.reason)),
        Some((Side::H, VictoryReason::Breakthrough))
    );
}

#[test]
fn test_a_on_row_zero_wins() {
    let board = signature("A.H/.../...");
    assert_eq!(evaluate(&board, Side::A), Some(Side::A));
}

#[test]
fn test_blocked_h_hands_the_game_to_last_mover() {
    // Every H pawn faces an A pawn and has nothing to capture.
    let blocked = signature("H../A../...");
    assert_eq!(evaluate(&blocked, Side::A), Some(Side::A));
    assert_eq!(evaluate(&blocked, Side::H), Some(Side::H));
    assert_eq!(
        classify(&blocked, Side::A).map(|victory| victory.reason),
        Some(VictoryReason::Stalemate)
    );
}

#[test]
fn test_opening_and_midgame_are_undetermined() {
    assert_eq!(evaluate(&Board::new().signature(), Side::A), None);
    assert_eq!(evaluate(&signature(".HH/H../AAA"), Side::H), None);
    // H can still capture diagonally.
    assert_eq!(evaluate(&signature("H../AA./..."), Side::A), None);
}

#[test]
fn test_game_rejects_illegal_and_out_of_turn_moves() {
    let mut game = Game::new();
    let mut engine = DecisionEngine::new(Some(0));

    assert!(matches!(
        game.play_engine(&mut engine),
        Err(Error::WrongTurn { expected: Side::H, got: Side::A })
    ));
    assert!(matches!(
        game.play(Relocation::from_raw(0, 4)),
        Err(Error::IllegalMove { .. })
    ));
    assert_eq!(game.to_move(), Side::H);
    assert!(game.history().is_empty());
}

#[test]
fn test_full_game_reaches_a_verdict() {
    let mut engine = DecisionEngine::new(Some(6));
    for _ in 0..25 {
        engine.reset();
        let mut game = Game::new();
        while !game.is_over() {
            match game.to_move() {
                Side::H => {
                    let moves = game.legal_moves();
                    game.play(moves[0]).unwrap();
                }
                Side::A => {
                    game.play_engine(&mut engine).unwrap();
                }
            }
        }

        let winner = game.winner().expect("finished game has a winner");
        let last_mover = game.history().last().unwrap().side;
        assert_eq!(evaluate(&game.board().signature(), last_mover), Some(winner));
        assert!(game.history().len() <= 7);
        assert!(matches!(
            game.play(Relocation::from_raw(0, 3)),
            Err(Error::GameOver)
        ));
        if winner == Side::H {
            engine.record_loss();
        }
    }
}
