use chess_core::board::{MoveKind, START_FEN};
use chess_core::{Color, Error, Game, GameStatus, MoveError, Piece, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn play_all(game: &mut Game, moves: &[&str]) {
    for mv in moves {
        game.play_uci(mv)
            .unwrap_or_else(|err| panic!("{mv} in {}: {err}", game.fen()));
    }
}

#[test]
fn opening_sequence_updates_state() {
    let mut game = Game::new();
    let e4 = game.play_uci("e2e4").unwrap();
    assert_eq!(e4.kind(), MoveKind::DoublePawnPush);
    assert_eq!(
        game.fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );

    play_all(&mut game, &["c7c5", "g1f3"]);
    assert_eq!(
        game.fen(),
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
    );
}

#[test]
fn castling_through_game_surface() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"],
    );
    let castle = game.find_move(Square::E1, Square::G1, None).unwrap();
    assert_eq!(castle.kind(), MoveKind::CastleKingside);
    game.play(castle).unwrap();
    assert_eq!(game.piece_at(Square::F1), Some((Color::White, Piece::Rook)));
    assert_eq!(game.piece_at(Square::G1), Some((Color::White, Piece::King)));
    assert!(game.fen().contains(" b kq "));
}

#[test]
fn en_passant_through_game_surface() {
    let mut game = Game::new();
    play_all(&mut game, &["e2e4", "a7a6", "e4e5", "f7f5"]);
    let ep = game.play_coords(sq("e5"), sq("f6"), None).unwrap();
    assert_eq!(ep.kind(), MoveKind::EnPassant);
    assert!(!game.is_occupied(sq("f5")));
    assert_eq!(game.piece_at(sq("f6")), Some((Color::White, Piece::Pawn)));
}

#[test]
fn scholars_mate_is_checkmate() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );
    assert!(game.is_checkmate());
    assert_eq!(
        game.status(),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
    assert!(game.legal_moves().is_empty());
    assert!(game.play_uci("e8f7").is_err());
}

#[test]
fn mate_in_one_positions() {
    let cases = [
        ("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", "a1a8"),
        ("k7/8/1K6/8/8/8/7Q/8 w - - 0 1", "h2h8"),
        ("r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5Q2/PPPP1PPP/RNB1K1NR w KQkq - 4 4", "f3f7"),
    ];
    for (fen, mv) in cases {
        let mut game = Game::from_fen(fen).unwrap();
        game.play_uci(mv).unwrap();
        assert!(game.is_checkmate(), "{fen} {mv}");
    }
}

#[test]
fn corner_position_is_playable() {
    let game = Game::from_fen("8/8/8/8/8/k1B5/BN6/K7 w - - 0 1").unwrap();
    assert_eq!(game.side_to_move(), Color::White);
    assert_eq!(game.status(), GameStatus::Ongoing);
    assert!(!game.in_check());
}

#[test]
fn rejected_moves_do_not_change_game() {
    let mut game = Game::new();
    play_all(&mut game, &["d2d4"]);
    let before = game.fen();

    assert!(matches!(
        game.play_uci("d4d5"),
        Err(Error::Move(MoveError::Illegal { .. }))
    ));
    assert!(matches!(game.play_uci("d7d9"), Err(Error::MoveParse(_))));
    assert!(matches!(game.play_uci("d7d5x"), Err(Error::MoveParse(_))));
    assert_eq!(game.fen(), before);
    assert_eq!(game.history().count(), 1);
}

#[test]
fn undo_walks_back_to_start() {
    let mut game = Game::new();
    let moves = ["e2e4", "e7e5", "g1f3", "b8c6", "f1b5", "a7a6", "e1g1"];
    play_all(&mut game, &moves);

    let history: Vec<String> = game.history().map(|m| m.to_string()).collect();
    assert_eq!(history, moves);

    while game.undo().is_some() {}
    assert_eq!(game.fen(), START_FEN);
}

#[test]
fn piece_queries_match_board() {
    let game = Game::new();
    for file in 0..8 {
        for rank in 0..8 {
            let sq = Square::new(file, rank).unwrap();
            assert_eq!(game.piece_at_coords(file, rank).unwrap(), game.piece_at(sq));
            assert_eq!(game.is_occupied(sq), !(2..6).contains(&rank));
        }
    }
}

#[test]
fn overloaded_position_is_rejected_up_front() {
    let fen = "QQQQQQQr/Q6Q/Q4Q1Q/Q6Q/Q6Q/QQ5Q/pp5Q/kbQQQQQK w - - 0 1";
    assert!(matches!(
        Game::from_fen(fen),
        Err(chess_core::FenError::ImpossibleMaterial {
            color: Color::White
        })
    ));

    let game = Game::from_fen("6nk/6pp/QQQQQ3/8/Q3Q3/2Q2Q2/1N3N2/KRB2BR1 w - - 0 1").unwrap();
    assert_eq!(game.status(), GameStatus::Ongoing);
    assert!(!game.legal_moves().is_empty());
}
