//! Make/unmake move tests.

use crate::board::{Board, Color, Move, Piece, Square, UnmakeInfo};
use rand::prelude::*;

fn find_move(board: &Board, from: &str, to: &str, promotion: Option<Piece>) -> Move {
    let (from, to): (Square, Square) = (from.parse().unwrap(), to.parse().unwrap());
    for m in board.generate_moves().iter() {
        if m.from() == from && m.to() == to && m.promotion() == promotion {
            return *m;
        }
    }
    panic!("Expected move not found");
}

#[test]
fn test_en_passant_make_unmake() {
    let mut board =
        Board::try_from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3")
            .unwrap();
    let original = board.clone();
    let mv = find_move(&board, "e5", "f6", None);
    assert!(mv.is_en_passant());
    let info = board.make_move(mv).unwrap();
    assert!(board.is_empty("f5".parse().unwrap()));
    board.unmake_move(mv, info);
    assert_eq!(board, original);
}

#[test]
fn test_promotion_make_unmake() {
    let mut board = Board::try_from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    let original_hash = board.hash();
    let mv = find_move(&board, "a7", "a8", Some(Piece::Queen));
    let info = board.make_move(mv).unwrap();
    assert_eq!(
        board.piece_at("a8".parse().unwrap()),
        Some((Color::White, Piece::Queen))
    );
    board.unmake_move(mv, info);
    assert_eq!(board.hash(), original_hash);
    assert_eq!(
        board.piece_at("a7".parse().unwrap()),
        Some((Color::White, Piece::Pawn))
    );
    assert!(board.is_empty("a8".parse().unwrap()));
}

#[test]
fn test_castling_make_unmake_restores_rights() {
    let mut board = Board::try_from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 3 17").unwrap();
    let original = board.clone();
    let mv = find_move(&board, "e8", "c8", None);
    let info = board.make_move(mv).unwrap();
    assert_eq!(board.fullmove_number(), 18);
    assert_eq!(board.halfmove_clock(), 4);
    board.unmake_move(mv, info);
    assert_eq!(board, original);
    assert_eq!(board.to_fen(), "r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 3 17");
}

#[test]
fn test_legal_moves_stable_after_make_unmake() {
    let mut board = Board::new();
    let initial_moves = board.generate_moves();
    let mut initial_list: Vec<String> = initial_moves.iter().map(|m| m.to_string()).collect();
    initial_list.sort();

    for mv in initial_moves.iter() {
        let info = board.make_move(*mv).unwrap();
        board.unmake_move(*mv, info);
    }

    let after_moves = board.generate_moves();
    let mut after_list: Vec<String> = after_moves.iter().map(|m| m.to_string()).collect();
    after_list.sort();

    assert_eq!(initial_list, after_list);
}

#[test]
fn test_hash_matches_recompute_after_random_moves() {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let mut history: Vec<(Move, UnmakeInfo)> = Vec::new();

    for _ in 0..50 {
        let moves = board.generate_moves();
        if moves.is_empty() {
            break;
        }
        let idx = rng.gen_range(0..moves.len());
        let mv = moves.as_slice()[idx];
        let info = board.make_move(mv).unwrap();
        history.push((mv, info));

        assert_eq!(board.hash(), board.compute_hash());
    }

    while let Some((mv, info)) = history.pop() {
        board.unmake_move(mv, info);
        assert_eq!(board.hash(), board.compute_hash());
    }
}

#[test]
fn test_random_playout_round_trip_state() {
    let mut board = Board::new();
    let initial = board.clone();

    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut history: Vec<(Move, UnmakeInfo)> = Vec::new();

    for _ in 0..200 {
        let moves = board.generate_moves();
        if moves.is_empty() {
            break;
        }
        let idx = rng.gen_range(0..moves.len());
        let mv = moves.as_slice()[idx];
        let info = board.make_move(mv).unwrap();
        history.push((mv, info));
    }

    while let Some((mv, info)) = history.pop() {
        board.unmake_move(mv, info);
    }

    assert_eq!(board, initial);
}
