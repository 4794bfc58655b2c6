//! Property-based tests using proptest.

use crate::board::{Board, Move, UnmakeInfo};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=20usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves from the initial position.
fn random_walk(seed: u64, num_moves: usize) -> Board {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        let moves = board.generate_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
        board.make_move(mv).unwrap();
    }
    board
}

proptest! {
    /// Property: make_move followed by unmake_move restores board state exactly
    #[test]
    fn prop_make_unmake_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let initial = board.clone();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut history: Vec<(Move, UnmakeInfo)> = Vec::new();

        for _ in 0..num_moves {
            let moves = board.generate_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
            let info = board.make_move(mv).unwrap();
            history.push((mv, info));
        }

        while let Some((mv, info)) = history.pop() {
            board.unmake_move(mv, info);
        }

        prop_assert_eq!(board, initial);
    }

    /// Property: hash is always consistent with recomputed hash
    #[test]
    fn prop_hash_consistency(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = random_walk(seed, num_moves);
        prop_assert_eq!(board.hash(), board.compute_hash());
    }

    /// Property: FEN round-trip preserves position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = random_walk(seed, num_moves);
        let fen = board.to_fen();
        let restored = Board::try_from_fen(&fen).unwrap();

        prop_assert_eq!(restored.to_fen(), fen);
        prop_assert_eq!(&restored, &board);
    }

    /// Property: legal moves never leave the mover in check, and applying
    /// any of them succeeds
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in 0..15usize) {
        let board = random_walk(seed, num_moves);
        let mover = board.side_to_move();

        for mv in board.generate_moves() {
            let next = board.apply_move(mv);
            prop_assert!(next.is_ok(), "generated move {} was rejected", mv);
            let next = next.unwrap();
            prop_assert!(!next.is_in_check(mover), "legal move {} left king in check", mv);
            prop_assert_eq!(next.side_to_move(), mover.opponent());
        }
    }

    /// Property: packed move encoding survives the u16 round trip
    #[test]
    fn prop_move_packing(seed in seed_strategy(), num_moves in 0..15usize) {
        let board = random_walk(seed, num_moves);
        for mv in board.generate_moves() {
            prop_assert_eq!(Move::from_u16(mv.as_u16()), mv);
            prop_assert_eq!(board.find_move(mv.into()).unwrap(), mv);
        }
    }
}
