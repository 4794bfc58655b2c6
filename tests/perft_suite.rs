use serde::Deserialize;

use chess_core::Board;

#[derive(Deserialize)]
struct PerftSet {
    positions: Vec<PerftPosition>,
}

#[derive(Deserialize)]
struct PerftPosition {
    name: String,
    fen: String,
    depths: Vec<(u32, u64)>,
}

fn load() -> PerftSet {
    let data = include_str!("data/perft.json");
    serde_json::from_str(data).expect("invalid perft.json")
}

#[test]
fn perft_suite() {
    for position in load().positions {
        let board = Board::try_from_fen(&position.fen)
            .unwrap_or_else(|err| panic!("{}: {err}", position.name));

        for (depth, expected) in position.depths {
            assert_eq!(
                board.perft(depth),
                expected,
                "perft failed for '{}' at depth {}",
                position.name,
                depth
            );
        }
    }
}

#[test]
fn perft_suite_fens_round_trip() {
    for position in load().positions {
        let board: Board = position.fen.parse().unwrap();
        assert_eq!(board.to_fen(), position.fen, "{}", position.name);
    }
}

#[test]
fn perft_divide_matches_children() {
    for position in load().positions {
        let board = Board::try_from_fen(&position.fen).unwrap();
        for (mv, nodes) in board.perft_divide(2) {
            let child = board.apply_move(mv).unwrap();
            assert_eq!(child.perft(1), nodes, "{} after {mv}", position.name);
        }
    }
}
