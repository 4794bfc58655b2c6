//! Perft node counting, the standard check on move generation.

use super::{Board, Move};

impl Board {
    /// Number of leaf nodes of the legal move tree `depth` plies deep.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        let mut scratch = self.clone();
        scratch.perft_inner(depth)
    }

    /// Perft split by root move, in generation order.
    #[must_use]
    pub fn perft_divide(&self, depth: u32) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        let mut scratch = self.clone();
        scratch
            .generate_moves()
            .into_iter()
            .map(|mv| {
                let info = scratch.play_unchecked(mv);
                let nodes = scratch.perft_inner(depth - 1);
                scratch.unmake_move(mv, info);
                (mv, nodes)
            })
            .collect()
    }

    fn perft_inner(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let info = self.play_unchecked(mv);
            nodes += self.perft_inner(depth - 1);
            self.unmake_move(mv, info);
        }
        nodes
    }
}
