use super::super::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use super::super::{Board, MoveList, Piece, Square};

impl Board {
    /// Bishop, rook and queen moves: rays stop at the first blocker, which
    /// is capturable when it belongs to the opponent.
    pub(super) fn generate_sliding_moves(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        let occupied = self.all_occupied;
        let attacks = match piece {
            Piece::Bishop => bishop_attacks(from, occupied),
            Piece::Rook => rook_attacks(from, occupied),
            Piece::Queen => queen_attacks(from, occupied),
            _ => return,
        };
        let targets = attacks & !self.occupied_by(self.side_to_move);
        self.push_targets(from, targets, moves);
    }
}
