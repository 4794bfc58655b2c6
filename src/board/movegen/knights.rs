use super::super::attack_tables::knight_attacks;
use super::super::{Board, MoveList, Square};

impl Board {
    pub(super) fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        let targets = knight_attacks(from) & !self.occupied_by(self.side_to_move);
        self.push_targets(from, targets, moves);
    }
}
