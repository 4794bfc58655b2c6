use super::super::attack_tables::king_attacks;
use super::super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// Normal king steps, then castling (kingside before queenside).
    pub(super) fn generate_king_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        let targets = king_attacks(from) & !self.occupied_by(color);
        self.push_targets(from, targets, moves);

        let rank = color.back_rank();
        let home = Square::from_index_unchecked(rank * 8 + 4);
        if from != home || self.castling_rights.is_empty() {
            return;
        }
        let enemy = color.opponent();
        if self.is_square_attacked(home, enemy) {
            return;
        }

        let on_rank = |file: usize| Square::from_index_unchecked(rank * 8 + file);

        // empty files, then files the king crosses or lands on
        if self.can_castle(color, true, &[5, 6], &[5, 6]) {
            moves.push(Move::castle_kingside(from, on_rank(6)));
        }
        if self.can_castle(color, false, &[1, 2, 3], &[3, 2]) {
            moves.push(Move::castle_queenside(from, on_rank(2)));
        }
    }

    fn can_castle(&self, color: Color, kingside: bool, empty: &[usize], safe: &[usize]) -> bool {
        if !self.castling_rights.has(color, kingside) {
            return false;
        }
        let rank = color.back_rank();
        let on_rank = |file: usize| Square::from_index_unchecked(rank * 8 + file);
        let rook_home = on_rank(if kingside { 7 } else { 0 });

        self.piece_at(rook_home) == Some((color, Piece::Rook))
            && empty.iter().all(|&file| self.is_empty(on_rank(file)))
            && safe
                .iter()
                .all(|&file| !self.is_square_attacked(on_rank(file), color.opponent()))
    }
}
