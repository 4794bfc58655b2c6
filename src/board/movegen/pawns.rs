use super::super::attack_tables::pawn_attacks;
use super::super::types::PROMOTION_PIECES;
use super::super::{Board, Move, MoveList, Square};

impl Board {
    /// Pushes first (single, then double), then captures, then en passant.
    pub(super) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        if let Some(one) = from.offset(0, dir) {
            if self.is_empty(one) {
                if one.rank() == promotion_rank {
                    push_promotions(from, one, false, moves);
                } else {
                    moves.push(Move::quiet(from, one));
                    if from.rank() == color.pawn_start_rank() {
                        if let Some(two) = one.offset(0, dir) {
                            if self.is_empty(two) {
                                moves.push(Move::double_pawn_push(from, two));
                            }
                        }
                    }
                }
            }
        }

        let attacks = pawn_attacks(color, from);
        for to in (attacks & self.occupied_by(color.opponent())).iter() {
            if to.rank() == promotion_rank {
                push_promotions(from, to, true, moves);
            } else {
                moves.push(Move::capture(from, to));
            }
        }

        if let Some(target) = self.en_passant_target {
            if attacks.contains(target) {
                moves.push(Move::en_passant(from, target));
            }
        }
    }
}

fn push_promotions(from: Square, to: Square, capture: bool, moves: &mut MoveList) {
    for piece in PROMOTION_PIECES {
        let mv = if capture {
            Move::new_promotion_capture(from, to, piece)
        } else {
            Move::new_promotion(from, to, piece)
        };
        moves.push(mv);
    }
}
