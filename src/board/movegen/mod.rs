//! Legal move generation and attack queries.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks};
use super::{Bitboard, Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// Pseudo-legal moves for the side to move, piece kind by piece kind
    /// (pawns first, king last), squares ascending within each kind.
    fn generate_pseudo_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.side_to_move;

        for piece in Piece::ALL {
            for from in self.pieces_of(color, piece).iter() {
                match piece {
                    Piece::Pawn => self.generate_pawn_moves(from, &mut moves),
                    Piece::Knight => self.generate_knight_moves(from, &mut moves),
                    Piece::Bishop | Piece::Rook | Piece::Queen => {
                        self.generate_sliding_moves(from, piece, &mut moves);
                    }
                    Piece::King => self.generate_king_moves(from, &mut moves),
                }
            }
        }
        moves
    }

    /// Emit a quiet move or a capture for every target square.
    fn push_targets(&self, from: Square, targets: Bitboard, moves: &mut MoveList) {
        for to in targets.iter() {
            if self.is_empty(to) {
                moves.push(Move::quiet(from, to));
            } else {
                moves.push(Move::capture(from, to));
            }
        }
    }

    /// All legal moves for the side to move.
    ///
    /// Each pseudo-legal move is tried on a scratch copy and kept only if it
    /// does not leave the mover's king attacked.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let mover = self.side_to_move;
        let mut legal = MoveList::new();
        for mv in self.generate_pseudo_moves() {
            let mut scratch = self.clone();
            scratch.play_unchecked(mv);
            if !scratch.is_in_check(mover) {
                legal.push(mv);
            }
        }
        legal
    }

    /// Legal moves of the piece standing on `from`.
    #[must_use]
    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        self.generate_moves()
            .into_iter()
            .filter(|mv| mv.from() == from)
            .collect()
    }

    /// Returns true if any piece of color `by` attacks `sq`.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        let occupied = self.all_occupied;
        let queens = self.pieces_of(by, Piece::Queen);
        let diagonal = self.pieces_of(by, Piece::Bishop) | queens;
        let orthogonal = self.pieces_of(by, Piece::Rook) | queens;

        // A pawn of `by` attacks sq exactly when a pawn of the other color
        // standing on sq would attack it back.
        !(pawn_attacks(by.opponent(), sq) & self.pieces_of(by, Piece::Pawn)).is_empty()
            || !(knight_attacks(sq) & self.pieces_of(by, Piece::Knight)).is_empty()
            || !(king_attacks(sq) & self.pieces_of(by, Piece::King)).is_empty()
            || !(bishop_attacks(sq, occupied) & diagonal).is_empty()
            || !(rook_attacks(sq, occupied) & orthogonal).is_empty()
    }

    /// Returns true if `color`'s king is attacked.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }

    /// Returns true if the side to move is in check.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.is_in_check(self.side_to_move)
    }

    /// The side to move is in check and has no legal move.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.in_check() && self.generate_moves().is_empty()
    }

    /// The side to move is not in check and has no legal move.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && self.generate_moves().is_empty()
    }
}
