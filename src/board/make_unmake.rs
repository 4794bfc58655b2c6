use crate::zobrist::ZOBRIST;

use super::error::MoveError;
use super::{Board, Color, Move, Piece, Square, UnmakeInfo};

impl Board {
    /// Apply a move without checking legality, updating the hash
    /// incrementally. The move must at least be pseudo-legal.
    pub(crate) fn play_unchecked(&mut self, mv: Move) -> UnmakeInfo {
        let color = self.side_to_move;
        let (from, to) = (mv.from(), mv.to());

        let previous_en_passant_target = self.en_passant_target;
        let previous_castling_rights = self.castling_rights;
        let previous_halfmove_clock = self.halfmove_clock;
        let previous_fullmove_number = self.fullmove_number;
        let previous_hash = self.hash;

        self.hash ^= ZOBRIST.side();
        if let Some(old_ep) = self.en_passant_target.take() {
            self.hash ^= ZOBRIST.en_passant(old_ep);
        }
        self.hash ^= ZOBRIST.castling(self.castling_rights);

        let captured = if mv.is_en_passant() {
            self.remove_piece(Board::en_passant_victim(color, to))
        } else {
            self.remove_piece(to)
        };

        let moved = self.remove_piece(from).map(|(_, piece)| piece);
        if let Some(piece) = mv.promotion().or(moved) {
            self.set_piece(to, color, piece);
        }

        if mv.is_castling() {
            let (rook_from, rook_to) = Board::castling_rook_squares(mv);
            if let Some((rook_color, rook)) = self.remove_piece(rook_from) {
                self.set_piece(rook_to, rook_color, rook);
            }
        }

        if mv.is_double_pawn_push() {
            let target = Square::from_index_unchecked((from.index() + to.index()) / 2);
            self.en_passant_target = Some(target);
            self.hash ^= ZOBRIST.en_passant(target);
        }

        // a king or rook leaving home, or a rook captured at home
        self.castling_rights.revoke_for_square(from);
        self.castling_rights.revoke_for_square(to);
        self.hash ^= ZOBRIST.castling(self.castling_rights);

        if moved == Some(Piece::Pawn) || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = color.opponent();

        UnmakeInfo {
            captured,
            previous_en_passant_target,
            previous_castling_rights,
            previous_halfmove_clock,
            previous_fullmove_number,
            previous_hash,
        }
    }

    /// Play a legal move in place.
    ///
    /// Returns the undo token for [`Board::unmake_move`]. A move that is not
    /// in [`Board::generate_moves`] is rejected and the board is left as is.
    pub fn make_move(&mut self, mv: Move) -> Result<UnmakeInfo, MoveError> {
        if !self.generate_moves().contains(mv) {
            log::debug!("rejected illegal move {mv} in {}", self.to_fen());
            return Err(MoveError::Illegal {
                notation: mv.to_string(),
            });
        }
        log::trace!("playing {mv}");
        Ok(self.play_unchecked(mv))
    }

    /// The position after a legal move, leaving `self` untouched.
    pub fn apply_move(&self, mv: Move) -> Result<Board, MoveError> {
        let mut next = self.clone();
        next.make_move(mv)?;
        Ok(next)
    }

    /// Take back `mv`, which must be the last move made on this board,
    /// using the token that [`Board::make_move`] returned for it.
    pub fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        self.side_to_move = self.side_to_move.opponent();
        let color = self.side_to_move;
        let (from, to) = (mv.from(), mv.to());

        if let Some((_, piece)) = self.take(to) {
            let original = if mv.is_promotion() { Piece::Pawn } else { piece };
            self.put(from, color, original);
        }

        if mv.is_castling() {
            let (rook_from, rook_to) = Board::castling_rook_squares(mv);
            if let Some((rook_color, rook)) = self.take(rook_to) {
                self.put(rook_from, rook_color, rook);
            }
        }

        if let Some((captured_color, captured)) = info.captured {
            let square = if mv.is_en_passant() {
                Board::en_passant_victim(color, to)
            } else {
                to
            };
            self.put(square, captured_color, captured);
        }

        self.en_passant_target = info.previous_en_passant_target;
        self.castling_rights = info.previous_castling_rights;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;
        self.hash = info.previous_hash;
    }
}
