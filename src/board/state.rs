use std::fmt;

use crate::zobrist::ZOBRIST;

use super::error::FenError;
use super::{Bitboard, CastlingRights, Color, Move, Piece, Square};

/// Undo token returned by [`Board::make_move`].
///
/// Holds whatever the move destroyed; pass it back to
/// [`Board::unmake_move`] together with the same move.
#[derive(Clone, Debug)]
pub struct UnmakeInfo {
    pub(crate) captured: Option<(Color, Piece)>,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
    pub(crate) previous_hash: u64,
}

/// A complete chess position: placement, side to move, castling rights,
/// en passant target and the two move counters.
///
/// Piece placement is kept twice, as bitboards for attack queries and as a
/// 64-entry mailbox for occupant lookups; both always agree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
    pub(crate) squares: [Option<(Color, Piece)>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) hash: u64, // Zobrist hash
}

pub(crate) const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl Board {
    /// The standard initial position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            for (color, home, pawns) in [(Color::White, 0, 1), (Color::Black, 7, 6)] {
                board.put(Square::from_index_unchecked(home * 8 + file), color, *piece);
                board.put(Square::from_index_unchecked(pawns * 8 + file), color, Piece::Pawn);
            }
        }

        board.castling_rights = CastlingRights::all();
        board.hash = board.compute_hash();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            squares: [None; 64],
            side_to_move: Color::White,
            en_passant_target: None,
            castling_rights: CastlingRights::none(),
            halfmove_clock: 0,
            fullmove_number: 1,
            hash: 0,
        }
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Zobrist hash of placement, side to move, castling and en passant.
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Occupant of a square, `None` when empty.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()]
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Bitboard of one color's pieces of one kind.
    #[inline]
    #[must_use]
    pub fn pieces_of(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    #[inline]
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    /// Square of `color`'s king. A validated board always has one.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color, Piece::King).lsb()
    }

    /// Place a piece on an empty square without touching the hash.
    pub(crate) fn put(&mut self, sq: Square, color: Color, piece: Piece) {
        let (c_idx, p_idx) = (color.index(), piece.index());
        self.pieces[c_idx][p_idx].set(sq);
        self.occupied[c_idx].set(sq);
        self.all_occupied.set(sq);
        self.squares[sq.index()] = Some((color, piece));
    }

    /// Remove whatever stands on `sq` without touching the hash.
    pub(crate) fn take(&mut self, sq: Square) -> Option<(Color, Piece)> {
        let occupant = self.squares[sq.index()].take()?;
        let (color, piece) = occupant;
        self.pieces[color.index()][piece.index()].clear(sq);
        self.occupied[color.index()].clear(sq);
        self.all_occupied.clear(sq);
        Some(occupant)
    }

    /// Place a piece and fold it into the hash.
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.put(sq, color, piece);
        self.hash ^= ZOBRIST.piece(color, piece, sq);
    }

    /// Remove a piece and fold it out of the hash.
    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<(Color, Piece)> {
        let (color, piece) = self.take(sq)?;
        self.hash ^= ZOBRIST.piece(color, piece, sq);
        Some((color, piece))
    }

    /// Recompute the Zobrist hash from scratch.
    #[must_use]
    pub fn compute_hash(&self) -> u64 {
        let mut hash = 0;
        for sq in Square::all() {
            if let Some((color, piece)) = self.piece_at(sq) {
                hash ^= ZOBRIST.piece(color, piece, sq);
            }
        }
        if self.side_to_move == Color::Black {
            hash ^= ZOBRIST.side();
        }
        hash ^= ZOBRIST.castling(self.castling_rights);
        if let Some(ep) = self.en_passant_target {
            hash ^= ZOBRIST.en_passant(ep);
        }
        hash
    }

    /// Check the position invariants shared by FEN parsing and the builder.
    pub(crate) fn validate(&self) -> Result<(), FenError> {
        for color in Color::BOTH {
            let count = self.pieces_of(color, Piece::King).popcount();
            if count != 1 {
                return Err(FenError::KingCount { color, count });
            }
        }

        for color in Color::BOTH {
            if !self.has_possible_material(color) {
                return Err(FenError::ImpossibleMaterial { color });
            }
        }

        let pawns =
            self.pieces_of(Color::White, Piece::Pawn) | self.pieces_of(Color::Black, Piece::Pawn);
        if let Some(square) = (pawns & (Bitboard::RANK_1 | Bitboard::RANK_8)).lsb() {
            return Err(FenError::PawnOnBackRank { square });
        }

        for (letter, color, kingside) in CastlingRights::FEN_ORDER {
            if !self.castling_rights.has(color, kingside) {
                continue;
            }
            let rank = color.back_rank();
            let rook_file = if kingside { 7 } else { 0 };
            let king_home = Square::from_index_unchecked(rank * 8 + 4);
            let rook_home = Square::from_index_unchecked(rank * 8 + rook_file);
            if self.piece_at(king_home) != Some((color, Piece::King))
                || self.piece_at(rook_home) != Some((color, Piece::Rook))
            {
                return Err(FenError::CastlingWithoutPieces { right: letter });
            }
        }

        let waiting = self.side_to_move.opponent();
        if self.is_in_check(waiting) {
            return Err(FenError::OpponentInCheck { color: waiting });
        }

        Ok(())
    }

    /// Every piece beyond the initial set must come from a missing pawn.
    fn has_possible_material(&self, color: Color) -> bool {
        let count = |piece| self.pieces_of(color, piece).popcount();
        let pawns = count(Piece::Pawn);
        let promoted = count(Piece::Knight).saturating_sub(2)
            + count(Piece::Bishop).saturating_sub(2)
            + count(Piece::Rook).saturating_sub(2)
            + count(Piece::Queen).saturating_sub(1);
        pawns + promoted <= 8
    }

    /// The target must be the square just skipped by the opponent's double
    /// push: empty, on the right rank, with that pawn right in front of it.
    pub(crate) fn is_plausible_en_passant(&self, target: Square) -> bool {
        let mover = self.side_to_move;
        let expected_rank = if mover == Color::White { 5 } else { 2 };
        target.rank() == expected_rank
            && self.is_empty(target)
            && self.piece_at(Board::en_passant_victim(mover, target))
                == Some((mover.opponent(), Piece::Pawn))
    }

    /// Square of the pawn removed by an en passant capture landing on `to`.
    pub(crate) fn en_passant_victim(mover: Color, to: Square) -> Square {
        let rank = (to.rank() as isize - mover.pawn_direction()) as usize;
        Square::from_index_unchecked(rank * 8 + to.file())
    }

    /// Rook origin and destination for a castling move.
    pub(crate) fn castling_rook_squares(mv: Move) -> (Square, Square) {
        let rank = mv.to().rank();
        let (from_file, to_file) = if mv.to().file() == 6 { (7, 5) } else { (0, 3) };
        (
            Square::from_index_unchecked(rank * 8 + from_file),
            Square::from_index_unchecked(rank * 8 + to_file),
        )
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    /// ASCII diagram from White's side with the FEN underneath
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                let sq = Square::from_index_unchecked(rank * 8 + file);
                let ch = self
                    .piece_at(sq)
                    .map_or(' ', |(color, piece)| piece.to_fen_char(color));
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        write!(f, "{}", self.to_fen())
    }
}
