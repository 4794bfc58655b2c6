//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//! The result goes through the same validation as a parsed FEN.
//!
//! # Example
//! ```
//! use chess_core::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::E1, Color::White, Piece::King)
//!     .piece(Square::E8, Color::Black, Piece::King)
//!     .piece("a2".parse().unwrap(), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.to_fen(), "4k3/8/8/8/8/8/P7/4K3 w - - 0 1");
//! ```

use super::error::FenError;
use super::state::BACK_RANK;
use super::{Board, CastlingRights, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    squares: [Option<(Color, Piece)>; 64],
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            squares: [None; 64],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for (file, &piece) in BACK_RANK.iter().enumerate() {
            builder.squares[file] = Some((Color::White, piece));
            builder.squares[8 + file] = Some((Color::White, Piece::Pawn));
            builder.squares[48 + file] = Some((Color::Black, Piece::Pawn));
            builder.squares[56 + file] = Some((Color::Black, piece));
        }
        builder.castling_rights = CastlingRights::all();
        builder
    }

    /// Place a piece on the board, replacing any occupant.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.squares[square.index()] = Some((color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.squares[square.index()] = None;
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, false);
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Set the halfmove clock (for 50-move rule).
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Set the fullmove number. Zero is rejected by [`BoardBuilder::build`].
    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build and validate the board.
    pub fn build(self) -> Result<Board, FenError> {
        let mut board = Board::empty();
        for (idx, occupant) in self.squares.iter().enumerate() {
            if let Some((color, piece)) = *occupant {
                board.put(Square::from_index_unchecked(idx), color, piece);
            }
        }

        board.side_to_move = self.side_to_move;
        board.castling_rights = self.castling_rights;
        board.halfmove_clock = self.halfmove_clock;
        // FEN counts full moves from 1
        if self.fullmove_number == 0 {
            return Err(FenError::InvalidFullmoveNumber {
                found: "0".to_string(),
            });
        }
        board.fullmove_number = self.fullmove_number;

        if let Some(target) = self.en_passant_target {
            if !board.is_plausible_en_passant(target) {
                return Err(FenError::InvalidEnPassant {
                    found: target.to_string(),
                });
            }
            board.en_passant_target = Some(target);
        }

        board.hash = board.compute_hash();
        board.validate()?;
        Ok(board)
    }
}
