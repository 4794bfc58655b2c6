//! Error types for chess board operations.

use std::fmt;

use super::{Color, Piece, Square};

/// The FEN field an error was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FenField {
    Placement,
    SideToMove,
    Castling,
    EnPassant,
    HalfmoveClock,
    FullmoveNumber,
}

impl fmt::Display for FenField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FenField::Placement => "piece placement",
            FenField::SideToMove => "side to move",
            FenField::Castling => "castling availability",
            FenField::EnPassant => "en passant target",
            FenField::HalfmoveClock => "halfmove clock",
            FenField::FullmoveNumber => "fullmove number",
        };
        f.write_str(name)
    }
}

/// Error type for FEN parsing failures and invalid positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string does not have exactly six fields
    WrongFieldCount { found: usize },
    /// Placement field does not have exactly eight ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// A rank does not describe exactly eight files
    BadRankWidth { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Castling field is not `-` or a canonical subset of `KQkq`
    InvalidCastling { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove clock is not a non-negative integer
    InvalidHalfmoveClock { found: String },
    /// Fullmove number is not a positive integer
    InvalidFullmoveNumber { found: String },
    /// A side does not have exactly one king
    KingCount { color: Color, count: u32 },
    /// More pawns, or more promoted pieces, than a side can ever have
    ImpossibleMaterial { color: Color },
    /// A pawn stands on rank 1 or rank 8
    PawnOnBackRank { square: Square },
    /// A castling right is set but its king or rook is not at home
    CastlingWithoutPieces { right: char },
    /// The side that just moved has been left in check
    OpponentInCheck { color: Color },
}

impl FenError {
    /// The FEN field this error refers to, if it is tied to one field
    #[must_use]
    pub fn field(&self) -> Option<FenField> {
        match self {
            FenError::WrongFieldCount { .. } => None,
            FenError::WrongRankCount { .. }
            | FenError::InvalidPiece { .. }
            | FenError::BadRankWidth { .. } => Some(FenField::Placement),
            FenError::InvalidSideToMove { .. } => Some(FenField::SideToMove),
            FenError::InvalidCastling { .. } | FenError::CastlingWithoutPieces { .. } => {
                Some(FenField::Castling)
            }
            FenError::InvalidEnPassant { .. } => Some(FenField::EnPassant),
            FenError::InvalidHalfmoveClock { .. } => Some(FenField::HalfmoveClock),
            FenError::InvalidFullmoveNumber { .. } => Some(FenField::FullmoveNumber),
            FenError::KingCount { .. }
            | FenError::ImpossibleMaterial { .. }
            | FenError::PawnOnBackRank { .. }
            | FenError::OpponentInCheck { .. } => None,
        }
    }
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have exactly 6 fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::BadRankWidth { rank, files } => {
                write!(f, "Rank {} describes {files} files, expected 8", 8 - rank)
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { found } => {
                write!(f, "Invalid castling field '{found}'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidHalfmoveClock { found } => {
                write!(f, "Invalid halfmove clock '{found}'")
            }
            FenError::InvalidFullmoveNumber { found } => {
                write!(f, "Invalid fullmove number '{found}'")
            }
            FenError::KingCount { color, count } => {
                write!(f, "{color} must have exactly one king, found {count}")
            }
            FenError::ImpossibleMaterial { color } => {
                write!(f, "{color} has more material than eight pawns can promote to")
            }
            FenError::PawnOnBackRank { square } => {
                write!(f, "Pawn on back rank square {square}")
            }
            FenError::CastlingWithoutPieces { right } => {
                write!(f, "Castling right '{right}' without king and rook on home squares")
            }
            FenError::OpponentInCheck { color } => {
                write!(f, "{color} is in check but it is not {color}'s move")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for coordinate move text (`e2e4`, `e7e8q`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for rejected moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Move is not legal in the current position
    Illegal { notation: String },
    /// Several legal moves share from/to and no promotion piece was given
    Ambiguous { from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Illegal { notation } => write!(f, "Illegal move '{notation}'"),
            MoveError::Ambiguous { from, to } => {
                write!(f, "Move {from}{to} is ambiguous without a promotion piece")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Any error the rules core can report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Fen(FenError),
    MoveParse(MoveParseError),
    Move(MoveError),
    Square(SquareError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Fen(e) => write!(f, "{e}"),
            Error::MoveParse(e) => write!(f, "{e}"),
            Error::Move(e) => write!(f, "{e}"),
            Error::Square(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Fen(e) => Some(e),
            Error::MoveParse(e) => Some(e),
            Error::Move(e) => Some(e),
            Error::Square(e) => Some(e),
        }
    }
}

impl From<FenError> for Error {
    fn from(e: FenError) -> Self {
        Error::Fen(e)
    }
}

impl From<MoveParseError> for Error {
    fn from(e: MoveParseError) -> Self {
        Error::MoveParse(e)
    }
}

impl From<MoveError> for Error {
    fn from(e: MoveError) -> Self {
        Error::Move(e)
    }
}

impl From<SquareError> for Error {
    fn from(e: SquareError) -> Self {
        Error::Square(e)
    }
}

/// Promotion letters accepted in coordinate text
pub(crate) fn promotion_from_char(c: char) -> Result<Piece, MoveParseError> {
    match Piece::from_char(c) {
        Some(piece) if piece.is_promotion_target() => Ok(piece),
        _ => Err(MoveParseError::InvalidPromotion { char: c }),
    }
}
