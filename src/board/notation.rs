//! Coordinate move notation and lookup of legal moves by coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::{promotion_from_char, MoveError, MoveParseError};
use super::{Board, Move, Piece, Square};

/// A request to move the piece on `from` to `to`, as a UI would phrase it.
///
/// `promotion` only matters when a pawn reaches the last rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl MoveRequest {
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        MoveRequest {
            from,
            to,
            promotion: None,
        }
    }

    #[must_use]
    pub const fn with_promotion(mut self, piece: Piece) -> Self {
        self.promotion = Some(piece);
        self
    }
}

impl From<Move> for MoveRequest {
    fn from(mv: Move) -> Self {
        MoveRequest {
            from: mv.from(),
            to: mv.to(),
            promotion: mv.promotion(),
        }
    }
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for MoveRequest {
    type Err = MoveParseError;

    /// Parse coordinate notation such as `e2e4` or `e7e8q`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() < 4 || chars.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }

        let square = |s: &[char]| -> Result<Square, MoveParseError> {
            s.iter()
                .collect::<String>()
                .parse()
                .map_err(|_| MoveParseError::InvalidSquare {
                    notation: text.to_string(),
                })
        };
        let from = square(&chars[0..2])?;
        let to = square(&chars[2..4])?;
        let promotion = chars.get(4).map(|&c| promotion_from_char(c)).transpose()?;

        Ok(MoveRequest {
            from,
            to,
            promotion,
        })
    }
}

impl Board {
    /// Locate the legal move matching a coordinate request.
    ///
    /// When the request omits the promotion piece and several promotions
    /// share the same squares, the request is ambiguous.
    pub fn find_move(&self, request: MoveRequest) -> Result<Move, MoveError> {
        let legal = self.generate_moves();
        let mut candidates = legal
            .iter()
            .filter(|mv| mv.from() == request.from && mv.to() == request.to);

        match request.promotion {
            Some(piece) => candidates.find(|mv| mv.promotion() == Some(piece)).copied(),
            None => {
                let first = candidates.next().copied();
                if first.is_some() && candidates.next().is_some() {
                    return Err(MoveError::Ambiguous {
                        from: request.from,
                        to: request.to,
                    });
                }
                first
            }
        }
        .ok_or_else(|| MoveError::Illegal {
            notation: request.to_string(),
        })
    }

    /// Parse coordinate text and apply the matching legal move in place.
    pub fn make_move_uci(&mut self, text: &str) -> Result<Move, crate::Error> {
        let request: MoveRequest = text.parse()?;
        let mv = self.find_move(request)?;
        self.make_move(mv)?;
        Ok(mv)
    }
}
