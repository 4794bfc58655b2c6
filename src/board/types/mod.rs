//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules core:
//! - `Piece` and `Color` - chess piece kinds and colors
//! - `Square` - compact board square representation (0-63)
//! - `Bitboard` - 64-bit board representation
//! - `Move`, `MoveKind` and `MoveList` - move representation
//! - `CastlingRights` - castling state

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::CastlingRights;
pub use moves::{Move, MoveKind, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
