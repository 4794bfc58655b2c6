//! Chess board representation and rules.
//!
//! Uses bitboards for attack queries and a mailbox for occupant lookups.
//! Supports full chess rules including castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use chess_core::board::{Board, Color};
//!
//! let board = Board::new();
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 20);
//!
//! let mv = board.find_move("e2e4".parse().unwrap()).unwrap();
//! let next = board.apply_move(mv).unwrap();
//! assert_eq!(next.side_to_move(), Color::Black);
//! assert_eq!(next.en_passant_target(), Some("e3".parse().unwrap()));
//! ```

mod attack_tables;
mod builder;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod notation;
mod perft;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{Error, FenError, FenField, MoveError, MoveParseError, SquareError};
pub use fen::START_FEN;
pub use notation::MoveRequest;
pub use state::{Board, UnmakeInfo};
pub use types::{
    Bitboard, BitboardIter, CastlingRights, Color, Move, MoveKind, MoveList, MoveListIntoIter,
    Piece, Square,
};
