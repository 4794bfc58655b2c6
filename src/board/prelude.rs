//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_core::board::prelude::*;
//!
//! let board = Board::try_from_fen(START_FEN).unwrap();
//! assert_eq!(board.side_to_move(), Color::White);
//! ```

pub use super::{
    Board, BoardBuilder, CastlingRights, Color, FenError, Move, MoveError, MoveList,
    MoveParseError, MoveRequest, Piece, Square, SquareError, START_FEN,
};
