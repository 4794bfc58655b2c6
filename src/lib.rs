//! Chess rules core: board state, legal move generation, move application
//! with undo, FEN notation, and a [`Game`] surface for callers that only
//! want to ask "what is here" and "play this".

pub mod board;
pub mod game;
mod zobrist;

pub use board::{Board, Color, Error, FenError, Move, MoveError, Piece, Square};
pub use game::{Game, GameStatus};
