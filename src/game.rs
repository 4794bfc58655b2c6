//! A game in progress: a board plus the moves that led to it.
//!
//! # Example
//! ```
//! use chess_core::{Game, GameStatus, Square};
//!
//! let mut game = Game::new();
//! for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     game.play_uci(mv).unwrap();
//! }
//! assert!(game.is_checkmate());
//! assert!(matches!(game.status(), GameStatus::Checkmate { .. }));
//! assert!(game.play_coords(Square::E1, Square::F1, None).is_err());
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    Board, Color, Error, FenError, Move, MoveError, MoveList, MoveRequest, Piece, Square,
    UnmakeInfo,
};

/// Outcome of the position from the side to move's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => f.write_str("ongoing"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => f.write_str("stalemate"),
        }
    }
}

/// Owns the current [`Board`] and the history needed to take moves back.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    history: Vec<(Move, UnmakeInfo)>,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// A game from the standard initial position.
    #[must_use]
    pub fn new() -> Self {
        Game::from_board(Board::new())
    }

    /// A game from a FEN position. History starts empty.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Board::try_from_fen(fen).map(Game::from_board)
    }

    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Game {
            board,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn fen(&self) -> String {
        self.board.to_fen()
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.board.piece_at(sq)
    }

    /// Occupant at zero-based `(file, rank)`; out-of-range coordinates are an error.
    pub fn piece_at_coords(&self, file: usize, rank: usize) -> Result<Option<(Color, Piece)>, Error> {
        let sq = Square::try_from((file, rank))?;
        Ok(self.board.piece_at(sq))
    }

    #[must_use]
    pub fn is_occupied(&self, sq: Square) -> bool {
        !self.board.is_empty(sq)
    }

    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.board.generate_moves()
    }

    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.legal_moves().contains(mv)
    }

    /// The legal move from `from` to `to`, with `promotion` picking among
    /// promotion moves.
    pub fn find_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<Move, MoveError> {
        self.board.find_move(MoveRequest {
            from,
            to,
            promotion,
        })
    }

    /// Play a move. Rejected moves leave the game unchanged.
    pub fn play(&mut self, mv: Move) -> Result<Move, Error> {
        match self.board.make_move(mv) {
            Ok(info) => {
                self.history.push((mv, info));
                Ok(mv)
            }
            Err(err) => {
                log::debug!("game rejected {mv}: {err}");
                Err(err.into())
            }
        }
    }

    /// Play the legal move between two squares.
    pub fn play_coords(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<Move, Error> {
        let mv = self.find_move(from, to, promotion).map_err(|err| {
            log::debug!("game rejected {from}{to}: {err}");
            err
        })?;
        self.play(mv)
    }

    /// Play a move given in coordinate text such as `e2e4` or `e7e8q`.
    pub fn play_uci(&mut self, text: &str) -> Result<Move, Error> {
        let request: MoveRequest = text.parse().map_err(|err| {
            log::debug!("game rejected '{text}': {err}");
            err
        })?;
        self.play_coords(request.from, request.to, request.promotion)
    }

    /// Take back the last move, returning it.
    pub fn undo(&mut self) -> Option<Move> {
        let (mv, info) = self.history.pop()?;
        self.board.unmake_move(mv, info);
        Some(mv)
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().map(|(mv, _)| *mv)
    }

    #[must_use]
    pub fn in_check(&self) -> bool {
        self.board.in_check()
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.board.is_checkmate()
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.board.is_stalemate()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if !self.board.generate_moves().is_empty() {
            GameStatus::Ongoing
        } else if self.board.in_check() {
            GameStatus::Checkmate {
                winner: self.side_to_move().opponent(),
            }
        } else {
            GameStatus::Stalemate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.fen(), crate::board::START_FEN);
        assert_eq!(game.legal_moves().len(), 20);
        assert_eq!(game.status(), GameStatus::Ongoing);
        assert_eq!(game.history().count(), 0);
    }

    #[test]
    fn test_piece_queries() {
        let game = Game::new();
        assert_eq!(
            game.piece_at_coords(4, 0).unwrap(),
            Some((Color::White, Piece::King))
        );
        assert_eq!(game.piece_at_coords(4, 4).unwrap(), None);
        assert!(game.piece_at_coords(8, 0).is_err());
        assert!(game.is_occupied(sq("d8")));
        assert!(!game.is_occupied(sq("d4")));
    }

    #[test]
    fn test_play_and_undo() {
        let mut game = Game::new();
        let e4 = game.play_uci("e2e4").unwrap();
        game.play_coords(sq("c7"), sq("c5"), None).unwrap();
        assert_eq!(game.history().collect::<Vec<_>>().len(), 2);
        assert_eq!(game.side_to_move(), Color::White);

        game.undo();
        assert_eq!(game.undo(), Some(e4));
        assert_eq!(game.undo(), None);
        assert_eq!(game.fen(), crate::board::START_FEN);
    }

    #[test]
    fn test_rejected_move_leaves_game_unchanged() {
        let mut game = Game::new();
        let before = game.fen();

        assert!(matches!(
            game.play_uci("e2e5"),
            Err(Error::Move(MoveError::Illegal { .. }))
        ));
        assert!(matches!(game.play_uci("e2"), Err(Error::MoveParse(_))));
        assert!(game.play(Move::quiet(sq("e7"), sq("e5"))).is_err());

        assert_eq!(game.fen(), before);
        assert_eq!(game.history().count(), 0);
    }

    #[test]
    fn test_is_legal() {
        let game = Game::new();
        let mv = game.find_move(sq("g1"), sq("f3"), None).unwrap();
        assert!(game.is_legal(mv));
        assert!(!game.is_legal(Move::quiet(sq("g1"), sq("g3"))));
    }

    #[test]
    fn test_promotion_choice() {
        let mut game = Game::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        assert!(matches!(
            game.play_coords(sq("a7"), sq("a8"), None),
            Err(Error::Move(MoveError::Ambiguous { .. }))
        ));
        game.play_coords(sq("a7"), sq("a8"), Some(Piece::Rook)).unwrap();
        assert_eq!(game.piece_at(sq("a8")), Some((Color::White, Piece::Rook)));
    }

    #[test]
    fn test_status_checkmate_and_stalemate() {
        let mut game = Game::new();
        for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            game.play_uci(mv).unwrap();
        }
        assert!(game.in_check());
        assert_eq!(
            game.status(),
            GameStatus::Checkmate {
                winner: Color::Black
            }
        );

        let stalemate = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(stalemate.status(), GameStatus::Stalemate);
        assert!(stalemate.is_stalemate());
        assert_eq!(stalemate.status().to_string(), "stalemate");
    }

    #[test]
    fn test_from_fen_error() {
        assert!(Game::from_fen("not a fen").is_err());
    }
}
