use std::str::FromStr;

use super::error::FenError;
use super::{Board, CastlingRights, Color, Piece, Square};

/// Standard starting position in FEN.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// All six fields are required. Besides syntax, the resulting position must
    /// satisfy the board invariants (one king each, no back-rank pawns,
    /// castling rights backed by pieces on their home squares, and the side
    /// that just moved not left in check).
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let result = Self::parse_fen(fen);
        if let Err(err) = &result {
            log::debug!("rejected FEN '{fen}': {err}");
        }
        result
    }

    fn parse_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        parse_placement(&mut board, parts[0])?;

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        board.castling_rights = parse_castling(parts[2])?;
        board.en_passant_target = parse_en_passant(&board, parts[3])?;

        board.halfmove_clock = parse_counter(parts[4]).ok_or_else(|| {
            FenError::InvalidHalfmoveClock {
                found: parts[4].to_string(),
            }
        })?;
        // FEN counts full moves from 1
        board.fullmove_number = parse_counter(parts[5])
            .filter(|n| *n > 0)
            .ok_or_else(|| FenError::InvalidFullmoveNumber {
                found: parts[5].to_string(),
            })?;

        board.hash = board.compute_hash();
        board.validate()?;
        Ok(board)
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let sq = Square::from_index_unchecked(rank * 8 + file);
                if let Some((color, piece)) = self.piece_at(sq) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

fn parse_placement(board: &mut Board, placement: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx;
        let mut file = 0;
        for c in rank_str.chars() {
            match c {
                '1'..='8' => file += c as usize - '0' as usize,
                _ => {
                    let (color, piece) =
                        Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::BadRankWidth {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    board.put(Square::from_index_unchecked(rank * 8 + file), color, piece);
                    file += 1;
                }
            }
        }
        if file != 8 {
            return Err(FenError::BadRankWidth {
                rank: rank_idx,
                files: file,
            });
        }
    }
    Ok(())
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let invalid = || FenError::InvalidCastling {
        found: field.to_string(),
    };
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }

    // Letters must be a subset of KQkq in that order, each at most once.
    let mut next = 0;
    for c in field.chars() {
        let offset = CastlingRights::FEN_ORDER[next..]
            .iter()
            .position(|(letter, _, _)| *letter == c)
            .ok_or_else(invalid)?;
        let (_, color, kingside) = CastlingRights::FEN_ORDER[next + offset];
        rights.set(color, kingside);
        next += offset + 1;
    }
    if rights.is_empty() {
        return Err(invalid());
    }
    Ok(rights)
}

fn parse_en_passant(board: &Board, field: &str) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let invalid = || FenError::InvalidEnPassant {
        found: field.to_string(),
    };
    let target: Square = field.parse().map_err(|_| invalid())?;

    if !board.is_plausible_en_passant(target) {
        return Err(invalid());
    }
    Ok(Some(target))
}

fn parse_counter(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
