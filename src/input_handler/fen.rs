use std::str::FromStr;

use crate::board::{color::Color, error::BoardError, piece::PieceKind, Board};
use common::Square;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum FenParseError {
    #[error("Empty FEN string")]
    Empty,
    #[error("Invalid piece character: {invalid_character:?}")]
    InvalidPieceCharacter { invalid_character: char },
    #[error("Wrong number of ranks: 8 expected, {rank_count:?} given")]
    InvalidRankCount { rank_count: usize },
    #[error("Rank too long: {invalid_rank:?}")]
    InvalidRankLength { invalid_rank: String },
    #[error("Error placing piece: {board_error:?}")]
    ErrorPlacingPiece { board_error: BoardError },
    #[error("Rank incomplete: {incomplete_rank:?}")]
    IncompleteRank { incomplete_rank: String },
    #[error("Invalid color: {invalid_color:?}")]
    InvalidColor { invalid_color: String },
}

type FenResult<T> = Result<T, FenParseError>;

pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A board plus the side to move, read from a FEN string. Only the piece
/// placement and active color fields are used; castling, en passant and the
/// move clocks have no meaning here and are ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct FenPosition {
    pub board: Board,
    pub turn: Color,
}

impl Default for FenPosition {
    fn default() -> Self {
        Self {
            board: Board::starting_position(),
            turn: Color::White,
        }
    }
}

impl FromStr for FenPosition {
    type Err = FenParseError;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        parse_fen(fen)
    }
}

/// Parses a FEN string. The active color field is optional and defaults to
/// white.
pub fn parse_fen(fen: &str) -> FenResult<FenPosition> {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().ok_or(FenParseError::Empty)?;

    let mut board = Board::new();
    parse_piece_placement(&mut board, placement)?;
    let turn = match fields.next() {
        Some(active_color) => parse_active_color(active_color)?,
        None => Color::White,
    };

    Ok(FenPosition { board, turn })
}

/// Parses the piece placement section of the FEN string
fn parse_piece_placement(board: &mut Board, position: &str) -> FenResult<()> {
    let ranks: Vec<&str> = position.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenParseError::InvalidRankCount {
            rank_count: ranks.len(),
        });
    }

    for (rank_idx, rank) in ranks.iter().enumerate() {
        parse_rank(board, rank, 7 - rank_idx as u8)?;
    }

    Ok(())
}

/// Parses a single rank of the piece placement section
fn parse_rank(board: &mut Board, rank: &str, rank_number: u8) -> FenResult<()> {
    let mut file = 0u8;

    for c in rank.chars() {
        if file >= 8 {
            return Err(FenParseError::InvalidRankLength {
                invalid_rank: rank.to_string(),
            });
        }

        if let Some(empty_squares) = c.to_digit(10) {
            file += empty_squares as u8;
        } else {
            let (kind, color) = PieceKind::from_fen(c).ok_or(
                FenParseError::InvalidPieceCharacter {
                    invalid_character: c,
                },
            )?;
            board
                .put(kind, color, Square::new(file, rank_number))
                .map_err(|e| FenParseError::ErrorPlacingPiece { board_error: e })?;
            file += 1;
        }
    }

    if file != 8 {
        let err = if file > 8 {
            FenParseError::InvalidRankLength {
                invalid_rank: rank.to_string(),
            }
        } else {
            FenParseError::IncompleteRank {
                incomplete_rank: rank.to_string(),
            }
        };
        return Err(err);
    }

    Ok(())
}

fn parse_active_color(active_color: &str) -> FenResult<Color> {
    match active_color {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenParseError::InvalidColor {
            invalid_color: active_color.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::chess_position;
    use common::square::*;

    #[test]
    fn test_parse_starting_position() {
        let position = parse_fen(STARTING_POSITION_FEN).unwrap();
        assert_eq!(Board::starting_position(), position.board);
        assert_eq!(Color::White, position.turn);
    }

    #[test]
    fn test_parse_placement_only() {
        let position: FenPosition = "4k3/8/8/8/3q4/8/8/4K3".parse().unwrap();
        let expected = chess_position! {
            ....k...
            ........
            ........
            ........
            ...q....
            ........
            ........
            ....K...
        };
        assert_eq!(expected, position.board);
        assert_eq!(Color::White, position.turn);
        assert_eq!(E1, position.board.get(E1).unwrap().square());
    }

    #[test]
    fn test_parse_black_to_move() {
        let position = parse_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1").unwrap();
        assert_eq!(Color::Black, position.turn);
    }

    #[test]
    fn test_invalid_fen() {
        assert_eq!(Err(FenParseError::Empty), parse_fen("   "));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8"),
            Err(FenParseError::InvalidRankCount { rank_count: 7 })
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/7x"),
            Err(FenParseError::InvalidPieceCharacter {
                invalid_character: 'x'
            })
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/7"),
            Err(FenParseError::IncompleteRank { .. })
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/K8"),
            Err(FenParseError::InvalidRankLength { .. })
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/8 x"),
            Err(FenParseError::InvalidColor { .. })
        ));
    }
}
