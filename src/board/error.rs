use common::Square;
use thiserror::Error;

use super::piece::PieceKind;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("Square ({file}, {rank}) is outside the board")]
    OutOfBounds { file: i8, rank: i8 },
    #[error("Cannot move from {square}, the square is empty")]
    EmptySource { square: Square },
    #[error("A {kind} cannot move from {from} to {to}")]
    IllegalShape {
        kind: PieceKind,
        from: Square,
        to: Square,
    },
    #[error("Cannot put a piece on {square}, it is already occupied")]
    SquareOccupied { square: Square },
}
