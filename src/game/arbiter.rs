use std::fmt;

use crate::board::{color::Color, piece::PieceKind, Board};

/// Outcome of judging the position after a completed turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Continue,
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Continue)
    }

    pub fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameStatus::WhiteWins,
            Color::Black => GameStatus::BlackWins,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::WhiteWins => Some(Color::White),
            GameStatus::BlackWins => Some(Color::Black),
            GameStatus::Continue | GameStatus::Draw => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Continue => write!(f, "in progress"),
            GameStatus::WhiteWins => write!(f, "white wins"),
            GameStatus::BlackWins => write!(f, "black wins"),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

/// Decides whether the game has ended. Consulted once after every applied
/// move, with the side that just moved.
pub trait Arbiter {
    fn judge(&self, board: &Board, just_moved: Color) -> GameStatus;
}

/// Never ends the game.
#[derive(Default, Clone, Copy, Debug)]
pub struct NeverEnding;

impl Arbiter for NeverEnding {
    fn judge(&self, _board: &Board, _just_moved: Color) -> GameStatus {
        GameStatus::Continue
    }
}

/// Ends the game once a king has been taken off the board. The side that
/// lost its king loses; if somehow both are gone the mover is credited.
#[derive(Default, Clone, Copy, Debug)]
pub struct KingCapture;

impl Arbiter for KingCapture {
    fn judge(&self, board: &Board, just_moved: Color) -> GameStatus {
        let opponent = just_moved.opposite();
        if !board.contains(PieceKind::King, opponent) {
            GameStatus::win_for(just_moved)
        } else if !board.contains(PieceKind::King, just_moved) {
            GameStatus::win_for(opponent)
        } else {
            GameStatus::Continue
        }
    }
}

/// Picks an arbiter at runtime, e.g. from a command line flag.
#[derive(Clone, Copy, Debug)]
pub enum ArbiterKind {
    NeverEnding,
    KingCapture,
}

impl Arbiter for ArbiterKind {
    fn judge(&self, board: &Board, just_moved: Color) -> GameStatus {
        match self {
            ArbiterKind::NeverEnding => NeverEnding.judge(board, just_moved),
            ArbiterKind::KingCapture => KingCapture.judge(board, just_moved),
        }
    }
}
