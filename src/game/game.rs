use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::board::piece::Piece;
use crate::board::Board;
use crate::input_handler::{InputError, MoveInput};
use log::info;
use thiserror::Error;

use super::arbiter::{Arbiter, GameStatus};

/// Settings for a single game. How the game ends is decided by the arbiter
/// handed to the game loop, not by the config.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub starting_position: Board,
    pub first_turn: Color,
    pub colored_output: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_position: Board::starting_position(),
            first_turn: Color::White,
            colored_output: true,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum GameError {
    #[error("Invalid move: {error}")]
    InvalidMove { error: BoardError },
    #[error("The game is over: {status}")]
    GameOver { status: GameStatus },
    #[error("Input error: {error}")]
    Input { error: InputError },
}

/// Board plus side-to-move and status. The game is an ordinary value, so
/// several can exist side by side and each can be reset independently.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    status: GameStatus,
    move_count: usize,
    starting_position: Board,
    first_turn: Color,
}

impl Default for Game {
    fn default() -> Self {
        Self::with_config(&GameConfig::default())
    }
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &GameConfig) -> Self {
        Self::from_board(config.starting_position.clone(), config.first_turn)
    }

    pub fn from_board(board: Board, turn: Color) -> Self {
        Self {
            starting_position: board.clone(),
            first_turn: turn,
            board,
            turn,
            status: GameStatus::Continue,
            move_count: 0,
        }
    }

    /// Returns to the position and side-to-move the game was created with.
    pub fn reset(&mut self) {
        self.board = self.starting_position.clone();
        self.turn = self.first_turn;
        self.status = GameStatus::Continue;
        self.move_count = 0;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Applies a move and hands the turn to the other side. Which color the
    /// moved piece belongs to is not checked.
    pub fn apply_move(&mut self, input: MoveInput) -> Result<Option<Piece>, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver {
                status: self.status,
            });
        }

        let captured = self
            .board
            .apply_move(input.from, input.to)
            .map_err(|error| GameError::InvalidMove { error })?;

        info!("{} played {}{}", self.turn, input.from, input.to);
        self.move_count += 1;
        self.turn = self.turn.opposite();
        Ok(captured)
    }

    /// Asks the arbiter about the current position and records the answer.
    /// `just_moved` is the side that made the last move.
    pub fn judge<A: Arbiter>(&mut self, arbiter: &A) -> GameStatus {
        let just_moved = self.turn.opposite();
        self.status = arbiter.judge(&self.board, just_moved);
        self.status
    }
}
