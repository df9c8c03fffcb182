use log::{debug, info};

use crate::game::arbiter::{Arbiter, GameStatus};
use crate::game::display::GameDisplay;
use crate::game::game::{Game, GameConfig, GameError};
use crate::game::input_source::InputSource;
use crate::game::renderer::GameRenderer;
use crate::input_handler::InputError;

/// Drives a game from the first move to a terminal status: render, read a
/// move, apply it, pass the turn, ask the arbiter. Malformed input and
/// rejected moves are reprompted without limit.
pub struct GameLoop<I: InputSource, R: GameRenderer, A: Arbiter> {
    game: Game,
    ui: GameDisplay,
    input: I,
    renderer: R,
    arbiter: A,
}

impl<I: InputSource, R: GameRenderer, A: Arbiter> GameLoop<I, R, A> {
    pub fn new(input: I, renderer: R, arbiter: A, config: &GameConfig) -> Self {
        Self {
            game: Game::with_config(config),
            ui: GameDisplay::new(config.colored_output),
            input,
            renderer,
            arbiter,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Runs until the arbiter ends the game. Returns early with an error only
    /// when the input source can no longer supply moves.
    pub fn run(&mut self) -> Result<GameStatus, GameError> {
        info!("game started, {} to move", self.game.turn());

        while !self.game.is_over() {
            self.renderer
                .render(&mut self.ui, self.game.board(), self.game.turn());
            self.play_turn()?;
            self.game.judge(&self.arbiter);
        }

        let status = self.game.status();
        info!("game over after {} moves: {}", self.game.move_count(), status);
        self.renderer.notify(&format!("Game over: {}!", status));
        Ok(status)
    }

    fn play_turn(&mut self) -> Result<(), GameError> {
        loop {
            let current_turn = self.game.turn();
            match self.input.get_move(current_turn) {
                Ok(input) => match self.game.apply_move(input) {
                    Ok(_captured) => return Ok(()),
                    Err(GameError::InvalidMove { error }) => {
                        debug!("{} move rejected: {}", current_turn, error);
                        self.renderer.notify("Invalid move. Try again.");
                    }
                    Err(error) => return Err(error),
                },
                Err(InputError::InvalidInput { input }) => {
                    debug!("malformed input: {:?}", input);
                    self.renderer
                        .notify("Invalid input format. Please use the format: a1 a2");
                }
                Err(error) => return Err(GameError::Input { error }),
            }
        }
    }
}
