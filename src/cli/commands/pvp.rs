//! PvP command - play a game against another human.

use chess_rules::board::color::Color;
use chess_rules::game::arbiter::ArbiterKind;
use chess_rules::game::game::GameConfig;
use chess_rules::game::input_source::HumanInput;
use chess_rules::game::r#loop::GameLoop;
use chess_rules::game::renderer::TerminalRenderer;
use chess_rules::input_handler::fen::{FenPosition, STARTING_POSITION_FEN};
use log::error;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    #[structopt(long = "fen", default_value = STARTING_POSITION_FEN)]
    pub starting_position: FenPosition,
    /// Side to move first; overrides the FEN active color.
    #[structopt(long = "first")]
    pub first: Option<Color>,
    #[structopt(long = "no-color")]
    pub no_color: bool,
    /// End the game as soon as either king is captured.
    #[structopt(long = "end-on-king-capture")]
    pub end_on_king_capture: bool,
}

impl PvpArgs {
    fn arbiter(&self) -> ArbiterKind {
        if self.end_on_king_capture {
            ArbiterKind::KingCapture
        } else {
            ArbiterKind::NeverEnding
        }
    }

    fn config(self) -> GameConfig {
        GameConfig {
            first_turn: self.first.unwrap_or(self.starting_position.turn),
            starting_position: self.starting_position.board,
            colored_output: !self.no_color,
        }
    }
}

impl Command for PvpArgs {
    fn execute(self) {
        let arbiter = self.arbiter();
        let config = self.config();
        let mut game = GameLoop::new(HumanInput, TerminalRenderer, arbiter, &config);
        if let Err(err) = game.run() {
            error!("game stopped: {}", err);
            println!("Game stopped: {}", err);
        }
    }
}
