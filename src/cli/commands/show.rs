//! Show command - print a position.

use chess_rules::game::display::GameDisplay;
use chess_rules::input_handler::fen::{FenPosition, STARTING_POSITION_FEN};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct ShowArgs {
    #[structopt(long = "fen", default_value = STARTING_POSITION_FEN)]
    pub position: FenPosition,
    #[structopt(long = "no-color")]
    pub no_color: bool,
}

impl Command for ShowArgs {
    fn execute(self) {
        let mut ui = GameDisplay::new(!self.no_color);
        ui.render_game_state(&self.position.board, self.position.turn);
        print!("{}", ui.buffer());
    }
}
