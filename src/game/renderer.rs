use crate::board::color::Color;
use crate::board::Board;
use crate::game::display::GameDisplay;

pub trait GameRenderer {
    fn render(&self, ui: &mut GameDisplay, board: &Board, current_turn: Color);
    /// Prompts, rejections and the final result.
    fn notify(&self, message: &str);
}

/// Prints the board and messages to stdout.
pub struct TerminalRenderer;

impl GameRenderer for TerminalRenderer {
    fn render(&self, ui: &mut GameDisplay, board: &Board, current_turn: Color) {
        ui.render_game_state(board, current_turn);
        print!("{}", ui.as_str());
        println!("Enter move (e.g., e2 e4):");
    }

    fn notify(&self, message: &str) {
        println!("{}", message);
    }
}

/// Renders nothing. Used for scripted games.
pub struct SilentRenderer;

impl GameRenderer for SilentRenderer {
    fn render(&self, _ui: &mut GameDisplay, _board: &Board, _current_turn: Color) {}

    fn notify(&self, _message: &str) {}
}
