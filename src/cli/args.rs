//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{pvp::PvpArgs, show::ShowArgs};

#[derive(StructOpt)]
#[structopt(
    name = "chess_rules",
    about = "A two-player chess board with per-piece movement rules ♜"
)]
pub enum ChessRules {
    #[structopt(
        name = "pvp",
        about = "Play a game between two humans on this machine. Moves are entered as source and destination squares, e.g. `e2 e4`. The initial position can be given in FEN notation with `--fen` (default: starting position)."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "show",
        about = "Print the board for a position given in FEN notation with `--fen` (default: starting position)."
    )]
    Show(ShowArgs),
}

impl crate::cli::commands::Command for ChessRules {
    fn execute(self) {
        match self {
            Self::Pvp(cmd) => cmd.execute(),
            Self::Show(cmd) => cmd.execute(),
        }
    }
}
