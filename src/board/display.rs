use crate::game::display::GameDisplay;

use super::Board;
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut ui = GameDisplay::plain();
        ui.render_board(self);
        write!(f, "{}", ui.buffer())
    }
}

/// Builds a `Board` from an 8x8 picture drawn from white's side, using FEN
/// letters for pieces and `.` for empty squares.
#[cfg(test)]
macro_rules! chess_position {
    ($($piece:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let pieces: Vec<_> = stringify!($($piece)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        assert_eq!(pieces.len(), 64, "Invalid number of squares. Expected 64, got {}", pieces.len());
        for (i, &c) in pieces.iter().enumerate() {
            if c != '.' {
                let (kind, color) = $crate::board::PieceKind::from_fen(c)
                    .expect("Invalid character in chess position");
                // The first character drawn is a8, so the row index counts
                // down from the eighth rank.
                let row = i / 8;
                let col = i % 8;
                let square = common::Square::new(col as u8, (7 - row) as u8);
                board.put(kind, color, square).unwrap();
            }
        }
        board
    }};
}

#[cfg(test)]
pub(crate) use chess_position;
