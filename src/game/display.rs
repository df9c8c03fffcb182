use crate::board::{color::Color, Board};
use std::fmt::Write;
use termion::{color, style};

const FILE_LABELS: &str = "  a b c d e f g h\n";

/// Text rendering of the board, ranks 8 to 1 from top to bottom. Colored
/// output paints white pieces on a white background and black pieces on a
/// black one.
pub struct GameDisplay {
    buffer: String,
    colored: bool,
}

impl GameDisplay {
    pub fn new(colored: bool) -> Self {
        Self {
            buffer: String::with_capacity(512),
            colored,
        }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn render_board(&mut self, board: &Board) {
        for rank in (0..8i8).rev() {
            self.buffer.push_str(&format!("{} ", rank + 1));
            for file in 0..8i8 {
                if file > 0 {
                    self.buffer.push(' ');
                }
                match board.get_piece(file, rank) {
                    Some(piece) => {
                        let glyph = piece.to_fen();
                        self.push_piece(glyph, piece.color());
                    }
                    None => self.buffer.push('.'),
                }
            }
            self.buffer.push('\n');
        }
        self.buffer.push_str(FILE_LABELS);
    }

    pub fn render_game_state(&mut self, board: &Board, current_turn: Color) {
        self.clear();
        self.render_board(board);
        self.buffer.push('\n');
        self.buffer.push_str(&format!("{}'s turn.\n", current_turn));
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn buffer(self) -> String {
        self.buffer
    }

    fn push_piece(&mut self, glyph: char, piece_color: Color) {
        if !self.colored {
            self.buffer.push(glyph);
            return;
        }

        // Writing into a String cannot fail.
        let _ = match piece_color {
            Color::White => write!(
                self.buffer,
                "{}{}{}{}",
                color::Fg(color::Magenta),
                color::Bg(color::White),
                glyph,
                style::Reset
            ),
            Color::Black => write!(
                self.buffer,
                "{}{}{}{}",
                color::Fg(color::Magenta),
                color::Bg(color::Black),
                glyph,
                style::Reset
            ),
        };
    }
}
