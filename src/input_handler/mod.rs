pub mod fen;
pub mod input;

use std::io::BufRead;

use common::Square;

pub use input::{InputError, MoveInput};

/// Reads a move from `reader`. Both squares may share a line (`e2 e4`), or
/// a line holding only the source square is followed by one holding the
/// destination. End of input is reported as `InputError::InputClosed` so
/// callers can stop reprompting.
pub fn read_move_input<R: BufRead>(reader: &mut R) -> Result<MoveInput, InputError> {
    let line = read_line(reader)?;
    if Square::from_algebraic(line.trim()).is_none() {
        return line.parse();
    }

    let destination = read_line(reader)?;
    format!("{} {}", line.trim(), destination.trim()).parse()
}

fn read_line<R: BufRead>(reader: &mut R) -> Result<String, InputError> {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Err(InputError::InputClosed),
        Ok(_n) => Ok(line),
        Err(error) => Err(InputError::IOError {
            error: error.to_string(),
        }),
    }
}

pub fn parse_move_input() -> Result<MoveInput, InputError> {
    let stdin = std::io::stdin();
    let mut handle = stdin.lock();
    read_move_input(&mut handle)
}
