use std::collections::VecDeque;

use crate::board::color::Color;
use crate::input_handler::{self, InputError, MoveInput};

pub trait InputSource {
    fn get_move(&mut self, current_turn: Color) -> Result<MoveInput, InputError>;
}

/// Reads moves from stdin.
pub struct HumanInput;

impl InputSource for HumanInput {
    fn get_move(&mut self, _current_turn: Color) -> Result<MoveInput, InputError> {
        input_handler::parse_move_input()
    }
}

/// Replays a fixed list of input lines, then reports the input as closed.
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn get_move(&mut self, _current_turn: Color) -> Result<MoveInput, InputError> {
        match self.lines.pop_front() {
            Some(line) => line.parse(),
            None => Err(InputError::InputClosed),
        }
    }
}
