//! Move input parsing and validation.

use std::str::FromStr;

use common::Square;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Either "e2 e4" or "e2e4". Surrounding whitespace is trimmed before matching.
static COORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-hA-H][1-8])\s*([a-hA-H][1-8])$").expect("COORD_RE regex should be valid")
});

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}, expected a move like `e2 e4`")]
    InvalidInput { input: String },
    #[error("input closed")]
    InputClosed,
}

/// A source and destination square read from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveInput {
    pub from: Square,
    pub to: Square,
}

impl MoveInput {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || InputError::InvalidInput {
            input: input.to_string(),
        };

        let caps = COORD_RE.captures(input.trim()).ok_or_else(invalid)?;
        let from = Square::from_algebraic(&caps[1]).ok_or_else(invalid)?;
        let to = Square::from_algebraic(&caps[2]).ok_or_else(invalid)?;

        Ok(MoveInput { from, to })
    }
}
