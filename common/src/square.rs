use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static ALGEBRAIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-hA-H])([1-8])$").expect("ALGEBRAIC_RE regex should be valid")
});

/// Number of files (and ranks) on the board.
pub const BOARD_SIZE: u8 = 8;

/// A single cell of the 8x8 grid, addressed by file (a..h -> 0..7) and
/// rank (1..8 -> 0..7). A `Square` is always in bounds; use
/// `from_file_rank` to validate untrusted coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    pub const fn new(file: u8, rank: u8) -> Self {
        assert!(file < BOARD_SIZE && rank < BOARD_SIZE);
        Self { file, rank }
    }

    /// Returns `None` when either coordinate falls outside the board.
    pub fn from_file_rank(file: i8, rank: i8) -> Option<Self> {
        if is_in_bounds(file, rank) {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    pub fn from_algebraic(algebraic: &str) -> Option<Self> {
        let caps = ALGEBRAIC_RE.captures(algebraic)?;
        let file_char = caps[1].chars().next()?.to_ascii_lowercase();
        let rank_char = caps[2].chars().next()?;

        let file = file_char as u8 - b'a';
        let rank = rank_char as u8 - b'1';
        Some(Self::new(file, rank))
    }

    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.file) as char, self.rank + 1)
    }

    pub fn file(self) -> u8 {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Iterates all 64 squares, rank by rank starting at a1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Square::new(file, rank)))
    }
}

pub fn is_in_bounds(file: i8, rank: i8) -> bool {
    (0..BOARD_SIZE as i8).contains(&file) && (0..BOARD_SIZE as i8).contains(&rank)
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

pub const A1: Square = Square::new(0, 0);
pub const B1: Square = Square::new(1, 0);
pub const C1: Square = Square::new(2, 0);
pub const D1: Square = Square::new(3, 0);
pub const E1: Square = Square::new(4, 0);
pub const F1: Square = Square::new(5, 0);
pub const G1: Square = Square::new(6, 0);
pub const H1: Square = Square::new(7, 0);
pub const A2: Square = Square::new(0, 1);
pub const B2: Square = Square::new(1, 1);
pub const C2: Square = Square::new(2, 1);
pub const D2: Square = Square::new(3, 1);
pub const E2: Square = Square::new(4, 1);
pub const F2: Square = Square::new(5, 1);
pub const G2: Square = Square::new(6, 1);
pub const H2: Square = Square::new(7, 1);
pub const A3: Square = Square::new(0, 2);
pub const B3: Square = Square::new(1, 2);
pub const C3: Square = Square::new(2, 2);
pub const D3: Square = Square::new(3, 2);
pub const E3: Square = Square::new(4, 2);
pub const F3: Square = Square::new(5, 2);
pub const G3: Square = Square::new(6, 2);
pub const H3: Square = Square::new(7, 2);
pub const A4: Square = Square::new(0, 3);
pub const B4: Square = Square::new(1, 3);
pub const C4: Square = Square::new(2, 3);
pub const D4: Square = Square::new(3, 3);
pub const E4: Square = Square::new(4, 3);
pub const F4: Square = Square::new(5, 3);
pub const G4: Square = Square::new(6, 3);
pub const H4: Square = Square::new(7, 3);
pub const A5: Square = Square::new(0, 4);
pub const B5: Square = Square::new(1, 4);
pub const C5: Square = Square::new(2, 4);
pub const D5: Square = Square::new(3, 4);
pub const E5: Square = Square::new(4, 4);
pub const F5: Square = Square::new(5, 4);
pub const G5: Square = Square::new(6, 4);
pub const H5: Square = Square::new(7, 4);
pub const A6: Square = Square::new(0, 5);
pub const B6: Square = Square::new(1, 5);
pub const C6: Square = Square::new(2, 5);
pub const D6: Square = Square::new(3, 5);
pub const E6: Square = Square::new(4, 5);
pub const F6: Square = Square::new(5, 5);
pub const G6: Square = Square::new(6, 5);
pub const H6: Square = Square::new(7, 5);
pub const A7: Square = Square::new(0, 6);
pub const B7: Square = Square::new(1, 6);
pub const C7: Square = Square::new(2, 6);
pub const D7: Square = Square::new(3, 6);
pub const E7: Square = Square::new(4, 6);
pub const F7: Square = Square::new(5, 6);
pub const G7: Square = Square::new(6, 6);
pub const H7: Square = Square::new(7, 6);
pub const A8: Square = Square::new(0, 7);
pub const B8: Square = Square::new(1, 7);
pub const C8: Square = Square::new(2, 7);
pub const D8: Square = Square::new(3, 7);
pub const E8: Square = Square::new(4, 7);
pub const F8: Square = Square::new(5, 7);
pub const G8: Square = Square::new(6, 7);
pub const H8: Square = Square::new(7, 7);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_file_rank() {
        assert_eq!(Some(A1), Square::from_file_rank(0, 0));
        assert_eq!(Some(B2), Square::from_file_rank(1, 1));
        assert_eq!(Some(E4), Square::from_file_rank(4, 3));
        assert_eq!(None, Square::from_file_rank(-1, 0));
        assert_eq!(None, Square::from_file_rank(0, 8));
        assert_eq!(None, Square::from_file_rank(8, 8));
    }

    #[test]
    fn test_from_algebraic() {
        assert_eq!(Some(A1), Square::from_algebraic("A1"));
        assert_eq!(Some(A1), Square::from_algebraic("a1"));
        assert_eq!(Some(E5), Square::from_algebraic("E5"));
        assert_eq!(Some(H8), Square::from_algebraic("h8"));
        assert_eq!(None, Square::from_algebraic("i1"));
        assert_eq!(None, Square::from_algebraic("a9"));
        assert_eq!(None, Square::from_algebraic("a10"));
        assert_eq!(None, Square::from_algebraic(""));
    }

    #[test]
    fn test_to_algebraic() {
        assert_eq!("a1", A1.to_algebraic());
        assert_eq!("a8", A8.to_algebraic());
        assert_eq!("b8", B8.to_algebraic());
        assert_eq!("h8", H8.to_string());
    }

    #[test]
    fn test_all_squares() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(64, squares.len());
        assert_eq!(A1, squares[0]);
        assert_eq!(H1, squares[7]);
        assert_eq!(H8, squares[63]);
    }
}
