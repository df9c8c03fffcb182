pub mod color;
pub mod error;
pub mod piece;

mod display;


use common::square::BOARD_SIZE;
use common::Square;
use log::debug;

pub use color::Color;
pub use error::BoardError;
pub use piece::{Piece, PieceKind};

#[cfg(test)]
pub(crate) use display::chess_position;

/// Back rank layout, indexed by file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 8x8 grid. Each slot owns at most one piece, and an occupant's stored
/// square always equals the slot it sits in. `try_move_piece` (and its boolean
/// wrapper `move_piece`) is the only operation that relocates pieces.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Board {
    /// Indexed as `squares[file][rank]`.
    squares: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn starting_position() -> Self {
        let mut board = Self::new();
        board.setup_pieces();
        board
    }

    /// Resets the board to the standard starting position. Anything already on
    /// the board is discarded first.
    pub fn setup_pieces(&mut self) {
        self.clear();
        for &color in Color::ALL.iter() {
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                let back = Square::new(file as u8, color.back_rank());
                let pawn = Square::new(file as u8, color.pawn_home_rank());
                self.place(Piece::new(kind, color, back));
                self.place(Piece::new(PieceKind::Pawn, color, pawn));
            }
        }
    }

    fn clear(&mut self) {
        self.squares = Default::default();
    }

    /// The occupant at the given coordinates. Out-of-bounds coordinates are
    /// treated the same as an empty square.
    pub fn get_piece(&self, file: i8, rank: i8) -> Option<&Piece> {
        Square::from_file_rank(file, rank).and_then(|square| self.get(square))
    }

    pub fn get(&self, square: Square) -> Option<&Piece> {
        self.slot(square).as_ref()
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    /// Places a new piece on an empty square. Used to build positions from
    /// FEN, never during play.
    pub(crate) fn put(&mut self, kind: PieceKind, color: Color, square: Square) -> Result<(), BoardError> {
        if self.is_occupied(square) {
            return Err(BoardError::SquareOccupied { square });
        }
        self.place(Piece::new(kind, color, square));
        Ok(())
    }

    fn remove(&mut self, square: Square) -> Option<Piece> {
        self.slot_mut(square).take()
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.squares.iter().flatten().flatten()
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|piece| piece.color() == color).count()
    }

    pub fn contains(&self, kind: PieceKind, color: Color) -> bool {
        self.pieces()
            .any(|piece| piece.kind() == kind && piece.color() == color)
    }

    /// Boolean form of `try_move_piece`: `true` iff the move was applied.
    pub fn move_piece(&mut self, src_file: i8, src_rank: i8, dest_file: i8, dest_rank: i8) -> bool {
        self.try_move_piece(src_file, src_rank, dest_file, dest_rank)
            .is_ok()
    }

    /// Validates bounds and hands off to `apply_move`. On success returns the
    /// captured piece, if any. On failure the board is untouched.
    pub fn try_move_piece(
        &mut self,
        src_file: i8,
        src_rank: i8,
        dest_file: i8,
        dest_rank: i8,
    ) -> Result<Option<Piece>, BoardError> {
        let from = Square::from_file_rank(src_file, src_rank).ok_or(BoardError::OutOfBounds {
            file: src_file,
            rank: src_rank,
        })?;
        let to = Square::from_file_rank(dest_file, dest_rank).ok_or(BoardError::OutOfBounds {
            file: dest_file,
            rank: dest_rank,
        })?;
        self.apply_move(from, to)
    }

    /// Moves the occupant of `from` to `to` if its movement shape allows it.
    /// Intermediate squares are never inspected, and whatever stood on `to`
    /// is discarded.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<Option<Piece>, BoardError> {
        let piece = match self.get(from) {
            Some(piece) => piece,
            None => {
                debug!("rejected move {}{}: source is empty", from, to);
                return Err(BoardError::EmptySource { square: from });
            }
        };

        if !piece.is_move_valid(to.file() as i8, to.rank() as i8) {
            debug!(
                "rejected move {}{}: illegal shape for {} {}",
                from,
                to,
                piece.color(),
                piece.kind()
            );
            return Err(BoardError::IllegalShape {
                kind: piece.kind(),
                from,
                to,
            });
        }

        let mut piece = match self.remove(from) {
            Some(piece) => piece,
            None => return Err(BoardError::EmptySource { square: from }),
        };
        piece.set_square(to);
        let captured = self.slot_mut(to).replace(piece);

        if let Some(captured) = &captured {
            debug!(
                "{} {} captured on {}",
                captured.color(),
                captured.kind(),
                to
            );
        }

        Ok(captured)
    }

    fn place(&mut self, piece: Piece) {
        let square = piece.square();
        *self.slot_mut(square) = Some(piece);
    }

    fn slot(&self, square: Square) -> &Option<Piece> {
        &self.squares[square.file() as usize][square.rank() as usize]
    }

    fn slot_mut(&mut self, square: Square) -> &mut Option<Piece> {
        &mut self.squares[square.file() as usize][square.rank() as usize]
    }
}
