use std::fmt;

use common::Square;

use super::color::Color;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Pawn,
    ];

    pub fn to_fen(&self, color: Color) -> char {
        let c = match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Rook => 'r',
            PieceKind::Pawn => 'p',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_fen(c: char) -> Option<(PieceKind, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'q' => PieceKind::Queen,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'r' => PieceKind::Rook,
            'p' => PieceKind::Pawn,
            _ => return None,
        };
        Some((kind, color))
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Rook => "rook",
            PieceKind::Pawn => "pawn",
        };
        write!(f, "{}", name)
    }
}

/// A piece on the board. The kind and color are fixed at creation; the square
/// is updated by the board whenever the piece changes slots.
///
/// Deliberately not `Copy`: a piece lives in exactly one board slot and moves
/// between slots by value.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    square: Square,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            kind,
            color,
            square,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn square(&self) -> Square {
        self.square
    }

    /// Only the board calls this, after it has decided the move is legal.
    pub(crate) fn set_square(&mut self, square: Square) {
        self.square = square;
    }

    pub fn to_fen(&self) -> char {
        self.kind.to_fen(self.color)
    }

    /// Whether the destination matches this piece's movement shape. Occupancy,
    /// blocking and board bounds are not considered here.
    pub fn is_move_valid(&self, dest_file: i8, dest_rank: i8) -> bool {
        // Widened so that any i8 destination is safe to subtract.
        let file = i16::from(self.square.file());
        let rank = i16::from(self.square.rank());
        let dest_file = i16::from(dest_file);
        let dest_rank = i16::from(dest_rank);
        let file_delta = (dest_file - file).abs();
        let rank_delta = (dest_rank - rank).abs();

        match self.kind {
            PieceKind::King => file_delta.max(rank_delta) == 1,
            PieceKind::Queen => {
                file_delta == 0 || rank_delta == 0 || file_delta == rank_delta
            }
            PieceKind::Bishop => file_delta == rank_delta,
            PieceKind::Rook => file_delta == 0 || rank_delta == 0,
            PieceKind::Knight => {
                (file_delta == 1 && rank_delta == 2) || (file_delta == 2 && rank_delta == 1)
            }
            PieceKind::Pawn => {
                let forward = i16::from(self.color.forward());
                let same_file = dest_file == file;
                let single_step = dest_rank == rank + forward;
                let double_step = self.is_on_home_rank() && dest_rank == rank + 2 * forward;
                same_file && (single_step || double_step)
            }
        }
    }

    /// Double-step eligibility is derived from the rank alone, so a pawn that
    /// returns to its home rank may double-step again.
    fn is_on_home_rank(&self) -> bool {
        self.square.rank() == self.color.pawn_home_rank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::square::*;

    fn piece_at(kind: PieceKind, color: Color, square: Square) -> Piece {
        Piece::new(kind, color, square)
    }

    fn targets(piece: &Piece) -> Vec<Square> {
        Square::all()
            .filter(|sq| piece.is_move_valid(sq.file() as i8, sq.rank() as i8))
            .collect()
    }

    #[test]
    fn test_king_moves_one_square_in_any_direction() {
        let king = piece_at(PieceKind::King, Color::White, D4);
        let mut expected = vec![C3, D3, E3, C4, E4, C5, D5, E5];
        expected.sort();
        let mut actual = targets(&king);
        actual.sort();
        assert_eq!(expected, actual);
        assert!(!king.is_move_valid(3, 3), "staying put is not a move");
    }

    #[test]
    fn test_queen_moves_along_lines_and_diagonals() {
        let queen = piece_at(PieceKind::Queen, Color::Black, D4);
        assert!(queen.is_move_valid(3, 7));
        assert!(queen.is_move_valid(0, 3));
        assert!(queen.is_move_valid(7, 7));
        assert!(queen.is_move_valid(0, 0));
        assert!(!queen.is_move_valid(4, 6));
        assert_eq!(27, targets(&queen).len());
    }

    #[test]
    fn test_bishop_moves_diagonally() {
        let bishop = piece_at(PieceKind::Bishop, Color::White, C1);
        assert!(bishop.is_move_valid(7, 5));
        assert!(bishop.is_move_valid(0, 2));
        assert!(!bishop.is_move_valid(2, 4));
        assert!(!bishop.is_move_valid(3, 0));
        assert_eq!(7, targets(&bishop).len());
    }

    #[test]
    fn test_rook_moves_along_files_and_ranks() {
        let rook = piece_at(PieceKind::Rook, Color::White, A1);
        assert!(rook.is_move_valid(0, 7));
        assert!(rook.is_move_valid(7, 0));
        assert!(!rook.is_move_valid(1, 1));
        assert_eq!(14, targets(&rook).len());
    }

    #[test]
    fn test_knight_moves_in_l_shape() {
        let knight = piece_at(PieceKind::Knight, Color::White, B1);
        assert!(knight.is_move_valid(2, 2));
        assert!(knight.is_move_valid(0, 2));
        assert!(knight.is_move_valid(3, 1));
        assert!(!knight.is_move_valid(3, 3));
        assert!(!knight.is_move_valid(1, 3));

        let centered = piece_at(PieceKind::Knight, Color::Black, E5);
        assert_eq!(8, targets(&centered).len());
    }

    #[test]
    fn test_white_pawn_steps() {
        let pawn = piece_at(PieceKind::Pawn, Color::White, D2);
        assert!(pawn.is_move_valid(3, 2));
        assert!(pawn.is_move_valid(3, 3));
        assert!(!pawn.is_move_valid(3, 4));
        assert!(!pawn.is_move_valid(4, 2), "no diagonal captures");
        assert!(!pawn.is_move_valid(3, 0), "no backwards moves");

        let advanced = piece_at(PieceKind::Pawn, Color::White, D4);
        assert!(advanced.is_move_valid(3, 4));
        assert!(!advanced.is_move_valid(3, 5));
    }

    #[test]
    fn test_black_pawn_steps() {
        let pawn = piece_at(PieceKind::Pawn, Color::Black, E7);
        assert!(pawn.is_move_valid(4, 5));
        assert!(pawn.is_move_valid(4, 4));
        assert!(!pawn.is_move_valid(4, 7));
        assert!(!pawn.is_move_valid(4, 3));

        let advanced = piece_at(PieceKind::Pawn, Color::Black, E5);
        assert!(advanced.is_move_valid(4, 3));
        assert!(!advanced.is_move_valid(4, 2));
    }

    #[test]
    fn test_legality_ignores_board_bounds() {
        let rook = piece_at(PieceKind::Rook, Color::White, A1);
        assert!(rook.is_move_valid(0, 12));
        assert!(rook.is_move_valid(-3, 0));

        let pawn = piece_at(PieceKind::Pawn, Color::Black, A1);
        assert!(pawn.is_move_valid(0, -1));
    }

    #[test]
    fn test_extreme_destinations_do_not_overflow() {
        let extremes = [i8::MIN, -1, 0, 7, 8, i8::MAX];
        for &kind in PieceKind::ALL.iter() {
            for &color in Color::ALL.iter() {
                for &square in [A1, H8, D2, E7].iter() {
                    let piece = piece_at(kind, color, square);
                    for &dest_file in extremes.iter() {
                        for &dest_rank in extremes.iter() {
                            let _ = piece.is_move_valid(dest_file, dest_rank);
                        }
                    }
                }
            }
        }

        let rook = piece_at(PieceKind::Rook, Color::White, H8);
        assert!(rook.is_move_valid(i8::MIN, 7));
        assert!(!rook.is_move_valid(i8::MIN, i8::MAX));
        let king = piece_at(PieceKind::King, Color::White, A1);
        assert!(!king.is_move_valid(i8::MIN, 0));
        let bishop = piece_at(PieceKind::Bishop, Color::Black, A1);
        assert!(bishop.is_move_valid(i8::MAX, i8::MAX));
    }

    /// Straightforward restatement of each movement rule, used to check every
    /// source and destination pair on the board.
    fn expected_shape(kind: PieceKind, color: Color, from: Square, to: Square) -> bool {
        let df = to.file() as i32 - from.file() as i32;
        let dr = to.rank() as i32 - from.rank() as i32;
        let moved = df != 0 || dr != 0;
        match kind {
            PieceKind::King => moved && df.abs() <= 1 && dr.abs() <= 1,
            PieceKind::Rook => df == 0 || dr == 0,
            PieceKind::Bishop => df == dr || df == -dr,
            PieceKind::Queen => df == 0 || dr == 0 || df == dr || df == -dr,
            PieceKind::Knight => df * df + dr * dr == 5,
            PieceKind::Pawn => {
                let (step, home) = match color {
                    Color::White => (1, 1),
                    Color::Black => (-1, 6),
                };
                df == 0 && (dr == step || (from.rank() == home && dr == 2 * step))
            }
        }
    }

    #[test]
    fn test_every_square_pair_matches_movement_rules() {
        for &kind in PieceKind::ALL.iter() {
            for &color in Color::ALL.iter() {
                for from in Square::all() {
                    let piece = piece_at(kind, color, from);
                    for to in Square::all() {
                        assert_eq!(
                            expected_shape(kind, color, from, to),
                            piece.is_move_valid(to.file() as i8, to.rank() as i8),
                            "{} {} from {} to {}",
                            color,
                            kind,
                            from,
                            to
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_legality_depends_on_side_only_for_pawns() {
        for kind in PieceKind::ALL.iter().filter(|k| **k != PieceKind::Pawn) {
            let white = piece_at(*kind, Color::White, D4);
            let black = piece_at(*kind, Color::Black, D4);
            assert_eq!(targets(&white), targets(&black), "{}", kind);
        }
    }

    #[test]
    fn test_fen_chars_round_trip() {
        for kind in PieceKind::ALL.iter() {
            for color in Color::ALL.iter() {
                let c = kind.to_fen(*color);
                assert_eq!(Some((*kind, *color)), PieceKind::from_fen(c));
            }
        }
        assert_eq!(None, PieceKind::from_fen('x'));
    }
}
