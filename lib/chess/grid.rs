use crate::chess::{Board, Piece, Position, Role, Side, Square};
use crate::util::Integer;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A numeric encoding of the [`Board`], indexed by `[row][column]`.
///
/// Row `0` is White's back rank.
/// Empty squares are `0` and White's pieces are encoded as
///
/// | Pawn | Rook | Knight | Bishop | Queen | King | Star | Joker |
/// |------|------|--------|--------|-------|------|------|-------|
/// | 1    | 2    | 3      | 4      | 5     | 6    | 7    | 8     |
///
/// Black's pieces use the same codes offset by [`Grid::BLACK`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Grid {
    pub cells: [[u8; 6]; 6],
    pub turn: Side,
}

impl Grid {
    /// The offset between the codes of White's and Black's pieces.
    pub const BLACK: u8 = 8;

    /// The code of a [`Piece`].
    pub fn encode(p: Piece) -> u8 {
        let code = match p.role() {
            Role::Pawn => 1,
            Role::Rook => 2,
            Role::Knight => 3,
            Role::Bishop => 4,
            Role::Queen => 5,
            Role::King => 6,
            Role::Star => 7,
            Role::Joker => 8,
        };

        match p.side() {
            Side::White => code,
            Side::Black => code + Grid::BLACK,
        }
    }

    /// The [`Piece`] for a code, if any.
    pub fn decode(code: u8) -> Option<Piece> {
        let (side, code) = match code {
            1..=8 => (Side::White, code),
            9..=16 => (Side::Black, code - Grid::BLACK),
            _ => return None,
        };

        let role = match code {
            1 => Role::Pawn,
            2 => Role::Rook,
            3 => Role::Knight,
            4 => Role::Bishop,
            5 => Role::Queen,
            6 => Role::King,
            7 => Role::Star,
            _ => Role::Joker,
        };

        Some(Piece::new(role, side))
    }
}

impl From<&Board> for Grid {
    fn from(board: &Board) -> Self {
        let mut cells = [[0; 6]; 6];
        for (p, sq) in board.iter() {
            let (row, col): (usize, usize) = sq.into();
            cells[row][col] = Grid::encode(p);
        }

        Grid {
            cells,
            turn: board.turn,
        }
    }
}

impl From<Position> for Grid {
    fn from(pos: Position) -> Self {
        Grid::from(&*pos)
    }
}

/// The reason why decoding [`Board`] from a [`Grid`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display("unknown piece code `{code}` at `({row}, {col})`")]
pub struct DecodeGridError {
    pub row: usize,
    pub col: usize,
    pub code: u8,
}

impl TryFrom<Grid> for Board {
    type Error = DecodeGridError;

    fn try_from(grid: Grid) -> Result<Self, Self::Error> {
        let mut board = Board::empty();
        board.turn = grid.turn;

        for sq in Square::iter() {
            let (row, col) = sq.into();
            let code = grid.cells[row][col];
            let p = match code {
                0 => None,
                _ => Some(Grid::decode(code).ok_or(DecodeGridError { row, col, code })?),
            };

            board.set(sq, p);
        }

        Ok(board)
    }
}
