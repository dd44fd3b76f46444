use crate::chess::{InvalidSquare, Square};
use derive_more::{Debug, Display, Error, From};
use serde::{Deserialize, Serialize};

/// A move in [pure coordinate notation].
///
/// Promotion is implied by the destination, so a move is fully described by its squares.
///
/// [pure coordinate notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation#Pure_coordinate_notation
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[cfg_attr(test, filter(#self.0 != #self.1))]
#[debug("Move({self})")]
#[display("{_0}{_1}")]
pub struct Move(Square, Square);

impl Move {
    /// Constructs a [`Move`] from its source and destination [`Square`]s.
    #[inline(always)]
    pub fn new(whence: Square, whither: Square) -> Self {
        debug_assert_ne!(whence, whither);
        Move(whence, whither)
    }

    /// The source [`Square`].
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.1
    }
}

/// The reason why decoding [`Move`] from coordinates failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error, From)]
pub enum DecodeMoveError {
    #[display("not a valid move")]
    InvalidSquare(InvalidSquare),
    #[display("source and destination squares must differ")]
    NullMove,
}

/// Decodes a move from `[from_row, from_col, to_row, to_col]`.
impl TryFrom<[usize; 4]> for Move {
    type Error = DecodeMoveError;

    fn try_from([fr, fc, tr, tc]: [usize; 4]) -> Result<Self, Self::Error> {
        let whence = Square::try_from((fr, fc))?;
        let whither = Square::try_from((tr, tc))?;
        if whence == whither {
            return Err(DecodeMoveError::NullMove);
        }

        Ok(Move(whence, whither))
    }
}

/// Encodes a move as `[from_row, from_col, to_row, to_col]`.
impl From<Move> for [usize; 4] {
    fn from(m: Move) -> Self {
        let (fr, fc) = m.whence().into();
        let (tr, tc) = m.whither().into();
        [fr, fc, tr, tc]
    }
}
