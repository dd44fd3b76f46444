use crate::chess::{Bitboard, File, ParseFileError, ParseRankError, Rank};
use crate::util::Integer;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A square on the 6x6 board.
///
/// Squares are numbered in row-major order, starting from `a1`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1,
    A2, B2, C2, D2, E2, F2,
    A3, B3, C3, D3, E3, F3,
    A4, B4, C4, D4, E4, F4,
    A5, B5, C5, D5, E5, F5,
    A6, B6, C6, D6, E6, F6,
}

impl Square {
    /// Constructs [`Square`] from a pair of [`File`] and [`Rank`].
    #[inline(always)]
    pub fn new(f: File, r: Rank) -> Self {
        <Self as Integer>::new(f.get() + r.get() * 6)
    }

    /// This square's [`File`].
    #[inline(always)]
    pub fn file(&self) -> File {
        File::new(self.get() % 6)
    }

    /// This square's [`Rank`].
    #[inline(always)]
    pub fn rank(&self) -> Rank {
        Rank::new(self.get() / 6)
    }

    /// The square `df` files and `dr` ranks away, if still on the board.
    #[inline(always)]
    pub fn offset(&self, df: i8, dr: i8) -> Option<Self> {
        let f = self.file().get().checked_add(df)?.convert()?;
        let r = self.rank().get().checked_add(dr)?.convert()?;
        Some(Square::new(f, r))
    }

    /// Returns a [`Bitboard`] that only contains this square.
    #[inline(always)]
    pub fn bitboard(self) -> Bitboard {
        Bitboard::new(1 << self.get())
    }
}

unsafe impl Integer for Square {
    type Repr = i8;
    const MIN: Self::Repr = Square::A1 as _;
    const MAX: Self::Repr = Square::F6 as _;
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.file(), f)?;
        fmt::Display::fmt(&self.rank(), f)?;
        Ok(())
    }
}

/// Represents a `(row, column)` coordinate that lies outside of the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display("coordinate `({row}, {col})` is out of bounds")]
pub struct InvalidSquare {
    pub row: usize,
    pub col: usize,
}

/// Converts a `(row, column)` coordinate, where row `0` is [`Rank::First`].
impl TryFrom<(usize, usize)> for Square {
    type Error = InvalidSquare;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        let f = i8::try_from(col).ok().and_then(|c| c.convert());
        let r = i8::try_from(row).ok().and_then(|r| r.convert());
        match (f, r) {
            (Some(f), Some(r)) => Ok(Square::new(f, r)),
            _ => Err(InvalidSquare { row, col }),
        }
    }
}

/// The `(row, column)` coordinate of a square.
impl From<Square> for (usize, usize) {
    #[inline(always)]
    fn from(sq: Square) -> Self {
        (sq.rank().index(), sq.file().index())
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseSquareError {
    #[display("failed to parse square")]
    InvalidFile(ParseFileError),
    #[display("failed to parse square")]
    InvalidRank(ParseRankError),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);
        Ok(Square::new(s[..i].parse()?, s[i..].parse()?))
    }
}
