use crate::chess::{Role, Side};
use crate::util::Integer;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Formatter};
use std::str::FromStr;

/// A [`Role`] of a certain [`Side`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Piece {
    WhitePawn,
    BlackPawn,
    WhiteKnight,
    BlackKnight,
    WhiteBishop,
    BlackBishop,
    WhiteRook,
    BlackRook,
    WhiteQueen,
    BlackQueen,
    WhiteKing,
    BlackKing,
    WhiteStar,
    BlackStar,
    WhiteJoker,
    BlackJoker,
}

impl Piece {
    /// Constructs [`Piece`] from a pair of [`Role`] and [`Side`].
    #[inline(always)]
    pub fn new(r: Role, s: Side) -> Self {
        <Self as Integer>::new(r.get() * 2 + s.get())
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        Role::new(self.get() / 2)
    }

    /// This piece's [`Side`].
    #[inline(always)]
    pub fn side(&self) -> Side {
        Side::new(self.get() % 2)
    }
}

unsafe impl Integer for Piece {
    type Repr = u8;
    const MIN: Self::Repr = Piece::WhitePawn as _;
    const MAX: Self::Repr = Piece::BlackJoker as _;
}

/// Prints the piece's letter, in upper case for [`Side::White`].
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let letter = self.role().to_string();
        match self.side() {
            Side::White => f.write_str(&letter.to_ascii_uppercase()),
            Side::Black => f.write_str(&letter),
        }
    }
}

/// The reason why parsing the piece failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display("failed to parse piece, expected one of `PNBRQKSJpnbrqksj`")]
pub struct ParsePieceError;

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        let role: Role = lower.parse().map_err(|_| ParsePieceError)?;
        let side = if lower == s { Side::Black } else { Side::White };
        Ok(Piece::new(role, side))
    }
}
