use crate::chess::{Bitboard, Side};
use crate::util::Integer;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::{ops::Sub, str::FromStr};

/// A row on the board.
///
/// [`Rank::First`] is White's back rank and [`Rank::Sixth`] is Black's.
#[derive(
    Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
pub enum Rank {
    #[display("1")]
    First,
    #[display("2")]
    Second,
    #[display("3")]
    Third,
    #[display("4")]
    Fourth,
    #[display("5")]
    Fifth,
    #[display("6")]
    Sixth,
}

impl Rank {
    /// Returns a [`Bitboard`] that only contains this rank.
    #[inline(always)]
    pub fn bitboard(self) -> Bitboard {
        Bitboard::new(0b111111 << (self.get() * 6))
    }

    /// The row index, starting from zero at [`Rank::First`].
    #[inline(always)]
    pub fn index(self) -> usize {
        self.get() as _
    }

    /// The rank a [`Side`]'s pieces start on.
    #[inline(always)]
    pub fn back(side: Side) -> Self {
        match side {
            Side::White => Rank::First,
            Side::Black => Rank::Sixth,
        }
    }

    /// The rank a [`Side`]'s pawns start on.
    #[inline(always)]
    pub fn pawns(side: Side) -> Self {
        match side {
            Side::White => Rank::Second,
            Side::Black => Rank::Fifth,
        }
    }

    /// The rank on which a [`Side`]'s pawns promote, i.e. the opponent's back rank.
    #[inline(always)]
    pub fn promotion(side: Side) -> Self {
        Rank::back(!side)
    }
}

unsafe impl Integer for Rank {
    type Repr = i8;
    const MIN: Self::Repr = Rank::First as _;
    const MAX: Self::Repr = Rank::Sixth as _;
}

impl Sub for Rank {
    type Output = i8;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.get() - rhs.get()
    }
}

/// The reason why parsing [`Rank`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(
    "failed to parse rank, expected digit in the range `({}..={})`",
    Rank::First,
    Rank::Sixth
)]
pub struct ParseRankError;

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Rank::First),
            "2" => Ok(Rank::Second),
            "3" => Ok(Rank::Third),
            "4" => Ok(Rank::Fourth),
            "5" => Ok(Rank::Fifth),
            "6" => Ok(Rank::Sixth),
            _ => Err(ParseRankError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{File, Square};
    use std::mem::size_of;
    use test_strategy::proptest;

    #[test]
    fn rank_guarantees_zero_value_optimization() {
        assert_eq!(size_of::<Option<Rank>>(), size_of::<Rank>());
    }

    #[proptest]
    fn subtracting_ranks_returns_distance(a: Rank, b: Rank) {
        assert_eq!(a - b, a.get() - b.get());
    }

    #[proptest]
    fn rank_has_an_equivalent_bitboard(r: Rank) {
        assert_eq!(
            Vec::from_iter(r.bitboard()),
            Vec::from_iter(File::iter().map(|f| Square::new(f, r)))
        );
    }

    #[proptest]
    fn pawns_promote_on_the_opponents_back_rank(s: Side) {
        assert_eq!(Rank::promotion(s), Rank::back(!s));
        assert_ne!(Rank::promotion(s), Rank::pawns(s));
    }

    #[proptest]
    fn pawns_start_next_to_the_back_rank(s: Side) {
        assert_eq!((Rank::pawns(s) - Rank::back(s)).abs(), 1);
    }

    #[proptest]
    fn parsing_printed_rank_is_an_identity(r: Rank) {
        assert_eq!(r.to_string().parse(), Ok(r));
    }

    #[proptest]
    fn parsing_rank_fails_if_not_digit_between_1_and_6(
        #[filter(!('1'..='6').contains(&#c))] c: char,
    ) {
        assert_eq!(c.to_string().parse::<Rank>(), Err(ParseRankError));
    }

    #[proptest]
    fn parsing_rank_fails_if_length_not_one(#[filter(#s.len() != 1)] s: String) {
        assert_eq!(s.parse::<Rank>(), Err(ParseRankError));
    }
}
