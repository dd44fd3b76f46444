use crate::chess::{File, Rank, Square};
use crate::util::Integer;
use derive_more::{Debug, *};
use std::fmt::{self, Write};
use std::ops::Not;

/// A set of squares on the board.
///
/// Only the lower 36 bits are meaningful, one per [`Square`].
#[derive(
    Default,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Deref,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(transparent)]
pub struct Bitboard(#[cfg_attr(test, strategy(0u64..1 << 36))] u64);

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('\n')?;
        for rank in Rank::iter().rev() {
            for file in File::iter() {
                let sq = Square::new(file, rank);
                f.write_char(if self.contains(sq) { '■' } else { '◻' })?;
                f.write_char(if file < File::F { ' ' } else { '\n' })?;
            }
        }

        Ok(())
    }
}

impl Bitboard {
    /// Constructs a [`Bitboard`] from its bits, ignoring those that don't map to a [`Square`].
    #[inline(always)]
    pub const fn new(bits: u64) -> Self {
        Bitboard(bits & Bitboard::full().0)
    }

    /// An empty board.
    #[inline(always)]
    pub const fn empty() -> Self {
        Bitboard(0)
    }

    /// A full board.
    #[inline(always)]
    pub const fn full() -> Self {
        Bitboard(0xFFFFFFFFF)
    }

    /// Leaps from a square by each of the steps.
    ///
    /// Steps that would land outside of the board are ignored.
    ///
    /// # Example
    /// ```
    /// # use lib::chess::*;
    /// assert_eq!(
    ///     Vec::from_iter(Bitboard::leap(Square::B1, &[(1, 2), (-1, 2), (-2, 1)])),
    ///     vec![Square::A3, Square::C3]
    /// );
    /// ```
    #[inline(always)]
    pub fn leap(sq: Square, steps: &[(i8, i8)]) -> Self {
        steps
            .iter()
            .filter_map(|&(df, dr)| sq.offset(df, dr))
            .fold(Bitboard::empty(), |bb, sq| bb.with(sq))
    }

    /// Slides from a square in the direction of each of the steps.
    ///
    /// Movement in a direction stops at the edge of the board or at the first occupied square,
    /// which is included in the result.
    ///
    /// # Example
    /// ```
    /// # use lib::chess::*;
    /// assert_eq!(
    ///     Vec::from_iter(Bitboard::slide(Square::B2, &[(1, 1), (-1, 0)], Square::D4.bitboard())),
    ///     vec![Square::A2, Square::C3, Square::D4]
    /// );
    /// ```
    #[inline(always)]
    pub fn slide(sq: Square, steps: &[(i8, i8)], occupied: Bitboard) -> Self {
        let mut bitboard = Bitboard::empty();
        for &(df, dr) in steps {
            let mut next = sq.offset(df, dr);
            while let Some(sq) = next {
                bitboard = bitboard.with(sq);
                next = match occupied.contains(sq) {
                    false => sq.offset(df, dr),
                    true => None,
                };
            }
        }

        bitboard
    }

    /// The number of [`Square`]s in the set.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as _
    }

    /// Whether the board is empty.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this [`Square`] is in the set.
    #[inline(always)]
    pub fn contains(&self, sq: Square) -> bool {
        !(*self & sq.bitboard()).is_empty()
    }

    /// Adds a [`Square`] to this bitboard.
    #[inline(always)]
    pub fn with(&self, sq: Square) -> Self {
        *self | sq.bitboard()
    }

    /// Removes a [`Square`]s from this bitboard.
    #[inline(always)]
    pub fn without(&self, sq: Square) -> Self {
        *self & !sq.bitboard()
    }

    /// An iterator over the [`Square`]s in this bitboard.
    #[inline(always)]
    pub fn iter(&self) -> Squares {
        Squares::new(*self)
    }
}

/// The set of [`Square`]s not in this bitboard.
impl Not for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Bitboard(!self.0 & Bitboard::full().0)
    }
}

impl From<File> for Bitboard {
    #[inline(always)]
    fn from(f: File) -> Self {
        f.bitboard()
    }
}

impl From<Rank> for Bitboard {
    #[inline(always)]
    fn from(r: Rank) -> Self {
        r.bitboard()
    }
}

impl From<Square> for Bitboard {
    #[inline(always)]
    fn from(sq: Square) -> Self {
        sq.bitboard()
    }
}

impl FromIterator<Square> for Bitboard {
    #[inline(always)]
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter().fold(Bitboard::empty(), |bb, sq| bb.with(sq))
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = Squares;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        Squares::new(self)
    }
}

/// An iterator over the [`Square`]s in a [`Bitboard`], in ascending order.
#[derive(Debug, Constructor)]
pub struct Squares(Bitboard);

impl Iterator for Squares {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            let sq = <Square as Integer>::new(self.0.trailing_zeros() as _);
            self.0 ^= sq.bitboard();
            Some(sq)
        }
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl ExactSizeIterator for Squares {
    #[inline(always)]
    fn len(&self) -> usize {
        self.0.len()
    }
}
