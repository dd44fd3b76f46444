use crate::util::Integer;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops::Not;

/// The side a [`Piece`][`crate::chess::Piece`] belongs to.
#[derive(
    Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Side {
    #[display("white")]
    White,
    #[display("black")]
    Black,
}

unsafe impl Integer for Side {
    type Repr = u8;
    const MIN: Self::Repr = Side::White as _;
    const MAX: Self::Repr = Side::Black as _;
}

/// The opposite side.
impl Not for Side {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}
