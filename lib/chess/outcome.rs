use crate::chess::Side;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// One of the possible outcomes of a game.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Outcome {
    /// The side to move is in check and has no legal moves.
    #[display("{_0} is checkmated")]
    Checkmate(Side),

    /// The side to move is not in check but has no legal moves.
    #[display("stalemate")]
    Stalemate,
}

impl Outcome {
    /// Whether the outcome is a [draw] and neither side has won.
    ///
    /// [draw]: https://www.chessprogramming.org/Draw
    pub fn is_draw(&self) -> bool {
        !self.is_decisive()
    }

    /// Whether the outcome is a decisive and one of the sides has won.
    pub fn is_decisive(&self) -> bool {
        matches!(self, Outcome::Checkmate(_))
    }

    /// The winning side, if the outcome is [decisive](`Self::is_decisive`).
    pub fn winner(&self) -> Option<Side> {
        match *self {
            Outcome::Checkmate(s) => Some(!s),
            Outcome::Stalemate => None,
        }
    }
}
