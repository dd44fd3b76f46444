use crate::chess::{Board, Move, Outcome, ParseFenError, Piece, Rank, Role, Side, Square};
use crate::util::Integer;
use derive_more::{Debug, Deref, Display, Error, From};
use proptest::sample::{Selector, SelectorStrategy};
use proptest::{prelude::*, strategy::Map};
use std::{ops::Range, str::FromStr};
use tracing::instrument;

/// Represents an illegal [`Move`] in a given [`Position`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display("move `{_0}` is illegal in this position")]
pub struct IllegalMove(#[error(not(source))] pub Move);

/// The reason why a [`Board`] is not a playable [`Position`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum IllegalPosition {
    #[display("{_0} has no king")]
    NoKingPresent(#[error(not(source))] Side),
    #[display("{_0} has multiple kings")]
    TooManyKings(#[error(not(source))] Side),
    #[display("there is an unpromoted pawn on `{_0}`")]
    UnpromotedPawn(#[error(not(source))] Square),
    #[display("the side not to move is in check")]
    OpponentInCheck,
}

/// The reason why parsing [`Position`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParsePositionError {
    #[display("{_0}")]
    InvalidFen(ParseFenError),
    #[display("{_0}")]
    IllegalPosition(IllegalPosition),
}

/// The current position on the board.
///
/// This type guarantees that it only holds playable positions,
/// that is, each side has exactly one king and the side not to move is not in check.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash, Deref)]
#[debug("Position({self})")]
#[display("{_0}")]
pub struct Position(Board);

impl Arbitrary for Position {
    type Parameters = ();
    type Strategy = Map<(Range<usize>, SelectorStrategy), fn((usize, Selector)) -> Position>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (0..64, any::<Selector>()).prop_map(|(moves, selector)| {
            let mut pos = Position::default();

            for _ in 0..moves {
                match selector.try_select(pos.moves()) {
                    None => break,
                    Some(m) => {
                        pos.0.play_unchecked(m);
                    }
                }
            }

            pos
        })
    }
}

impl Position {
    /// The side to move.
    #[inline(always)]
    pub fn turn(&self) -> Side {
        self.0.turn
    }

    /// Whether the side to move is in [check].
    ///
    /// [check]: https://www.chessprogramming.org/Check
    pub fn is_check(&self) -> bool {
        self.in_check(self.turn())
    }

    /// Whether this position is a [checkmate].
    ///
    /// [checkmate]: https://www.chessprogramming.org/Checkmate
    pub fn is_checkmate(&self) -> bool {
        self.is_check() && self.moves().next().is_none()
    }

    /// Whether this position is a [stalemate].
    ///
    /// [stalemate]: https://www.chessprogramming.org/Stalemate
    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && self.moves().next().is_none()
    }

    /// The [`Outcome`] of the game in case this position is final.
    #[instrument(level = "trace", skip(self), fields(%self), ret)]
    pub fn outcome(&self) -> Option<Outcome> {
        if self.moves().next().is_some() {
            None
        } else if self.is_check() {
            Some(Outcome::Checkmate(self.turn()))
        } else {
            Some(Outcome::Stalemate)
        }
    }

    /// An iterator over the legal [`Move`]s that can be played in this position.
    ///
    /// Moves are grouped by source [`Square`] and then ordered by destination.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.by_side(self.turn())
            .into_iter()
            .flat_map(move |wc| {
                let targets = self.pseudo_legal(wc).into_iter();
                targets.map(move |wt| Move::new(wc, wt))
            })
            .filter(move |&m| self.is_safe(m))
    }

    /// Whether a [`Move`] can be played in this position.
    pub fn is_legal(&self, m: Move) -> bool {
        self[m.whence()].is_some_and(|p| p.side() == self.turn())
            && self.pseudo_legal(m.whence()).contains(m.whither())
            && self.is_safe(m)
    }

    /// Plays a [`Move`] if legal in this position, returning the captured piece.
    #[instrument(level = "trace", skip(self), fields(%self), ret, err)]
    pub fn play(&mut self, m: Move) -> Result<Option<Piece>, IllegalMove> {
        if !self.is_legal(m) {
            return Err(IllegalMove(m));
        }

        Ok(self.0.play_unchecked(m))
    }

    /// The position after a [`Move`], leaving this one untouched.
    pub fn apply(&self, m: Move) -> Result<Self, IllegalMove> {
        let mut next = *self;
        next.play(m)?;
        Ok(next)
    }

    // Whether the mover's king survives a pseudo-legal move.
    fn is_safe(&self, m: Move) -> bool {
        let mut next = self.0;
        next.play_unchecked(m);
        !next.in_check(self.turn())
    }
}

impl TryFrom<Board> for Position {
    type Error = IllegalPosition;

    fn try_from(board: Board) -> Result<Self, Self::Error> {
        for side in Side::iter() {
            match board.by_piece(Piece::new(Role::King, side)).len() {
                0 => return Err(IllegalPosition::NoKingPresent(side)),
                1 => {}
                _ => return Err(IllegalPosition::TooManyKings(side)),
            }

            let pawns = board.by_piece(Piece::new(Role::Pawn, side));
            if let Some(sq) = (pawns & Rank::promotion(side).bitboard()).into_iter().next() {
                return Err(IllegalPosition::UnpromotedPawn(sq));
            }
        }

        if board.in_check(!board.turn) {
            return Err(IllegalPosition::OpponentInCheck);
        }

        Ok(Position(board))
    }
}

impl From<Position> for Board {
    #[inline(always)]
    fn from(pos: Position) -> Self {
        pos.0
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    #[instrument(level = "trace", err)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let board: Board = s.parse()?;
        Ok(Position::try_from(board)?)
    }
}
