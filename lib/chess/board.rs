use crate::{chess::*, util::Integer};
use arrayvec::ArrayString;
use derive_more::{Debug, Display, Error};
use std::fmt::{self, Write};
use std::{mem, ops::Index, str::FromStr};

/// The 6x6 board and the side to move.
///
/// This type places no constraints on the arrangement of pieces,
/// see [`Position`] for a board that is guaranteed to be playable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[debug("Board({self})")]
pub struct Board {
    cells: [Option<Piece>; 36],
    pub turn: Side,
}

/// The initial arrangement, with White to move.
impl Default for Board {
    fn default() -> Self {
        use Role::*;

        let mut board = Board::empty();
        let back = [Rook, Knight, Queen, King, Bishop, Star];
        for side in Side::iter() {
            for (file, role) in File::iter().zip(back) {
                board.set(Square::new(file, Rank::back(side)), Some(Piece::new(role, side)));
                board.set(Square::new(file, Rank::pawns(side)), Some(Piece::new(Pawn, side)));
            }
        }

        board
    }
}

impl Board {
    /// A board with no pieces, with White to move.
    #[inline(always)]
    pub fn empty() -> Self {
        Board {
            cells: [None; 36],
            turn: Side::White,
        }
    }

    /// Places a piece on a [`Square`], or clears it, returning what was there before.
    #[inline(always)]
    pub fn set(&mut self, sq: Square, p: Option<Piece>) -> Option<Piece> {
        mem::replace(&mut self.cells[sq.get() as usize], p)
    }

    /// An iterator over all pieces on the board, in [`Square`] order.
    #[inline(always)]
    pub fn iter(&self) -> impl Iterator<Item = (Piece, Square)> + '_ {
        Square::iter().filter_map(|sq| Some((self[sq]?, sq)))
    }

    /// [`Square`]s occupied.
    #[inline(always)]
    pub fn occupied(&self) -> Bitboard {
        self.iter().map(|(_, sq)| sq).collect()
    }

    /// [`Square`]s occupied by a [`Side`].
    #[inline(always)]
    pub fn by_side(&self, s: Side) -> Bitboard {
        self.iter()
            .filter(|(p, _)| p.side() == s)
            .map(|(_, sq)| sq)
            .collect()
    }

    /// [`Square`]s occupied by a [`Piece`].
    #[inline(always)]
    pub fn by_piece(&self, p: Piece) -> Bitboard {
        self.iter()
            .filter(|&(q, _)| p == q)
            .map(|(_, sq)| sq)
            .collect()
    }

    /// [`Square`] occupied by the king of a [`Side`], if any.
    #[inline(always)]
    pub fn king(&self, s: Side) -> Option<Square> {
        self.by_piece(Piece::new(Role::King, s)).into_iter().next()
    }

    /// Whether the king of a [`Side`] is on the board and attacked by the opponent.
    #[inline(always)]
    pub fn in_check(&self, s: Side) -> bool {
        self.king(s).is_some_and(|k| self.is_attacked(k, !s))
    }

    /// Plays a [`Move`] without checking whether it is legal, returning the captured piece.
    ///
    /// The piece on the source square replaces whatever was on the destination square.
    /// A pawn that lands on its promotion [`Rank`] becomes a [`Role::Joker`].
    /// Finally, the turn passes to the other side.
    ///
    /// Nothing happens if the source square is empty.
    pub fn play_unchecked(&mut self, m: Move) -> Option<Piece> {
        let piece = self.set(m.whence(), None)?;

        let piece = match piece.role() {
            Role::Pawn if m.whither().rank() == Rank::promotion(piece.side()) => {
                Piece::new(Role::Joker, piece.side())
            }

            _ => piece,
        };

        self.turn = !self.turn;
        self.set(m.whither(), Some(piece))
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.cells[sq.get() as usize]
    }
}

/// Prints the board in a compact notation derived from [FEN].
///
/// Ranks are listed from the sixth to the first, followed by the side to move.
///
/// [FEN]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            let mut skip = 0;
            for file in File::iter() {
                let mut buffer = ArrayString::<2>::new();

                match self[Square::new(file, rank)] {
                    None => skip += 1,
                    Some(p) => write!(buffer, "{}", p)?,
                }

                if !buffer.is_empty() && skip > 0 {
                    write!(f, "{}", skip)?;
                    skip = 0;
                }

                f.write_str(&buffer)?;
            }

            if skip > 0 {
                write!(f, "{}", skip)?;
            }

            f.write_char(if rank == Rank::First { ' ' } else { '/' })?;
        }

        match self.turn {
            Side::White => f.write_char('w'),
            Side::Black => f.write_char('b'),
        }
    }
}

/// The reason why parsing the board failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseFenError {
    #[display("failed to parse piece placement")]
    InvalidPlacement,
    #[display("failed to parse side to move")]
    InvalidSideToMove,
    #[display("unspecified syntax error")]
    InvalidSyntax,
}

impl FromStr for Board {
    type Err = ParseFenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<_> = s.split(' ').collect();
        let [placement, turn] = &fields[..] else {
            return Err(ParseFenError::InvalidSyntax);
        };

        let ranks: Vec<_> = placement.split('/').rev().collect();
        if ranks.len() != Rank::iter().len() {
            return Err(ParseFenError::InvalidPlacement);
        }

        let mut board = Board::empty();
        for (rank, segment) in Rank::iter().zip(ranks) {
            let mut file = 0;
            for c in segment.chars() {
                let mut buffer = [0; 4];

                if let Some(skip @ 1..=6) = c.to_digit(10) {
                    file += skip as i8;
                } else if let Ok(p) = Piece::from_str(c.encode_utf8(&mut buffer)) {
                    let Some(f) = file.convert() else {
                        return Err(ParseFenError::InvalidPlacement);
                    };

                    board.set(Square::new(f, rank), Some(p));
                    file += 1;
                } else {
                    return Err(ParseFenError::InvalidPlacement);
                }

                if file > File::MAX + 1 {
                    return Err(ParseFenError::InvalidPlacement);
                }
            }

            if file != File::MAX + 1 {
                return Err(ParseFenError::InvalidPlacement);
            }
        }

        board.turn = match *turn {
            "w" => Side::White,
            "b" => Side::Black,
            _ => return Err(ParseFenError::InvalidSideToMove),
        };

        Ok(board)
    }
}
