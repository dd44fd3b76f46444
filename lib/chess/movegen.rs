use crate::chess::{Bitboard, Board, Piece, Rank, Role, Side, Square};

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const KING: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const KNIGHT: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const STAR: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (2, 0),
    (-2, 0),
    (0, 2),
    (0, -2),
];

// Every offset of the 5x5 block centered on the piece.
const JOKER: [(i8, i8); 24] = {
    let mut steps = [(0, 0); 24];
    let mut i = 0;
    let mut df = -2;
    while df <= 2 {
        let mut dr = -2;
        while dr <= 2 {
            if df != 0 || dr != 0 {
                steps[i] = (df, dr);
                i += 1;
            }

            dr += 1;
        }

        df += 1;
    }

    steps
};

impl Board {
    /// The [pseudo-legal] destinations of the piece on a [`Square`].
    ///
    /// These obey the piece's movement pattern and never land on a friendly piece,
    /// but may leave the mover's own king attacked.
    /// The result is empty if the square is empty.
    ///
    /// [pseudo-legal]: https://www.chessprogramming.org/Pseudo-Legal_Move
    pub fn pseudo_legal(&self, sq: Square) -> Bitboard {
        match self[sq] {
            None => Bitboard::empty(),
            Some(p) => reach(sq, p, self.by_side(p.side()), self.by_side(!p.side())),
        }
    }

    /// Whether a [`Square`] is reached by any pseudo-legal move of a [`Side`].
    ///
    /// Whether those moves would leave the attacker's own king in check is irrelevant.
    pub fn is_attacked(&self, sq: Square, by: Side) -> bool {
        let ours = self.by_side(by);
        let theirs = self.by_side(!by);

        self.iter()
            .filter(|(p, _)| p.side() == by)
            .any(|(p, wc)| reach(wc, p, ours, theirs).contains(sq))
    }
}

fn reach(sq: Square, piece: Piece, ours: Bitboard, theirs: Bitboard) -> Bitboard {
    let occupied = ours | theirs;

    let reach = match piece.role() {
        Role::Pawn => pawn(sq, piece.side(), occupied, theirs),
        Role::Knight => Bitboard::leap(sq, &KNIGHT),
        Role::Bishop => Bitboard::slide(sq, &DIAGONAL, occupied),
        Role::Rook => Bitboard::slide(sq, &ORTHOGONAL, occupied),
        Role::Queen => Bitboard::slide(sq, &KING, occupied),
        Role::King => Bitboard::leap(sq, &KING),
        Role::Star => Bitboard::leap(sq, &STAR),
        Role::Joker => Bitboard::leap(sq, &JOKER),
    };

    reach & !ours
}

fn pawn(sq: Square, side: Side, occupied: Bitboard, theirs: Bitboard) -> Bitboard {
    let dr = match side {
        Side::White => 1,
        Side::Black => -1,
    };

    let mut reach = Bitboard::empty();

    if let Some(one) = sq.offset(0, dr).filter(|&s| !occupied.contains(s)) {
        reach = reach.with(one);
        if sq.rank() == Rank::pawns(side) {
            if let Some(two) = one.offset(0, dr).filter(|&s| !occupied.contains(s)) {
                reach = reach.with(two);
            }
        }
    }

    let captures = Bitboard::leap(sq, &[(-1, dr), (1, dr)]);
    reach | (captures & theirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::Integer;
    use test_strategy::proptest;

    fn lone(p: Piece, sq: Square) -> Board {
        let mut board = Board::empty();
        board.set(sq, Some(p));
        board
    }

    fn chebyshev(a: Square, b: Square) -> i8 {
        (a.file() - b.file()).abs().max((a.rank() - b.rank()).abs())
    }

    #[test]
    fn joker_steps_cover_the_five_by_five_block() {
        for (i, a) in JOKER.iter().enumerate() {
            assert_ne!(*a, (0, 0));
            assert!(a.0.abs() <= 2 && a.1.abs() <= 2);
            assert!(!JOKER[i + 1..].contains(a));
        }
    }

    #[proptest]
    fn empty_square_has_no_moves(b: Board, #[filter(#b[#sq].is_none())] sq: Square) {
        assert_eq!(b.pseudo_legal(sq), Bitboard::empty());
    }

    #[proptest]
    fn pieces_never_move_onto_friendly_pieces(
        b: Board,
        #[filter(#b[#sq].is_some())] sq: Square,
    ) {
        let side = b[sq].map(|p| p.side()).unwrap();
        assert_eq!(b.pseudo_legal(sq) & b.by_side(side), Bitboard::empty());
    }

    #[proptest]
    fn pieces_never_stay_in_place(b: Board, sq: Square) {
        assert!(!b.pseudo_legal(sq).contains(sq));
    }

    #[proptest]
    fn pawn_never_moves_backwards(
        b: Board,
        #[filter(#b[#sq].is_some_and(|p| p.role() == Role::Pawn))] sq: Square,
    ) {
        let side = b[sq].map(|p| p.side()).unwrap();
        for t in b.pseudo_legal(sq) {
            match side {
                Side::White => assert!(t.rank() > sq.rank()),
                Side::Black => assert!(t.rank() < sq.rank()),
            }
        }
    }

    #[proptest]
    fn pawn_only_moves_diagonally_to_capture(
        b: Board,
        #[filter(#b[#sq].is_some_and(|p| p.role() == Role::Pawn))] sq: Square,
    ) {
        let side = b[sq].map(|p| p.side()).unwrap();
        for t in b.pseudo_legal(sq) {
            if t.file() != sq.file() {
                assert_eq!(b[t].map(|p| p.side()), Some(!side));
            } else {
                assert_eq!(b[t], None);
            }
        }
    }

    #[test]
    fn pawn_steps_once_or_twice_from_its_starting_rank() {
        let b = lone(Piece::WhitePawn, Square::C2);
        assert_eq!(
            Vec::from_iter(b.pseudo_legal(Square::C2)),
            vec![Square::C3, Square::C4]
        );

        let b = lone(Piece::BlackPawn, Square::C5);
        assert_eq!(
            Vec::from_iter(b.pseudo_legal(Square::C5)),
            vec![Square::C3, Square::C4]
        );
    }

    #[test]
    fn pawn_steps_once_beyond_its_starting_rank() {
        let b = lone(Piece::WhitePawn, Square::C3);
        assert_eq!(Vec::from_iter(b.pseudo_legal(Square::C3)), vec![Square::C4]);
    }

    #[test]
    fn pawn_cannot_jump_over_a_blocker() {
        let mut b = lone(Piece::WhitePawn, Square::C2);
        b.set(Square::C3, Some(Piece::BlackKnight));
        assert_eq!(b.pseudo_legal(Square::C2), Bitboard::empty());

        let mut b = lone(Piece::WhitePawn, Square::C2);
        b.set(Square::C4, Some(Piece::BlackKnight));
        assert_eq!(Vec::from_iter(b.pseudo_legal(Square::C2)), vec![Square::C3]);
    }

    #[test]
    fn pawn_captures_diagonally_forward() {
        let mut b = lone(Piece::BlackPawn, Square::D4);
        b.set(Square::C3, Some(Piece::WhiteRook));
        b.set(Square::E3, Some(Piece::BlackRook));
        b.set(Square::E5, Some(Piece::WhiteRook));
        assert_eq!(
            Vec::from_iter(b.pseudo_legal(Square::D4)),
            vec![Square::C3, Square::D3]
        );
    }

    #[test]
    fn knight_leaps_in_l_shapes() {
        let mut b = lone(Piece::WhiteKnight, Square::B1);
        b.set(Square::A2, Some(Piece::WhitePawn));
        b.set(Square::B2, Some(Piece::WhitePawn));
        b.set(Square::D2, Some(Piece::BlackPawn));
        assert_eq!(
            Vec::from_iter(b.pseudo_legal(Square::B1)),
            vec![Square::D2, Square::A3, Square::C3]
        );
    }

    #[test]
    fn bishop_slides_diagonally_until_blocked() {
        let mut b = lone(Piece::WhiteBishop, Square::C3);
        b.set(Square::D4, Some(Piece::BlackPawn));
        b.set(Square::B2, Some(Piece::WhitePawn));
        assert_eq!(
            Vec::from_iter(b.pseudo_legal(Square::C3)),
            vec![Square::E1, Square::D2, Square::B4, Square::D4, Square::A5]
        );
    }

    #[test]
    fn rook_slides_orthogonally_until_blocked() {
        let mut b = lone(Piece::BlackRook, Square::A6);
        b.set(Square::A4, Some(Piece::WhitePawn));
        b.set(Square::D6, Some(Piece::BlackKing));
        assert_eq!(
            Vec::from_iter(b.pseudo_legal(Square::A6)),
            vec![Square::A4, Square::A5, Square::B6, Square::C6]
        );
    }

    #[proptest]
    fn queen_moves_like_rook_and_bishop_combined(mut b: Board, sq: Square, s: Side) {
        b.set(sq, Some(Piece::new(Role::Rook, s)));
        let rook = b.pseudo_legal(sq);
        b.set(sq, Some(Piece::new(Role::Bishop, s)));
        let bishop = b.pseudo_legal(sq);
        b.set(sq, Some(Piece::new(Role::Queen, s)));
        assert_eq!(b.pseudo_legal(sq), rook | bishop);
    }

    #[proptest]
    fn king_moves_to_adjacent_squares(s: Side, sq: Square) {
        let b = lone(Piece::new(Role::King, s), sq);
        let reach = b.pseudo_legal(sq);
        assert_eq!(
            reach,
            Bitboard::from_iter(Square::iter().filter(|&t| chebyshev(sq, t) == 1))
        );
    }

    #[test]
    fn star_moves_one_diagonal_or_two_orthogonal() {
        let b = lone(Piece::WhiteStar, Square::C3);
        assert_eq!(
            Vec::from_iter(b.pseudo_legal(Square::C3)),
            vec![
                Square::C1,
                Square::B2,
                Square::D2,
                Square::A3,
                Square::E3,
                Square::B4,
                Square::D4,
                Square::C5
            ]
        );
    }

    #[test]
    fn star_leaps_over_occupied_squares() {
        let mut b = lone(Piece::WhiteStar, Square::F1);
        b.set(Square::F2, Some(Piece::WhitePawn));
        b.set(Square::E1, Some(Piece::WhiteBishop));
        b.set(Square::E2, Some(Piece::WhitePawn));
        assert_eq!(
            Vec::from_iter(b.pseudo_legal(Square::F1)),
            vec![Square::D1, Square::F3]
        );
    }

    #[test]
    fn joker_on_c3_reaches_every_square_within_two_steps() {
        let mut b = lone(Piece::WhiteJoker, Square::C3);
        for sq in [Square::B2, Square::C2, Square::D2, Square::B3, Square::D3] {
            b.set(sq, Some(Piece::BlackPawn));
        }

        for sq in [Square::B4, Square::C4, Square::D4] {
            b.set(sq, Some(Piece::BlackKnight));
        }

        let reach = b.pseudo_legal(Square::C3);
        assert_eq!(reach.len(), 24);
        let expected = Square::iter().filter(|&t| t != Square::C3 && chebyshev(Square::C3, t) <= 2);
        assert_eq!(reach, Bitboard::from_iter(expected));
    }

    #[proptest]
    fn joker_reaches_every_square_within_two_steps(s: Side, sq: Square) {
        let b = lone(Piece::new(Role::Joker, s), sq);
        let expected = Square::iter().filter(|&t| t != sq && chebyshev(sq, t) <= 2);
        assert_eq!(b.pseudo_legal(sq), Bitboard::from_iter(expected));
    }

    #[test]
    fn joker_in_corner_is_clipped_by_the_edges() {
        let b = lone(Piece::BlackJoker, Square::A1);
        assert_eq!(b.pseudo_legal(Square::A1).len(), 8);
    }

    #[proptest]
    fn square_is_attacked_iff_reached_by_a_piece_of_the_side(b: Board, sq: Square, s: Side) {
        let reached = b
            .by_side(s)
            .into_iter()
            .fold(Bitboard::empty(), |bb, wc| bb | b.pseudo_legal(wc));

        assert_eq!(b.is_attacked(sq, s), reached.contains(sq));
    }

    #[test]
    fn pawn_pushes_do_not_attack_occupied_squares() {
        let mut b = lone(Piece::WhitePawn, Square::E2);
        b.set(Square::E3, Some(Piece::BlackKing));
        assert!(!b.is_attacked(Square::E3, Side::White));

        b.set(Square::F3, Some(Piece::BlackKing));
        b.set(Square::E3, None);
        assert!(b.is_attacked(Square::F3, Side::White));
    }

    #[test]
    fn sliders_are_blocked_by_any_piece() {
        let mut b = lone(Piece::WhiteRook, Square::A1);
        b.set(Square::A3, Some(Piece::BlackKing));
        b.set(Square::A2, Some(Piece::WhitePawn));
        assert!(!b.is_attacked(Square::A3, Side::White));

        b.set(Square::A2, None);
        assert!(b.is_attacked(Square::A3, Side::White));
        assert!(!b.is_attacked(Square::A4, Side::White));
        assert!(b.is_attacked(Square::F1, Side::White));
        assert!(!b.is_attacked(Square::B2, Side::White));
    }
}
