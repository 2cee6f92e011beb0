use crate::chess::{Board, Castle, Color, File, Move, Piece, Rank, Square};
use arrayvec::ArrayVec;
use derive_more::{Deref, IntoIterator};

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[rustfmt::skip]
pub(crate) const KNIGHT: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

#[rustfmt::skip]
const KING: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1), (0, -1),
    (0, 1), (1, -1), (1, 0), (1, 1),
];

/// The moves available to a single piece.
///
/// A queen in the middle of an empty board has the most moves of any piece.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Deref, IntoIterator)]
pub struct Moves(#[into_iterator(owned, ref)] ArrayVec<Move, 27>);

impl Board {
    /// The legal moves of the piece on the given [`Square`].
    ///
    /// Empty if the square is not occupied.
    pub fn moves(&self, whence: Square) -> Moves {
        let mut moves = self.pseudo_legal(whence);
        moves.0.retain(|m| self.is_legal(*m));
        moves
    }

    /// Whether playing a [`Move`] leaves the mover's own king out of check.
    ///
    /// The move is simulated on a scratch copy of the board, so the board
    /// itself is never touched.
    pub fn is_legal(&self, m: Move) -> bool {
        let Some(p) = self[m.whence()] else {
            return false;
        };

        let mut scratch = *self;
        scratch.displace(m);
        !scratch.is_check(p.color())
    }

    /// The moves of the piece on the given [`Square`], regardless of its king's safety.
    fn pseudo_legal(&self, whence: Square) -> Moves {
        let mut moves = Moves::default();

        match self[whence] {
            None => {}
            Some(Piece::Pawn { color, moved, .. }) => self.pawn(whence, color, moved, &mut moves),
            Some(Piece::Knight { color }) => self.leaps(whence, color, &mut moves),
            Some(Piece::Bishop { color }) => self.rays(whence, color, &DIAGONALS, &mut moves),
            Some(Piece::Rook { color, .. }) => self.rays(whence, color, &ORTHOGONALS, &mut moves),
            Some(Piece::Queen { color }) => {
                self.rays(whence, color, &ORTHOGONALS, &mut moves);
                self.rays(whence, color, &DIAGONALS, &mut moves);
            }
            Some(Piece::King { color, moved }) => self.steps(whence, color, moved, &mut moves),
        }

        moves
    }

    fn pawn(&self, whence: Square, color: Color, moved: bool, moves: &mut Moves) {
        let forward = match color {
            Color::White => 1,
            Color::Black => -1,
        };

        if let Some(one) = whence.offset(0, forward).filter(|&sq| self[sq].is_none()) {
            moves.0.push(Move::new(whence, one));

            if !moved && whence.rank() == Rank::Second.perspective(color) {
                if let Some(two) = whence.offset(0, 2 * forward).filter(|&sq| self[sq].is_none()) {
                    moves.0.push(Move::new(whence, two));
                }
            }
        }

        for side in [-1, 1] {
            let Some(diagonal) = whence.offset(side, forward) else {
                continue;
            };

            let capture = match self[diagonal] {
                Some(p) => p.color() != color,
                None => whence.offset(side, 0).is_some_and(|beside| {
                    matches!(
                        self[beside],
                        Some(Piece::Pawn { color: c, en_passant: true, .. }) if c != color
                    )
                }),
            };

            if capture {
                moves.0.push(Move::new(whence, diagonal));
            }
        }
    }

    fn leaps(&self, whence: Square, color: Color, moves: &mut Moves) {
        for &(df, dr) in &KNIGHT {
            if let Some(whither) = whence.offset(df, dr) {
                if self[whither].is_none_or(|p| p.color() != color) {
                    moves.0.push(Move::new(whence, whither));
                }
            }
        }
    }

    fn rays(&self, whence: Square, color: Color, rays: &[(i8, i8)], moves: &mut Moves) {
        for &(df, dr) in rays {
            let mut whither = whence;
            while let Some(next) = whither.offset(df, dr) {
                whither = next;
                match self[whither] {
                    None => moves.0.push(Move::new(whence, whither)),
                    Some(p) => {
                        if p.color() != color {
                            moves.0.push(Move::new(whence, whither));
                        }

                        break;
                    }
                }
            }
        }
    }

    fn steps(&self, whence: Square, color: Color, moved: bool, moves: &mut Moves) {
        let rival = self.king(!color);

        for &(df, dr) in &KING {
            if let Some(whither) = whence.offset(df, dr) {
                if whither.distance(rival) > 1 && self[whither].is_none_or(|p| p.color() != color) {
                    moves.0.push(Move::new(whence, whither));
                }
            }
        }

        let home = Square::new(File::E, Rank::First.perspective(color));
        if moved || whence != home || self.is_check(color) {
            return;
        }

        for castle in [Castle::Short, Castle::Long] {
            if self.can_castle(whence, color, castle) {
                let whither = Square::new(castle.destination(), whence.rank());
                moves.0.push(Move::new(whence, whither));
            }
        }
    }

    /// Whether the king may castle, provided it's at home, hasn't moved and isn't in check.
    ///
    /// Whether the king would be safe on the destination is left to the legality check.
    fn can_castle(&self, king: Square, color: Color, castle: Castle) -> bool {
        let rank = king.rank();
        let rival = self.king(!color);
        let corner = Square::new(castle.corner(), rank);
        let transit = Square::new(castle.transit(), rank);
        let destination = Square::new(castle.destination(), rank);

        matches!(self[corner], Some(Piece::Rook { color: c, can_castle: true }) if c == color)
            && castle.between().iter().all(|&f| self[Square::new(f, rank)].is_none())
            && transit.distance(rival) > 1
            && destination.distance(rival) > 1
            && self.is_legal(Move::new(king, transit))
    }
}
