use crate::chess::{Color, File, Move, Piece, Rank, Role, Square};
use derive_more::{Debug, Display, Error};
use std::fmt::{self, Write};
use std::ops::Index;

/// Which side of the board the king castles to.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Castle {
    /// Towards the H-file.
    #[display("kingside")]
    Short,
    /// Towards the A-file.
    #[display("queenside")]
    Long,
}

impl Castle {
    /// The [`File`] the rook departs from.
    #[inline(always)]
    pub fn corner(self) -> File {
        match self {
            Castle::Short => File::H,
            Castle::Long => File::A,
        }
    }

    /// The [`File`] the king passes over, where the rook lands.
    #[inline(always)]
    pub fn transit(self) -> File {
        match self {
            Castle::Short => File::F,
            Castle::Long => File::D,
        }
    }

    /// The [`File`] the king lands on.
    #[inline(always)]
    pub fn destination(self) -> File {
        match self {
            Castle::Short => File::G,
            Castle::Long => File::C,
        }
    }

    /// The [`File`]s between the king and the rook.
    #[inline(always)]
    pub fn between(self) -> &'static [File] {
        match self {
            Castle::Short => &[File::F, File::G],
            Castle::Long => &[File::B, File::C, File::D],
        }
    }
}

/// What a [`Move`] did to the board besides relocating the piece moved.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub(crate) struct Displacement {
    /// The piece captured and where it stood.
    pub captured: Option<(Piece, Square)>,
    /// The side castled to, if the king moved by two files.
    pub castle: Option<Castle>,
}

/// The reason why a set of piece placements does not make up a valid board.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum InvalidSetup {
    #[display("square `{_0}` is occupied more than once")]
    DuplicateSquare(#[error(not(source))] Square),
    #[display("the {_0} player must have exactly one king")]
    KingCount(#[error(not(source))] Color),
    #[display("the kings must not stand next to each other")]
    AdjacentKings,
    #[display("no pawn may stand on square `{_0}`")]
    PawnOnBackRank(#[error(not(source))] Square),
    #[display("the {_0} player is in check but it's not their turn")]
    OpponentInCheck(#[error(not(source))] Color),
}

/// The chess board.
///
/// Besides the occupant of every square, the board caches where each king
/// stands, which is kept in sync on every king move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[debug("Board({self:#})")]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    kings: [Square; 2],
}

impl Default for Board {
    fn default() -> Self {
        use Role::*;
        const BACK: [Role; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut squares = [[None; 8]; 8];
        for color in Color::iter() {
            for (file, role) in File::iter().zip(BACK) {
                let back = Square::new(file, Rank::First.perspective(color));
                let front = Square::new(file, Rank::Second.perspective(color));
                squares[back.rank() as usize][file as usize] = Some(Piece::new(role, color));
                squares[front.rank() as usize][file as usize] = Some(Piece::new(Pawn, color));
            }
        }

        Board {
            squares,
            kings: [
                Square::new(File::E, Rank::First),
                Square::new(File::E, Rank::Eighth),
            ],
        }
    }
}

impl Board {
    /// Places pieces on an otherwise empty board.
    ///
    /// The flags of each [`Piece`] are kept as given.
    pub fn setup<I>(pieces: I) -> Result<Self, InvalidSetup>
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        let mut squares = [[None; 8]; 8];
        let mut kings: [Option<Square>; 2] = [None; 2];

        for (sq, p) in pieces {
            let slot: &mut Option<Piece> = &mut squares[sq.rank() as usize][sq.file() as usize];
            if slot.replace(p).is_some() {
                return Err(InvalidSetup::DuplicateSquare(sq));
            }

            match p.role() {
                Role::Pawn if matches!(sq.rank(), Rank::First | Rank::Eighth) => {
                    return Err(InvalidSetup::PawnOnBackRank(sq));
                }

                Role::King => {
                    if kings[p.color() as usize].replace(sq).is_some() {
                        return Err(InvalidSetup::KingCount(p.color()));
                    }
                }

                _ => {}
            }
        }

        let [Some(white), Some(black)] = kings else {
            let missing = if kings[0].is_none() {
                Color::White
            } else {
                Color::Black
            };

            return Err(InvalidSetup::KingCount(missing));
        };

        if white.distance(black) <= 1 {
            return Err(InvalidSetup::AdjacentKings);
        }

        Ok(Board {
            squares,
            kings: [white, black],
        })
    }

    /// The [`Square`] occupied by the king of a [`Color`].
    #[inline(always)]
    pub fn king(&self, side: Color) -> Square {
        self.kings[side as usize]
    }

    /// An iterator over all pieces on the board.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|sq| Some((sq, self[sq]?)))
    }

    /// An iterator over the pieces of a [`Color`].
    pub fn by_color(&self, side: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.iter().filter(move |(_, p)| p.color() == side)
    }

    #[inline(always)]
    fn slot(&mut self, sq: Square) -> &mut Option<Piece> {
        &mut self.squares[sq.rank() as usize][sq.file() as usize]
    }

    /// Replaces the occupant of a [`Square`].
    ///
    /// Placing a king updates where that king is cached to stand.
    #[inline(always)]
    pub(crate) fn set(&mut self, sq: Square, p: Option<Piece>) -> Option<Piece> {
        if let Some(Piece::King { color, .. }) = p {
            self.kings[color as usize] = sq;
        }

        std::mem::replace(self.slot(sq), p)
    }

    /// Relocates the piece on the source [`Square`] of a [`Move`] to its destination.
    ///
    /// A pawn moving diagonally onto an empty square captures en passant,
    /// and a king moving by two files brings the rook along with it.
    /// No other state carried by pieces is touched.
    pub(crate) fn displace(&mut self, m: Move) -> Displacement {
        let mut displacement = Displacement::default();

        let Some(p) = self.set(m.whence(), None) else {
            return displacement;
        };

        if let Some(victim) = self.set(m.whither(), Some(p)) {
            displacement.captured = Some((victim, m.whither()));
        }

        match p {
            Piece::Pawn { .. } if m.files() != 0 && displacement.captured.is_none() => {
                let beside = Square::new(m.whither().file(), m.whence().rank());
                displacement.captured = self.set(beside, None).map(|victim| (victim, beside));
            }

            Piece::King { .. } if m.files().abs() == 2 => {
                let castle = if m.files() > 0 {
                    Castle::Short
                } else {
                    Castle::Long
                };

                let rank = m.whence().rank();
                let rook = self.set(Square::new(castle.corner(), rank), None);
                self.set(Square::new(castle.transit(), rank), rook);
                displacement.castle = Some(castle);
            }

            _ => {}
        }

        displacement
    }

    /// Mutable access to the [`Piece`] on a [`Square`], for updating its state.
    #[inline(always)]
    pub(crate) fn piece_mut(&mut self, sq: Square) -> Option<&mut Piece> {
        self.slot(sq).as_mut()
    }

    /// Mutable access to every [`Piece`] of a [`Color`], for updating their state.
    pub(crate) fn pieces_mut(&mut self, side: Color) -> impl Iterator<Item = &mut Piece> + '_ {
        self.squares
            .iter_mut()
            .flatten()
            .flatten()
            .filter(move |p| p.color() == side)
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[sq.rank() as usize][sq.file() as usize]
    }
}

/// Draws the board from White's side, figurines in the alternate form.
impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let figurines = f.alternate();

        f.write_str("  ")?;
        for file in File::iter() {
            write!(f, " {file}")?;
        }

        for rank in Rank::iter().rev() {
            write!(f, "\n{rank} ")?;

            for file in File::iter() {
                f.write_char(' ')?;
                match self[Square::new(file, rank)] {
                    None => f.write_char('.')?,
                    Some(p) if figurines => write!(f, "{p:#}")?,
                    Some(p) => write!(f, "{p}")?,
                }
            }

            write!(f, " {rank}")?;
        }

        f.write_str("\n  ")?;
        for file in File::iter() {
            write!(f, " {file}")?;
        }

        Ok(())
    }
}
