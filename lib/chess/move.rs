use crate::chess::Square;
use derive_more::{Debug, Display};

/// A chess move, from one [`Square`] to another.
///
/// Captures, castling and en passant are not encoded in the move itself,
/// they follow from the position the move is played in.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[cfg_attr(test, filter(#self.0 != #self.1))]
#[debug("Move({self})")]
#[display("{_0}{_1}")]
pub struct Move(Square, Square);

impl Move {
    /// Constructs [`Move`] from the source and destination [`Square`]s.
    #[inline(always)]
    pub fn new(whence: Square, whither: Square) -> Self {
        Move(whence, whither)
    }

    /// The source [`Square`].
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.1
    }

    /// The number of files this move spans, signed towards the H-file.
    #[inline(always)]
    pub fn files(&self) -> i8 {
        self.1.file() - self.0.file()
    }

    /// The number of ranks this move spans, signed towards the eighth rank.
    #[inline(always)]
    pub fn ranks(&self) -> i8 {
        self.1.rank() - self.0.rank()
    }
}
