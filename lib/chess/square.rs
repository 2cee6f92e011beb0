use crate::chess::{Color, File, ParseFileError, ParseRankError, Rank};
use derive_more::{Display, Error, From};
use std::str::FromStr;

/// A square on the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display("{file}{rank}")]
pub struct Square {
    rank: Rank,
    file: File,
}

impl Square {
    /// Constructs [`Square`] from a pair of [`File`] and [`Rank`].
    #[inline(always)]
    pub fn new(file: File, rank: Rank) -> Self {
        Square { rank, file }
    }

    /// This square's [`File`].
    #[inline(always)]
    pub fn file(&self) -> File {
        self.file
    }

    /// This square's [`Rank`].
    #[inline(always)]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns an iterator over all 64 squares, rank by rank.
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        Rank::iter().flat_map(|r| File::iter().map(move |f| Square::new(f, r)))
    }

    /// The square displaced by the given number of files and ranks, if still on the board.
    #[inline(always)]
    pub fn offset(self, files: i8, ranks: i8) -> Option<Self> {
        let f = File::from_index(u8::try_from(self.file.index() as i8 + files).ok()?)?;
        let r = Rank::from_index(u8::try_from(self.rank.index() as i8 + ranks).ok()?)?;
        Some(Square::new(f, r))
    }

    /// The [Chebyshev distance] between two squares.
    ///
    /// [Chebyshev distance]: https://www.chessprogramming.org/Distance
    #[inline(always)]
    pub fn distance(self, other: Square) -> u8 {
        let files = (self.file - other.file).unsigned_abs();
        let ranks = (self.rank - other.rank).unsigned_abs();
        files.max(ranks)
    }

    /// Flips this square's [`Rank`].
    #[inline(always)]
    pub fn flip(self) -> Self {
        Square::new(self.file, self.rank.flip())
    }

    /// This square as seen from the side of the given [`Color`].
    #[inline(always)]
    pub fn perspective(self, side: Color) -> Self {
        Square::new(self.file, self.rank.perspective(side))
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseSquareError {
    #[display("failed to parse square")]
    InvalidFile(ParseFileError),
    #[display("failed to parse square")]
    InvalidRank(ParseRankError),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);
        Ok(Square::new(s[..i].parse()?, s[i..].parse()?))
    }
}
