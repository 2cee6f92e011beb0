use crate::chess::Color;
use derive_more::{Display, Error};
use std::{ops::Sub, str::FromStr};

/// A row on the chess board.
///
/// Ranks are counted from White's side of the board, so [`Rank::First`] is
/// White's back rank and [`Rank::Eighth`] is Black's.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Rank {
    #[display("1")]
    First,
    #[display("2")]
    Second,
    #[display("3")]
    Third,
    #[display("4")]
    Fourth,
    #[display("5")]
    Fifth,
    #[display("6")]
    Sixth,
    #[display("7")]
    Seventh,
    #[display("8")]
    Eighth,
}

impl Rank {
    /// All ranks ordered by [index][`Rank::index`].
    #[rustfmt::skip]
    pub const ALL: [Rank; 8] = [
        Rank::First, Rank::Second, Rank::Third, Rank::Fourth,
        Rank::Fifth, Rank::Sixth, Rank::Seventh, Rank::Eighth,
    ];

    /// This rank's index in the range `(0..=7)`.
    #[inline(always)]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Constructs [`Rank`] from its index, if in the range `(0..=7)`.
    #[inline(always)]
    pub fn from_index(i: u8) -> Option<Self> {
        Self::ALL.get(i as usize).copied()
    }

    /// Returns an iterator over [`Rank`]s ordered by [index][`Rank::index`].
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        Self::ALL.into_iter()
    }

    /// Flips this rank to the opponent's side of the board.
    #[inline(always)]
    pub fn flip(self) -> Self {
        Self::ALL[7 - self as usize]
    }

    /// This rank as seen from the side of the given [`Color`].
    ///
    /// [`Rank::First`] from Black's perspective is [`Rank::Eighth`].
    #[inline(always)]
    pub fn perspective(self, side: Color) -> Self {
        match side {
            Color::White => self,
            Color::Black => self.flip(),
        }
    }
}

impl Sub for Rank {
    type Output = i8;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.index() as i8 - rhs.index() as i8
    }
}

/// The reason why parsing [`Rank`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(
    "failed to parse rank, expected digit in the range `({}..={})`",
    Rank::First,
    Rank::Eighth
)]
pub struct ParseRankError;

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Rank::First),
            "2" => Ok(Rank::Second),
            "3" => Ok(Rank::Third),
            "4" => Ok(Rank::Fourth),
            "5" => Ok(Rank::Fifth),
            "6" => Ok(Rank::Sixth),
            "7" => Ok(Rank::Seventh),
            "8" => Ok(Rank::Eighth),
            _ => Err(ParseRankError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;
    use test_strategy::proptest;

    #[test]
    fn rank_guarantees_zero_value_optimization() {
        assert_eq!(size_of::<Option<Rank>>(), size_of::<Rank>());
    }

    #[test]
    fn iter_returns_iterator_over_ranks_in_order() {
        assert_eq!(
            Rank::iter().collect::<Vec<_>>(),
            (0..8).filter_map(Rank::from_index).collect::<Vec<_>>()
        );
    }

    #[proptest]
    fn rank_has_an_index(r: Rank) {
        assert_eq!(Rank::from_index(r.index()), Some(r));
    }

    #[proptest]
    fn from_index_fails_if_out_of_range(#[strategy(8u8..)] i: u8) {
        assert_eq!(Rank::from_index(i), None);
    }

    #[proptest]
    fn flipping_rank_returns_complement(r: Rank) {
        assert_eq!(r.flip().index(), 7 - r.index());
        assert_eq!(r.flip().flip(), r);
    }

    #[proptest]
    fn perspective_flips_rank_only_for_black(r: Rank) {
        assert_eq!(r.perspective(Color::White), r);
        assert_eq!(r.perspective(Color::Black), r.flip());
    }

    #[test]
    fn first_rank_has_the_lowest_index() {
        assert_eq!(Rank::First.index(), 0);
        assert_eq!(Rank::Eighth.index(), 7);
        assert_eq!(Rank::Eighth.perspective(Color::White).index(), 7);
        assert_eq!(Rank::Eighth.perspective(Color::Black).index(), 0);
    }

    #[proptest]
    fn subtracting_ranks_returns_distance(a: Rank, b: Rank) {
        assert_eq!(a - b, a.index() as i8 - b.index() as i8);
    }

    #[proptest]
    fn parsing_printed_rank_is_an_identity(r: Rank) {
        assert_eq!(r.to_string().parse(), Ok(r));
    }

    #[proptest]
    fn parsing_rank_fails_if_not_digit_between_1_and_8(
        #[filter(!('1'..='8').contains(&#c))] c: char,
    ) {
        assert_eq!(c.to_string().parse::<Rank>(), Err(ParseRankError));
    }

    #[proptest]
    fn parsing_rank_fails_if_length_not_one(#[filter(#s.len() != 1)] s: String) {
        assert_eq!(s.parse::<Rank>(), Err(ParseRankError));
    }
}
