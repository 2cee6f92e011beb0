use crate::chess::Color;
use derive_more::Display;

/// The state of a chess game after a move.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Status {
    #[default]
    #[display("ongoing")]
    Ongoing,

    #[display("checkmate by the {_0} player")]
    Checkmate(Color),

    #[display("stalemate")]
    Stalemate,
}

impl Status {
    /// Whether the game has ended.
    #[inline(always)]
    pub fn is_over(&self) -> bool {
        *self != Status::Ongoing
    }

    /// Whether the game ended in a [draw].
    ///
    /// [draw]: https://www.chessprogramming.org/Draw
    #[inline(always)]
    pub fn is_draw(&self) -> bool {
        *self == Status::Stalemate
    }

    /// The winning side, if any.
    #[inline(always)]
    pub fn winner(&self) -> Option<Color> {
        match *self {
            Status::Checkmate(c) => Some(c),
            _ => None,
        }
    }
}
