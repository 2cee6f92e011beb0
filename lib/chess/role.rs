use crate::chess::Promotion;
use derive_more::Display;

/// The type of a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Role {
    #[display("pawn")]
    Pawn,
    #[display("knight")]
    Knight,
    #[display("bishop")]
    Bishop,
    #[display("rook")]
    Rook,
    #[display("queen")]
    Queen,
    #[display("king")]
    King,
}

impl From<Promotion> for Role {
    #[inline(always)]
    fn from(p: Promotion) -> Self {
        match p {
            Promotion::Knight => Role::Knight,
            Promotion::Bishop => Role::Bishop,
            Promotion::Rook => Role::Rook,
            Promotion::Queen => Role::Queen,
        }
    }
}
