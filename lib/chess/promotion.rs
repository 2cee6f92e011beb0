use crate::chess::Role;
use derive_more::{Display, Error};

/// The [`Role`] a pawn may be promoted to.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Promotion {
    #[display("knight")]
    Knight,
    #[display("bishop")]
    Bishop,
    #[display("rook")]
    Rook,
    #[display("queen")]
    Queen,
}

impl Promotion {
    /// All promotion targets.
    pub const ALL: [Promotion; 4] = [
        Promotion::Knight,
        Promotion::Bishop,
        Promotion::Rook,
        Promotion::Queen,
    ];
}

/// The reason why converting a [`Role`] into a [`Promotion`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display("a pawn cannot be promoted to a {_0}")]
pub struct InvalidPromotion(#[error(not(source))] pub Role);

impl TryFrom<Role> for Promotion {
    type Error = InvalidPromotion;

    fn try_from(r: Role) -> Result<Self, Self::Error> {
        match r {
            Role::Knight => Ok(Promotion::Knight),
            Role::Bishop => Ok(Promotion::Bishop),
            Role::Rook => Ok(Promotion::Rook),
            Role::Queen => Ok(Promotion::Queen),
            Role::Pawn | Role::King => Err(InvalidPromotion(r)),
        }
    }
}
