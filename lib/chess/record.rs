use crate::chess::{Castle, Color, Move, Promotion, Role, Square};
use derive_more::Deref;

/// A committed [`Move`] along with what it did on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deref)]
pub struct Record {
    #[deref]
    pub(crate) played: Move,
    pub(crate) color: Color,
    pub(crate) role: Role,
    pub(crate) captured: Option<(Role, Square)>,
    pub(crate) castle: Option<Castle>,
    pub(crate) promotion: Option<Promotion>,
    pub(crate) check: bool,
    pub(crate) checkmate: bool,
}

impl Record {
    /// The [`Move`] played.
    #[inline(always)]
    pub fn played(&self) -> Move {
        self.played
    }

    /// The [`Color`] of the side that moved.
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }

    /// The [`Role`] of the piece moved.
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.role
    }

    /// The [`Role`] of the piece captured and the [`Square`] it stood on.
    #[inline(always)]
    pub fn capture(&self) -> Option<(Role, Square)> {
        self.captured
    }

    /// Whether a piece was captured.
    #[inline(always)]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Whether this was an en passant capture.
    pub fn is_en_passant(&self) -> bool {
        self.captured.is_some_and(|(_, s)| self.whither() != s)
    }

    /// The side castled to, if any.
    #[inline(always)]
    pub fn castle(&self) -> Option<Castle> {
        self.castle
    }

    /// The [`Promotion`] of the pawn moved, if any.
    #[inline(always)]
    pub fn promotion(&self) -> Option<Promotion> {
        self.promotion
    }

    /// Whether the move put the opposing king in check.
    #[inline(always)]
    pub fn is_check(&self) -> bool {
        self.check
    }

    /// Whether the move ended the game by checkmate.
    #[inline(always)]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }
}
