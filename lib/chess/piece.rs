use crate::chess::{Color, Role};
use std::fmt::{self, Write};

/// A chess piece of a certain [`Color`], along with the state its [`Role`] keeps track of.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Piece {
    Pawn {
        color: Color,
        /// Whether this pawn has ever moved.
        moved: bool,
        /// Whether this pawn advanced two ranks on the last move of its side.
        en_passant: bool,
    },
    Knight {
        color: Color,
    },
    Bishop {
        color: Color,
    },
    Rook {
        color: Color,
        /// Whether this rook may still take part in castling.
        can_castle: bool,
    },
    Queen {
        color: Color,
    },
    King {
        color: Color,
        /// Whether this king has ever moved.
        moved: bool,
    },
}

impl Piece {
    /// Constructs a fresh [`Piece`], as placed on the board before the first move.
    #[inline(always)]
    pub fn new(role: Role, color: Color) -> Self {
        match role {
            Role::Pawn => Piece::Pawn {
                color,
                moved: false,
                en_passant: false,
            },
            Role::Knight => Piece::Knight { color },
            Role::Bishop => Piece::Bishop { color },
            Role::Rook => Piece::Rook {
                color,
                can_castle: true,
            },
            Role::Queen => Piece::Queen { color },
            Role::King => Piece::King {
                color,
                moved: false,
            },
        }
    }

    /// This piece's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        match *self {
            Piece::Pawn { color, .. }
            | Piece::Knight { color }
            | Piece::Bishop { color }
            | Piece::Rook { color, .. }
            | Piece::Queen { color }
            | Piece::King { color, .. } => color,
        }
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        match self {
            Piece::Pawn { .. } => Role::Pawn,
            Piece::Knight { .. } => Role::Knight,
            Piece::Bishop { .. } => Role::Bishop,
            Piece::Rook { .. } => Role::Rook,
            Piece::Queen { .. } => Role::Queen,
            Piece::King { .. } => Role::King,
        }
    }

    /// Whether this piece is of the given [`Role`] and [`Color`], regardless of its state.
    #[inline(always)]
    pub fn is(&self, role: Role, color: Color) -> bool {
        self.role() == role && self.color() == color
    }

    fn figurine(&self) -> char {
        match (self.role(), self.color()) {
            (Role::Pawn, Color::White) => '♙',
            (Role::Knight, Color::White) => '♘',
            (Role::Bishop, Color::White) => '♗',
            (Role::Rook, Color::White) => '♖',
            (Role::Queen, Color::White) => '♕',
            (Role::King, Color::White) => '♔',
            (Role::Pawn, Color::Black) => '♟',
            (Role::Knight, Color::Black) => '♞',
            (Role::Bishop, Color::Black) => '♝',
            (Role::Rook, Color::Black) => '♜',
            (Role::Queen, Color::Black) => '♛',
            (Role::King, Color::Black) => '♚',
        }
    }
}

impl From<Piece> for char {
    fn from(p: Piece) -> char {
        let c = match p.role() {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
        };

        match p.color() {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = if f.alternate() {
            self.figurine()
        } else {
            (*self).into()
        };

        f.write_char(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn piece_has_a_color(r: Role, c: Color) {
        assert_eq!(Piece::new(r, c).color(), c);
    }

    #[proptest]
    fn piece_has_a_role(r: Role, c: Color) {
        assert_eq!(Piece::new(r, c).role(), r);
    }

    #[proptest]
    fn new_piece_has_fresh_flags(c: Color) {
        assert_eq!(
            Piece::new(Role::Pawn, c),
            Piece::Pawn {
                color: c,
                moved: false,
                en_passant: false
            }
        );

        assert_eq!(
            Piece::new(Role::Rook, c),
            Piece::Rook {
                color: c,
                can_castle: true
            }
        );

        assert_eq!(
            Piece::new(Role::King, c),
            Piece::King {
                color: c,
                moved: false
            }
        );
    }

    #[proptest]
    fn is_ignores_state(p: Piece) {
        assert!(p.is(p.role(), p.color()));
        assert!(!p.is(p.role(), !p.color()));
    }

    #[proptest]
    fn piece_has_a_default_ascii_representation(p: Piece) {
        assert_eq!(char::from(p).to_string(), p.to_string());
    }

    #[proptest]
    fn piece_has_an_alternate_figurine_representation(p: Piece) {
        assert_eq!(p.figurine().to_string(), format!("{p:#}"));
    }

    #[proptest]
    fn white_pieces_are_upper_case(p: Piece) {
        assert_eq!(
            char::from(p).is_ascii_uppercase(),
            p.color() == Color::White
        );
    }
}
