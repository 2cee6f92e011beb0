use crate::chess::{Board, Color, InvalidSetup, Move, Moves, Piece, Promotion, Rank, Record};
use crate::chess::{Role, Square, Status};
use derive_more::{Display, Error};
use std::ops::Index;
use tracing::{debug, instrument};

#[cfg(test)]
use proptest::{prelude::*, sample::{Selector, SelectorStrategy}, strategy::Map};

#[cfg(test)]
use std::ops::Range;

/// The reason why an action was rejected.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum IllegalAction {
    #[display("there is no piece of the side to move on square `{_0}`")]
    InvalidSelection(#[error(not(source))] Square),
    #[display("move `{_0}` is illegal in this position")]
    IllegalMove(#[error(not(source))] Move),
    #[display("move `{_0}` requires a promotion")]
    MissingPromotion(#[error(not(source))] Move),
}

/// A game of chess.
///
/// Holds the [`Board`], the side to move, the [`Status`] of the game and
/// the [`Record`] of every move played so far.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Game {
    board: Board,
    turn: Color,
    status: Status,
    history: Vec<Record>,
}

impl Default for Game {
    fn default() -> Self {
        Game {
            board: Board::default(),
            turn: Color::White,
            status: Status::Ongoing,
            history: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Arbitrary for Game {
    type Parameters = ();
    type Strategy = Map<(Range<usize>, SelectorStrategy), fn((usize, Selector)) -> Game>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (0..128, any::<Selector>()).prop_map(|(moves, selector)| {
            let mut game = Game::default();

            for _ in 0..moves {
                let Some(m) = selector.try_select(game.legal_moves()) else {
                    break;
                };

                let promotion = selector.select(Promotion::ALL);
                game.play(m, Some(promotion)).unwrap();
            }

            game
        })
    }
}

impl Game {
    /// A game in the standard starting position, with White to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// A game starting from an arbitrary placement of pieces.
    ///
    /// The state carried by each [`Piece`] is kept as given.
    /// The game may be over right away.
    pub fn setup<I>(turn: Color, pieces: I) -> Result<Self, InvalidSetup>
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        let board = Board::setup(pieces)?;

        if board.is_check(!turn) {
            return Err(InvalidSetup::OpponentInCheck(!turn));
        }

        let mut game = Game {
            board,
            turn,
            status: Status::Ongoing,
            history: Vec::new(),
        };

        game.status = game.outcome();
        Ok(game)
    }

    /// Starts over from the standard starting position.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The current [`Board`].
    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[inline(always)]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The current [`Status`] of the game.
    #[inline(always)]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The moves played so far, in order.
    #[inline(always)]
    pub fn history(&self) -> &[Record] {
        &self.history
    }

    /// Whether the side to move is in check.
    #[inline(always)]
    pub fn is_check(&self) -> bool {
        self.board.is_check(self.turn)
    }

    /// Whether a [`Move`] by the side to move keeps its king out of check.
    ///
    /// This doesn't check whether the piece may actually move that way, see [`Game::moves`].
    pub fn is_legal(&self, m: Move) -> bool {
        self.board[m.whence()].is_some_and(|p| p.color() == self.turn) && self.board.is_legal(m)
    }

    /// The legal moves of the piece on the given [`Square`].
    ///
    /// Empty unless the square holds a piece of the side to move and the game is ongoing.
    pub fn moves(&self, whence: Square) -> Moves {
        self.select(whence).unwrap_or_default()
    }

    /// Like [`Game::moves`], but fails if the square doesn't hold a piece that may move.
    pub fn select(&self, whence: Square) -> Result<Moves, IllegalAction> {
        match self.board[whence] {
            Some(p) if p.color() == self.turn && !self.status.is_over() => {
                Ok(self.board.moves(whence))
            }

            _ => Err(IllegalAction::InvalidSelection(whence)),
        }
    }

    /// An iterator over every legal move of the side to move.
    pub fn legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        Square::iter().flat_map(|sq| self.moves(sq))
    }

    /// Plays a [`Move`] for the side to move.
    ///
    /// A [`Promotion`] is required if a pawn reaches the last rank and ignored otherwise.
    /// The game is left untouched if the move is rejected.
    #[instrument(level = "debug", skip(self), ret, err, fields(turn = %self.turn))]
    pub fn play(&mut self, m: Move, promotion: Option<Promotion>) -> Result<Status, IllegalAction> {
        let piece = match self.board[m.whence()] {
            Some(p) if p.color() == self.turn && !self.status.is_over() => p,
            _ => return Err(IllegalAction::InvalidSelection(m.whence())),
        };

        if !self.board.moves(m.whence()).contains(&m) {
            return Err(IllegalAction::IllegalMove(m));
        }

        let color = self.turn;
        let promotion = match piece {
            Piece::Pawn { .. } if m.whither().rank() == Rank::Eighth.perspective(color) => {
                Some(promotion.ok_or(IllegalAction::MissingPromotion(m))?)
            }

            _ => None,
        };

        let displacement = self.board.displace(m);

        for p in self.board.pieces_mut(color) {
            if let Piece::Pawn { en_passant, .. } = p {
                *en_passant = false;
            }
        }

        match piece {
            Piece::Pawn { .. } => {
                if let Some(promotion) = promotion {
                    debug!(%m, %promotion, "promoting pawn");
                    let promoted = Piece::new(Role::from(promotion), color);
                    self.board.set(m.whither(), Some(promoted));
                } else if let Some(Piece::Pawn {
                    moved, en_passant, ..
                }) = self.board.piece_mut(m.whither())
                {
                    *moved = true;
                    *en_passant = m.ranks().abs() == 2;
                }
            }

            Piece::King { .. } => {
                for p in self.board.pieces_mut(color) {
                    match p {
                        Piece::King { moved, .. } => *moved = true,
                        Piece::Rook { can_castle, .. } => *can_castle = false,
                        _ => {}
                    }
                }
            }

            Piece::Rook { .. } => {
                if let Some(Piece::Rook { can_castle, .. }) = self.board.piece_mut(m.whither()) {
                    *can_castle = false;
                }
            }

            Piece::Knight { .. } | Piece::Bishop { .. } | Piece::Queen { .. } => {}
        }

        if let Some(castle) = displacement.castle {
            debug!(%m, %castle, "castling");
        }

        let captured = displacement.captured.map(|(p, s)| (p.role(), s));
        if let Some((victim, s)) = captured.filter(|&(_, s)| s != m.whither()) {
            debug!(%m, %victim, %s, "capturing en passant");
        }

        self.turn = !color;
        self.status = self.outcome();

        if self.status.is_over() {
            debug!(status = %self.status, "game over");
        }

        self.history.push(Record {
            played: m,
            color,
            role: piece.role(),
            captured,
            castle: displacement.castle,
            promotion,
            check: self.is_check(),
            checkmate: self.status == Status::Checkmate(color),
        });

        Ok(self.status)
    }

    /// The [`Status`] of the game, as seen by the side to move.
    fn outcome(&self) -> Status {
        let stuck = self
            .board
            .by_color(self.turn)
            .all(|(sq, _)| self.board.moves(sq).is_empty());

        if !stuck {
            Status::Ongoing
        } else if self.is_check() {
            Status::Checkmate(!self.turn)
        } else {
            Status::Stalemate
        }
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Game {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.board[sq]
    }
}
