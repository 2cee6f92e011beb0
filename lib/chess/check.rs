use crate::chess::{Board, Color, Piece, Role, Square};
use crate::chess::moves::{DIAGONALS, KNIGHT, ORTHOGONALS};

impl Board {
    /// Whether the king of the given [`Color`] is attacked.
    ///
    /// Kings never attack each other, since a king may not step next to the
    /// opposing king to begin with.
    pub fn is_check(&self, side: Color) -> bool {
        let king = self.king(side);

        let forward = match side {
            Color::White => 1,
            Color::Black => -1,
        };

        let pawns = [-1, 1].into_iter().filter_map(|df| king.offset(df, forward));
        if self.any_of(pawns, side, &[Role::Pawn]) {
            return true;
        }

        let knights = KNIGHT.iter().filter_map(|&(df, dr)| king.offset(df, dr));
        if self.any_of(knights, side, &[Role::Knight]) {
            return true;
        }

        self.slides(king, &DIAGONALS, side, &[Role::Bishop, Role::Queen])
            || self.slides(king, &ORTHOGONALS, side, &[Role::Rook, Role::Queen])
    }

    /// Whether any of the squares holds an opposing piece of one of the roles.
    fn any_of<I>(&self, squares: I, side: Color, roles: &[Role]) -> bool
    where
        I: IntoIterator<Item = Square>,
    {
        squares
            .into_iter()
            .any(|sq| self[sq].is_some_and(|p| self.threatens(p, side, roles)))
    }

    /// Whether the first piece along any of the rays is an opposing piece of one of the roles.
    fn slides(&self, from: Square, rays: &[(i8, i8)], side: Color, roles: &[Role]) -> bool {
        rays.iter().any(|&(df, dr)| {
            let mut sq = from;
            while let Some(next) = sq.offset(df, dr) {
                sq = next;
                if let Some(p) = self[sq] {
                    return self.threatens(p, side, roles);
                }
            }

            false
        })
    }

    #[inline(always)]
    fn threatens(&self, p: Piece, side: Color, roles: &[Role]) -> bool {
        p.color() != side && roles.contains(&p.role())
    }
}
