use lib::chess::{Color, File, Game, InvalidSetup, Move, Piece, Promotion, Rank, Role, Square};
use rayon::prelude::*;
use test_strategy::proptest;

/// Sets up a game from the piece placement and castling fields of a FEN string.
///
/// Pawns on their starting rank are taken to have never moved.
fn setup(placement: &str, turn: Color, castles: &str) -> Result<Game, InvalidSetup> {
    let mut pieces = Vec::new();

    for (rank, row) in Rank::iter().rev().zip(placement.split('/')) {
        let mut file = 0;
        for c in row.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as u8;
                continue;
            }

            let Some(f) = File::from_index(file) else {
                break;
            };

            file += 1;

            let square = Square::new(f, rank);
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };

            let rights = |side: char| match color {
                Color::White => castles.contains(side.to_ascii_uppercase()),
                Color::Black => castles.contains(side),
            };

            let piece = match c.to_ascii_lowercase() {
                'p' => Piece::Pawn {
                    color,
                    moved: rank != Rank::Second.perspective(color),
                    en_passant: false,
                },

                'r' => Piece::Rook {
                    color,
                    can_castle: rank == Rank::First.perspective(color)
                        && match f {
                            File::H => rights('k'),
                            File::A => rights('q'),
                            _ => false,
                        },
                },

                'k' => Piece::King {
                    color,
                    moved: !rights('k') && !rights('q'),
                },

                'n' => Piece::new(Role::Knight, color),
                'b' => Piece::new(Role::Bishop, color),
                _ => Piece::new(Role::Queen, color),
            };

            pieces.push((square, piece));
        }
    }

    Game::setup(turn, pieces)
}

/// Every legal move of the side to move, once per promotion if the pawn reaches the last rank.
fn children(game: &Game) -> impl Iterator<Item = (Move, Option<Promotion>)> + '_ {
    game.legal_moves().flat_map(move |m| {
        let promotes = game[m.whence()].is_some_and(|p| p.role() == Role::Pawn)
            && matches!(m.whither().rank(), Rank::First | Rank::Eighth);

        let promotions = if promotes {
            Promotion::ALL.map(Some).to_vec()
        } else {
            vec![None]
        };

        promotions.into_iter().map(move |p| (m, p))
    })
}

fn perft(game: &Game, depth: u8) -> usize {
    match depth {
        0 => 1,
        1 => children(game).count(),
        d => children(game)
            .par_bridge()
            .map(|(m, p)| {
                let mut next = game.clone();
                next.play(m, p).unwrap();
                perft(&next, d - 1)
            })
            .sum(),
    }
}

#[cfg(not(tarpaulin))]
#[proptest(cases = 1)]
fn perft_expands_expected_number_of_nodes() {
    // https://www.chessprogramming.org/Perft_Results#Initial_Position
    let game = Game::default();
    assert_eq!(perft(&game, 1), 20);
    assert_eq!(perft(&game, 2), 400);
    assert_eq!(perft(&game, 3), 8902);
    assert_eq!(perft(&game, 4), 197281);

    // https://www.chessprogramming.org/Perft_Results#Position_2
    let placement = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";
    let game = setup(placement, Color::White, "KQkq")?;
    assert_eq!(perft(&game, 1), 48);
    assert_eq!(perft(&game, 2), 2039);
    assert_eq!(perft(&game, 3), 97862);

    // https://www.chessprogramming.org/Perft_Results#Position_3
    let game = setup("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8", Color::White, "-")?;
    assert_eq!(perft(&game, 1), 14);
    assert_eq!(perft(&game, 2), 191);
    assert_eq!(perft(&game, 3), 2812);
    assert_eq!(perft(&game, 4), 43238);

    // https://www.chessprogramming.org/Perft_Results#Position_4
    let placement = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1";
    let game = setup(placement, Color::White, "kq")?;
    assert_eq!(perft(&game, 1), 6);
    assert_eq!(perft(&game, 2), 264);
    assert_eq!(perft(&game, 3), 9467);

    // https://www.chessprogramming.org/Perft_Results#Position_5
    let placement = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R";
    let game = setup(placement, Color::White, "KQ")?;
    assert_eq!(perft(&game, 1), 44);
    assert_eq!(perft(&game, 2), 1486);
    assert_eq!(perft(&game, 3), 62379);
}

#[test]
fn setup_reads_castling_rights() {
    let game = setup("r3k2r/8/8/8/8/8/8/R3K2R", Color::White, "Kq").unwrap();
    let e1 = Square::new(File::E, Rank::First);
    let castles: Vec<_> = game
        .moves(e1)
        .into_iter()
        .filter(|m| m.files().abs() == 2)
        .map(|m| m.whither())
        .collect();

    assert_eq!(castles, [Square::new(File::G, Rank::First)]);
}
