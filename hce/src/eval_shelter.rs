use crate::context::EvalContext;
use cozy_chess::{BitBoard, Color, Piece, Square};
use evaluation::scores::percent;
use evaluation::TaperedScore;
use utils::masks::{
    king_root, king_side_castle, queen_side_castle, relative_rank_mask, relative_square,
    shift_east, shift_west, CENTRAL_FILES,
};

/// Pawn shield and pawn storm on the three files around the king, plus pawn chains
/// pointing at a castled king. Middlegame only.
pub(super) fn evaluate(ctx: &mut EvalContext, color: Color) {
    let params = ctx.params;
    let king_file = king_root(ctx.board().king(color)).file().bitboard();

    let mut shield = 0;
    let mut storm = 0;
    for file in [king_file, shift_east(king_file), shift_west(king_file)] {
        if file.is_empty() {
            continue;
        }
        let (file_shield, file_storm) = evaluate_file(ctx, color, file);
        shield += file_shield;
        storm += file_storm;
    }

    let cp = percent(shield, params.shield_weight.value) + percent(storm, params.storm_weight.value);
    ctx.add_pawns(color, TaperedScore::new(cp, 0));

    let chains = evaluate_chains(ctx, color);
    ctx.add_pawns(color, TaperedScore::new(chains, 0));
}

fn evaluate_file(ctx: &EvalContext, color: Color, file: BitBoard) -> (i32, i32) {
    let tables = ctx.tables;
    let own_pawns = file & ctx.pieces(color, Piece::Pawn);
    let enemy_pawns = file & ctx.pieces(!color, Piece::Pawn);

    let mut shelter = if own_pawns.is_empty() {
        tables.shield[0]
    } else {
        (1..=6)
            .find(|&rank| !(own_pawns & relative_rank_mask(color, rank)).is_empty())
            .map_or(0, |rank| tables.shield[rank])
    };
    if !(file & ctx.pieces(color, Piece::King)).is_empty() {
        shelter = (shelter * 120) / 100;
    }
    if !(file & CENTRAL_FILES).is_empty() {
        shelter /= 2;
    }

    let storm = if enemy_pawns.is_empty() {
        tables.storm[0]
    } else {
        (2..=4)
            .find(|&rank| !(enemy_pawns & relative_rank_mask(color, rank)).is_empty())
            .map_or(0, |rank| tables.storm[rank])
    };

    (shelter, storm)
}

/// Penalty for being on the receiving end of a pawn chain. Squares are given from
/// White's side and mirrored for Black.
fn evaluate_chains(ctx: &EvalContext, color: Color) -> i32 {
    let params = ctx.params;
    let king = ctx.board().king(color);
    let own_pawns = ctx.pieces(color, Piece::Pawn);
    let enemy_pawns = ctx.pieces(!color, Piece::Pawn);

    let own = |sq: Square| own_pawns.has(relative_square(color, sq));
    let opp = |sq: Square| enemy_pawns.has(relative_square(color, sq));
    let chain = |big: bool| {
        if big {
            params.chain_big.value
        } else {
            params.chain_small.value
        }
    };

    let mut cp = 0;

    if king_side_castle(color).has(king) {
        if opp(Square::E4) {
            // c6-d5-e4
            if opp(Square::D5) && opp(Square::C6) {
                cp -= chain(own(Square::D4) && own(Square::E3));
            }
            // d5-e4-f3
            if opp(Square::D5) && opp(Square::F3) {
                cp -= chain(own(Square::E3));
            }
        }

        if opp(Square::E5) {
            // d6-e5-f4
            if opp(Square::F4) && opp(Square::D6) {
                if opp(Square::H5) {
                    cp -= params.chain_storm_edge.value;
                }
                // g-pawn storm
                if opp(Square::G5) {
                    cp -= params.chain_storm1.value;
                    // h4 and g5 leave the chain immobile
                    if opp(Square::H4) {
                        return params.chain_storm_fail.value;
                    }
                }
                if opp(Square::G4) {
                    cp -= params.chain_storm2.value;
                }
                cp -= chain(own(Square::E4) && own(Square::D5));
            }
            // e5-f4-g3
            if opp(Square::G3) && opp(Square::F4) {
                cp -= chain(own(Square::F3));
            }
        }
    }

    if queen_side_castle(color).has(king) {
        if opp(Square::D4) {
            if opp(Square::E5) && opp(Square::F6) {
                cp -= chain(own(Square::E4) && own(Square::D3));
            }
            if opp(Square::F5) && opp(Square::C3) {
                cp -= chain(own(Square::D3));
            }
        }

        if opp(Square::D5) {
            // c4-d5-e6
            if opp(Square::C4) && opp(Square::E6) {
                if opp(Square::A5) {
                    cp -= params.chain_storm_edge.value;
                }
                // b-pawn storm
                if opp(Square::B5) {
                    cp -= params.chain_storm1.value;
                    if opp(Square::A4) {
                        return params.chain_storm_fail.value;
                    }
                }
                if opp(Square::B4) {
                    cp -= params.chain_storm2.value;
                }
                cp -= chain(own(Square::E4) && own(Square::D5));
            }
            // b3-c4-d5
            if opp(Square::B3) && opp(Square::C4) {
                cp -= chain(own(Square::C3));
            }
        }
    }

    percent(cp, params.chains_weight.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvalParams;
    use crate::tables::EvalTables;
    use cozy_chess::Board;
    use utils::Position;

    fn with_ctx<T>(fen: &str, f: impl FnOnce(&mut EvalContext) -> T) -> T {
        let board: Board = fen.parse().unwrap();
        let position = Position::new(&board);
        let params = EvalParams::default();
        let tables = EvalTables::new(&params);
        let mut ctx = EvalContext::new(&position, &params, &tables, Color::White);
        f(&mut ctx)
    }

    #[test]
    fn test_intact_shield() {
        // king g1 with f2, g2, h2: root g2 covers files f, g and h
        let (shield, storm) = with_ctx("4k3/pppppppp/8/8/8/8/5PPP/6K1 w - - 0 1", |ctx| {
            let root_file = Square::G2.file().bitboard();
            let files = [root_file, shift_east(root_file), shift_west(root_file)];
            files.iter().fold((0, 0), |(shield, storm), &file| {
                let (a, b) = evaluate_file(ctx, Color::White, file);
                (shield + a, storm + b)
            })
        });
        // g-file counts 120%, f-file is central and halved
        assert_eq!(shield, (2 * 120) / 100 + 2 + 2 / 2);
        // every file still has its enemy pawn back home
        assert_eq!(storm, 0);
    }

    #[test]
    fn test_missing_shield_pawn() {
        let open = with_ctx("4k3/8/8/8/8/8/5P1P/6K1 w - - 0 1", |ctx| {
            evaluate_file(ctx, Color::White, Square::G1.file().bitboard())
        });
        assert_eq!(open, ((-40 * 120) / 100, -6));
    }

    #[test]
    fn test_pointy_chain() {
        // Black pawns c6-d5-e4 against a king-side castled White king
        let fen = "6k1/8/2p5/3p4/4p3/8/5PPP/6K1 w - - 0 1";
        assert_eq!(with_ctx(fen, |ctx| evaluate_chains(ctx, Color::White)), -27);
        // with d4 and e3 the chain meets a matching chain of our own
        let fen = "6k1/8/2p5/3p4/3Pp3/4P3/5PPP/6K1 w - - 0 1";
        assert_eq!(with_ctx(fen, |ctx| evaluate_chains(ctx, Color::White)), -38);
    }

    #[test]
    fn test_chain_fails_returns_bonus() {
        let fen = "6k1/8/3p4/4p1p1/5p1p/8/5PPP/6K1 w - - 0 1";
        assert_eq!(with_ctx(fen, |ctx| evaluate_chains(ctx, Color::White)), 32);
    }

    #[test]
    fn test_chains_mirror() {
        let white = with_ctx("6k1/8/2p5/3p4/4p3/8/5PPP/6K1 w - - 0 1", |ctx| {
            evaluate_chains(ctx, Color::White)
        });
        let black = with_ctx("6k1/5ppp/8/4P3/3P4/2P5/8/6K1 b - - 0 1", |ctx| {
            evaluate_chains(ctx, Color::Black)
        });
        assert_eq!(white, black);
    }
}
