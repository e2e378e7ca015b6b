use crate::context::EvalContext;
use crate::eval_pieces::{
    bishop_tropism, king_attack_units, outpost, reaches_outpost, shielded, KingTarget, PieceTerms,
};
use crate::mobility;
use cozy_chess::{get_bishop_moves, Color, Piece};
use evaluation::TaperedScore;
use utils::masks::{enemy_half, shift_east, shift_north, CENTER, DARK_SQUARES, LIGHT_SQUARES};

pub(super) fn evaluate(
    ctx: &mut EvalContext,
    color: Color,
    target: &KingTarget,
    terms: &mut PieceTerms,
) {
    let params = ctx.params;
    let board = ctx.board();
    let i = color as usize;
    let occupied = board.occupied();
    let bishops = ctx.pieces(color, Piece::Bishop);
    let own_pawns = ctx.pieces(color, Piece::Pawn);
    let enemy_pawns = ctx.pieces(!color, Piece::Pawn);

    for sq in bishops {
        ctx.add_pst(color, Piece::Bishop, sq);
        terms.tropism += bishop_tropism(sq, target.king);

        let control = get_bishop_moves(sq, occupied);
        ctx.nbr_attacks[i] |= control;
        ctx.all_attacks[i] |= control;

        if (control & enemy_half(color)).is_empty() {
            ctx.add(
                color,
                TaperedScore::new(params.bishop_own_half_mg.value, params.bishop_own_half_eg.value),
            );
        }

        if !(control & target.bishop_checks).is_empty() {
            ctx.attack_units[i] += params.bishop_check.value;
        }

        // x-ray through own queens
        let xray = get_bishop_moves(sq, occupied ^ ctx.pieces(color, Piece::Queen));
        let units = king_attack_units(
            ctx,
            color,
            xray & target.zone,
            params.bishop_attack.value,
            params.bishop_attack_covered.value,
        );
        ctx.attack_units[i] += units;

        let count = (control & !target.excluded).len() as usize;
        terms.mobility += mobility::bishop(count);
        terms.flat_mobility += mobility::bishop_flat(count);

        if reaches_outpost(ctx, color, control) {
            ctx.add(
                color,
                TaperedScore::new(params.bishop_reach_mg.value, params.bishop_reach_eg.value),
            );
        }

        let shield = TaperedScore::new(params.bishop_shielded_mg.value, params.bishop_shielded_eg.value);
        shielded(ctx, color, sq, shield, terms);
        outpost(ctx, color, Piece::Bishop, sq, terms);

        // bishops side by side
        if !(shift_north(sq.bitboard()) & bishops).is_empty() {
            ctx.add(color, TaperedScore::splat(4));
        }
        if !(shift_east(sq.bitboard()) & bishops).is_empty() {
            ctx.add(color, TaperedScore::splat(4));
        }

        // Pawns on the bishop's square color; central own pawns count twice
        let squares = if LIGHT_SQUARES.has(sq) {
            LIGHT_SQUARES
        } else {
            DARK_SQUARES
        };
        let own = (squares & own_pawns).len() as i32 - 4 + (squares & own_pawns & CENTER).len() as i32;
        let opp = (squares & enemy_pawns).len() as i32 - 4;
        ctx.add(
            color,
            TaperedScore::splat(params.bishop_own_pawns.value * own + params.bishop_opp_pawns.value * opp),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvalParams;
    use crate::tables::EvalTables;
    use cozy_chess::Board;
    use utils::Position;

    fn run(fen: &str, color: Color) -> (TaperedScore, PieceTerms, i32) {
        let board: Board = fen.parse().unwrap();
        let position = Position::new(&board);
        let params = EvalParams::default();
        let tables = EvalTables::new(&params);
        let mut ctx = EvalContext::new(&position, &params, &tables, color);
        let target = KingTarget::new(&ctx, color);
        let mut terms = PieceTerms::default();
        let before = ctx.score[color as usize];
        evaluate(&mut ctx, color, &target, &mut terms);
        (ctx.score[color as usize] - before, terms, ctx.attack_units[color as usize])
    }

    #[test]
    fn test_bad_bishop_penalized() {
        // light-squared bishop behind pawns on light squares
        let (bad, _, _) = run("4k3/8/8/8/2P1P3/1P1P4/8/4KB2 w - - 0 1", Color::White);
        let (good, _, _) = run("4k3/8/8/8/1P1P4/2P1P3/8/4KB2 w - - 0 1", Color::White);
        assert!(bad.mg < good.mg);
    }

    #[test]
    fn test_queen_xray_counts_toward_king_attack() {
        // Bb2 behind Qd4 aims at g7
        let with_queen = run("6k1/8/8/8/3Q4/8/1B6/6K1 w - - 0 1", Color::White).2;
        let without = run("6k1/8/8/8/8/8/1B6/6K1 w - - 0 1", Color::White).2;
        assert_eq!(with_queen, without);
        assert!(with_queen > 0);
    }

    #[test]
    fn test_mobility_excludes_enemy_pawn_control() {
        let (_, terms, _) = run("4k3/8/8/2p5/8/8/8/B3K3 w - - 0 1", Color::White);
        // d4 is controlled by c5, the other six diagonal squares count
        assert_eq!(terms.mobility, mobility::bishop(6));
        assert_eq!(terms.flat_mobility, mobility::bishop_flat(6));
    }
}
