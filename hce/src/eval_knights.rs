use crate::context::EvalContext;
use crate::eval_pieces::{
    king_attack_units, knight_tropism, outpost, reaches_outpost, shielded, KingTarget, PieceTerms,
};
use crate::mobility;
use cozy_chess::{get_knight_moves, Color, Piece};
use evaluation::TaperedScore;
use utils::masks::enemy_half;

pub(super) fn evaluate(
    ctx: &mut EvalContext,
    color: Color,
    target: &KingTarget,
    terms: &mut PieceTerms,
) {
    let params = ctx.params;
    let board = ctx.board();
    let i = color as usize;
    let enemy_pawn_control = ctx.pawn_takes[!color as usize];

    for sq in ctx.pieces(color, Piece::Knight) {
        ctx.add_pst(color, Piece::Knight, sq);
        terms.tropism += knight_tropism(sq, target.king);

        let attacks = get_knight_moves(sq);
        let control = attacks & !board.colors(color);

        // stays on its own half
        if (control & !enemy_pawn_control & enemy_half(color)).is_empty() {
            ctx.add(
                color,
                TaperedScore::new(params.knight_own_half_mg.value, params.knight_own_half_eg.value),
            );
        }

        ctx.all_attacks[i] |= attacks;
        ctx.nbr_attacks[i] |= control;

        if !(control & target.knight_checks).is_empty() {
            ctx.attack_units[i] += params.knight_check.value;
        }

        if reaches_outpost(ctx, color, control) {
            ctx.add(
                color,
                TaperedScore::new(params.knight_reach_mg.value, params.knight_reach_eg.value),
            );
        }

        let units = king_attack_units(
            ctx,
            color,
            attacks & target.zone,
            params.knight_attack.value,
            params.knight_attack_covered.value,
        );
        ctx.attack_units[i] += units;

        let count = (control & !enemy_pawn_control).len() as usize;
        terms.mobility += mobility::knight(count);
        terms.flat_mobility += mobility::knight_flat(count);

        let shield = TaperedScore::new(params.knight_shielded_mg.value, params.knight_shielded_eg.value);
        shielded(ctx, color, sq, shield, terms);
        outpost(ctx, color, Piece::Knight, sq, terms);
    }
}
