use crate::context::EvalContext;
use crate::eval_pieces::{king_attack_units, on_seventh, queen_tropism, KingTarget, PieceTerms};
use crate::mobility;
use cozy_chess::{get_bishop_moves, get_king_moves, get_rook_moves, Color, Piece};
use evaluation::TaperedScore;
use utils::see;

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

    let queens = ctx.pieces(color, Piece::Queen);
    let diagonal_movers = ctx.pieces(color, Piece::Bishop) | queens;
    let straight_movers = ctx.pieces(color, Piece::Rook) | queens;

    for sq in queens {
        ctx.add_pst(color, Piece::Queen, sq);
        terms.tropism += queen_tropism(sq, target.king);

        let control = get_bishop_moves(sq, occupied) | get_rook_moves(sq, occupied);
        ctx.all_attacks[i] |= control;
        ctx.q_attacks[i] |= control;

        if !(control & target.queen_checks).is_empty() {
            ctx.attack_units[i] += params.queen_check.value;

            // contact check that survives the exchange
            let contact = control & get_king_moves(target.king);
            if contact.into_iter().any(|to| see(board, sq, to) >= 0) {
                ctx.attack_units[i] += params.queen_contact_check.value;
            }
        }

        let xray = (get_bishop_moves(sq, occupied ^ diagonal_movers)
            | get_rook_moves(sq, occupied ^ straight_movers))
            & target.zone;
        let units = king_attack_units(
            ctx,
            color,
            xray,
            params.queen_attack.value,
            params.queen_attack_covered.value,
        );
        ctx.attack_units[i] += units;

        let count = (control & !target.excluded).len() as usize;
        terms.mobility += mobility::queen(count);
        terms.flat_mobility += mobility::queen_flat(count);

        if on_seventh(ctx, color, sq) {
            terms.lines += TaperedScore::new(params.queen_seventh_mg.value, params.queen_seventh_eg.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvalParams;
    use crate::tables::EvalTables;
    use cozy_chess::Board;
    use utils::Position;

    fn attack_units(fen: &str, color: Color) -> i32 {
        let board: Board = fen.parse().unwrap();
        let position = Position::new(&board);
        let params = EvalParams::default();
        let tables = EvalTables::new(&params);
        let mut ctx = EvalContext::new(&position, &params, &tables, color);
        let target = KingTarget::new(&ctx, color);
        let mut terms = PieceTerms::default();
        evaluate(&mut ctx, color, &target, &mut terms);
        ctx.attack_units[color as usize]
    }

    #[test]
    fn test_contact_check_needs_safe_square() {
        // Qh5 can reach h7 next to the king; guarded by the rook on h1 it is a safe contact check
        let supported = attack_units("6k1/8/8/7Q/8/8/8/6KR w - - 0 1", Color::White);
        // Qa7 reaches f7, g7 and h7, all of them covered only by the king
        let unsupported = attack_units("6k1/Q7/8/8/8/8/8/6K1 w - - 0 1", Color::White);

        let params = EvalParams::default();
        // zone squares hit: h6, h7, h8, g6, f7
        assert_eq!(
            supported,
            params.queen_check.value + params.queen_contact_check.value + 5 * params.queen_attack.value
        );
        // zone squares hit: f7, h7; no contact bonus
        assert_eq!(unsupported, params.queen_check.value + 2 * params.queen_attack.value);
    }
}
