use crate::context::EvalContext;
use crate::eval_pieces::{king_attack_units, on_seventh, rook_tropism, KingTarget, PieceTerms};
use crate::mobility;
use cozy_chess::{get_rook_moves, Color, Piece};
use evaluation::TaperedScore;

pub(super) fn evaluate(
    ctx: &mut EvalContext,
    color: Color,
    target: &KingTarget,
    terms: &mut PieceTerms,
) {
    let params = ctx.params;
    let board = ctx.board();
    let i = color as usize;
    let enemy = !color;
    let occupied = board.occupied();

    let our_pawns = ctx.pieces(color, Piece::Pawn);
    let their_pawns = ctx.pieces(enemy, Piece::Pawn);
    let straight_movers = ctx.pieces(color, Piece::Rook) | ctx.pieces(color, Piece::Queen);

    for sq in ctx.pieces(color, Piece::Rook) {
        ctx.add_pst(color, Piece::Rook, sq);
        terms.tropism += rook_tropism(sq, target.king);

        let control = get_rook_moves(sq, occupied);
        ctx.nbr_attacks[i] |= control;
        ctx.all_attacks[i] |= control;

        if !(control & !board.colors(color) & target.rook_checks).is_empty() {
            ctx.attack_units[i] += params.rook_check.value;
        }

        // x-ray through own rooks and queens
        let xray = get_rook_moves(sq, occupied ^ straight_movers);
        let units = king_attack_units(
            ctx,
            color,
            xray & target.zone,
            params.rook_attack.value,
            params.rook_attack_covered.value,
        );
        ctx.attack_units[i] += units;

        let count = (control & !target.excluded).len() as usize;
        terms.mobility += mobility::rook(count);
        terms.flat_mobility += mobility::rook_flat(count);

        let file_bb = sq.file().bitboard();

        if !(file_bb & ctx.pieces(enemy, Piece::Queen)).is_empty() {
            terms.lines += TaperedScore::new(params.rook_queen_file_mg.value, params.rook_queen_file_eg.value);
        }

        if (file_bb & our_pawns).is_empty() {
            terms.lines += if (file_bb & their_pawns).is_empty() {
                TaperedScore::new(params.rook_open_mg.value, params.rook_open_eg.value)
            } else if !(file_bb & their_pawns & ctx.pawn_takes[enemy as usize]).is_empty() {
                TaperedScore::new(
                    params.rook_half_open_defended_mg.value,
                    params.rook_half_open_defended_eg.value,
                )
            } else {
                TaperedScore::new(params.rook_half_open_mg.value, params.rook_half_open_eg.value)
            };
        }

        if on_seventh(ctx, color, sq) {
            terms.lines += TaperedScore::new(params.rook_seventh_mg.value, params.rook_seventh_eg.value);
            terms.rooks_on_seventh += 1;
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

    fn lines(fen: &str, color: Color) -> PieceTerms {
        let board: Board = fen.parse().unwrap();
        let position = Position::new(&board);
        let params = EvalParams::default();
        let tables = EvalTables::new(&params);
        let mut ctx = EvalContext::new(&position, &params, &tables, color);
        let target = KingTarget::new(&ctx, color);
        let mut terms = PieceTerms::default();
        evaluate(&mut ctx, color, &target, &mut terms);
        terms
    }

    #[test]
    fn test_open_file() {
        let terms = lines("4k3/pp6/8/8/8/8/PP6/3RK3 w - - 0 1", Color::White);
        assert_eq!(terms.lines, TaperedScore::new(30, 2));
    }

    #[test]
    fn test_half_open_files() {
        // d6 pawn undefended
        let terms = lines("4k3/8/3p4/8/8/8/8/3RK3 w - - 0 1", Color::White);
        assert_eq!(terms.lines, TaperedScore::new(15, 20));
        // d6 pawn defended by c7, value zero by default
        let terms = lines("4k3/2p5/3p4/8/8/8/8/3RK3 w - - 0 1", Color::White);
        assert_eq!(terms.lines, TaperedScore::ZERO);
    }

    #[test]
    fn test_closed_file_with_queen() {
        let terms = lines("3qk3/3p4/8/8/8/8/3P4/3RK3 w - - 0 1", Color::White);
        assert_eq!(terms.lines, TaperedScore::new(9, 18));
    }

    #[test]
    fn test_rooks_on_seventh() {
        let terms = lines("6k1/RR3ppp/8/8/8/8/8/6K1 w - - 0 1", Color::White);
        assert_eq!(terms.rooks_on_seventh, 2);
        // both files are open as well
        assert_eq!(terms.lines, TaperedScore::new(2 * (16 + 30), 2 * (32 + 2)));
    }
}
