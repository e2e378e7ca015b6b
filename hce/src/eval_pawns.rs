use crate::context::EvalContext;
use crate::pst::{EMPTY_KING_SIDE, EMPTY_QUEEN_SIDE};
use cozy_chess::{BitBoard, Color, Piece, Square};
use evaluation::TaperedScore;
use utils::masks::{
    adjacent_files, fill_south, front_span, passed_mask, relative_rank, relative_square,
    shift_sideways, support_mask, KING_SIDE, QUEEN_SIDE,
};

/// Central squares a side wants to hold with two pawns.
const BIND_SQUARES: [Square; 4] = [Square::D5, Square::E5, Square::D6, Square::E6];

/// Bonus for a king in the corner behind an enemy pawn that shields it.
const ENEMY_PAWN_SHIELD: i32 = 75;

/// Per-pawn structure terms: candidates, doubled, isolated, backward and pawn mass.
pub(super) fn evaluate(ctx: &mut EvalContext, color: Color) {
    let params = ctx.params;
    let tables = ctx.tables;
    let enemy = !color;
    let own_pawns = ctx.pieces(color, Piece::Pawn);
    let enemy_pawns = ctx.pieces(enemy, Piece::Pawn);
    let own_pawn_control = ctx.pawn_takes[color as usize];

    let mut mass = TaperedScore::ZERO;

    for sq in own_pawns {
        let front = front_span(color, sq);
        let unopposed = (front & enemy_pawns).is_empty();
        let phalanx = !(shift_sideways(sq.bitboard()) & own_pawns).is_empty();
        let defended = own_pawn_control.has(sq);

        if unopposed && (phalanx || defended) && (passed_mask(color, sq) & enemy_pawns).len() == 1 {
            let rank = relative_rank(color, sq);
            ctx.add_pawns(color, TaperedScore::new(tables.candidate_mg[rank], tables.candidate_eg[rank]));
        }

        if !(front & own_pawns).is_empty() {
            ctx.add_pawns(color, TaperedScore::new(params.doubled_mg.value, params.doubled_eg.value));
        }

        if phalanx {
            mass += tables.phalanx_pawn(color, sq);
        } else if defended {
            mass += tables.defended_pawn(color, sq);
        }

        let open = unopposed as i32;
        if (adjacent_files(sq) & own_pawns).is_empty() {
            ctx.add_pawns(
                color,
                TaperedScore::new(
                    params.isolated_mg.value + params.isolated_open.value * open,
                    params.isolated_eg.value,
                ),
            );
        } else if (support_mask(color, sq) & own_pawns).is_empty() {
            ctx.add_pawns(
                color,
                TaperedScore::new(
                    tables.backward_mg[sq.file() as usize] + params.backward_open.value * open,
                    params.backward_eg.value,
                ),
            );
        }
    }

    ctx.add_pawns(color, mass.scaled(params.mass_weight.value));
}

/// Center binds (good), wing binds (bad) and a corner king sheltered by an enemy pawn.
pub(super) fn evaluate_binds(ctx: &mut EvalContext, color: Color) {
    let params = ctx.params;
    let board = ctx.board();
    let double_control = ctx.two_pawns_take[color as usize];
    let own_pawns = ctx.pieces(color, Piece::Pawn);
    let enemy_pawns = ctx.pieces(!color, Piece::Pawn);
    let rel = |sq: Square| relative_square(color, sq);

    let mut cp = 0;

    for sq in BIND_SQUARES {
        if double_control.has(rel(sq)) {
            cp += params.pawn_bind.value;
        }
    }

    for (pawn, bind) in [(Square::B3, Square::B5), (Square::G3, Square::G5)] {
        if own_pawns.has(rel(pawn)) && double_control.has(rel(bind)) {
            cp -= params.pawn_bad_bind.value;
        }
    }

    let king = board.king(color);
    for (corner, pawn) in [(Square::H1, Square::H2), (Square::A1, Square::A2)] {
        if king == rel(corner) && enemy_pawns.has(rel(pawn)) {
            cp += ENEMY_PAWN_SHIELD;
        }
    }

    ctx.add_pawns(color, TaperedScore::new(cp, 0));
}

/// Kings are drawn toward the action when a whole wing is free of pawns.
pub(super) fn evaluate_empty_wings(ctx: &mut EvalContext) {
    let board = ctx.board();
    let pawns = board.pieces(Piece::Pawn);
    if pawns.is_empty() {
        return;
    }

    for color in Color::ALL {
        let king = board.king(color) as usize;
        if (pawns & KING_SIDE).is_empty() {
            ctx.add_pawns(color, TaperedScore::splat(EMPTY_KING_SIDE[king]));
        }
        if (pawns & QUEEN_SIDE).is_empty() {
            ctx.add_pawns(color, TaperedScore::splat(EMPTY_QUEEN_SIDE[king]));
        }
    }
}

pub(super) fn evaluate_islands(ctx: &mut EvalContext, color: Color) {
    let islands = pawn_islands(ctx.pieces(color, Piece::Pawn)) as i32;
    ctx.add_pawns(color, TaperedScore::splat(-islands * ctx.params.pawn_island.value));
}

/// Number of groups of pawns on adjacent files.
#[inline(always)]
fn pawn_islands(pawns: BitBoard) -> u32 {
    let files = fill_south(pawns).0 & 0xFF;
    ((!files >> 1) & files).count_ones()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvalParams;
    use crate::tables::EvalTables;
    use cozy_chess::Board;
    use utils::Position;

    fn pawn_score(fen: &str, color: Color, eval: fn(&mut EvalContext, Color)) -> TaperedScore {
        let board: Board = fen.parse().unwrap();
        let position = Position::new(&board);
        let params = EvalParams::default();
        let tables = EvalTables::new(&params);
        let mut ctx = EvalContext::new(&position, &params, &tables, Color::White);
        eval(&mut ctx, color);
        ctx.pawns[color as usize]
    }

    #[test]
    fn test_islands() {
        let pawns = |fen: &str| {
            let board: Board = fen.parse().unwrap();
            pawn_islands(board.colored_pieces(Color::White, Piece::Pawn))
        };
        assert_eq!(pawns("4k3/8/8/8/8/8/PPPPPPPP/4K3 w - - 0 1"), 1);
        assert_eq!(pawns("4k3/8/8/8/8/8/P1P1P1P1/4K3 w - - 0 1"), 4);
        assert_eq!(pawns("4k3/8/8/P7/P7/8/7P/4K3 w - - 0 1"), 2);
        assert_eq!(pawns("4k3/8/8/8/8/8/8/4K3 w - - 0 1"), 0);
    }

    #[test]
    fn test_isolated_pawn() {
        // lone d-pawn against a lone a-pawn: isolated and unopposed
        let score = pawn_score("4k3/p7/8/8/8/8/3P4/4K3 w - - 0 1", Color::White, evaluate);
        assert_eq!(score, TaperedScore::new(-7 - 13, -7));
    }

    #[test]
    fn test_doubled_pawns() {
        // doubled and isolated: both pawns isolated, the rear one also doubled
        let score = pawn_score("4k3/8/8/8/8/3P4/3P4/4K3 w - - 0 1", Color::White, evaluate);
        assert_eq!(score, TaperedScore::new(2 * (-7 - 13) - 8, 2 * -7 - 21));
    }

    #[test]
    fn test_center_bind() {
        // d5 is held by both c4 and e4
        let score = pawn_score("4k3/8/8/8/2P1P3/8/8/4K3 w - - 0 1", Color::White, evaluate_binds);
        assert_eq!(score, TaperedScore::new(2, 0));
        let mirrored = pawn_score("4k3/8/8/2p1p3/8/8/8/4K3 w - - 0 1", Color::Black, evaluate_binds);
        assert_eq!(mirrored, score);
    }

    #[test]
    fn test_corner_king_behind_enemy_pawn() {
        let score = pawn_score("4k3/8/8/8/8/8/7p/7K w - - 0 1", Color::White, evaluate_binds);
        assert_eq!(score, TaperedScore::new(75, 0));
    }
}
