use crate::context::EvalContext;
use cozy_chess::{Color, Piece};
use evaluation::TaperedScore;

/// Material imbalance adjustments on top of the piece values already in the baseline.
pub(super) fn evaluate(ctx: &mut EvalContext, color: Color) {
    let params = ctx.params;
    let tables = ctx.tables;

    let pawns = ctx.count(color, Piece::Pawn) as usize;
    let knights = ctx.count(color, Piece::Knight);
    let bishops = ctx.count(color, Piece::Bishop);
    let rooks = ctx.count(color, Piece::Rook);
    let queens = ctx.count(color, Piece::Queen);

    // Knights like a closed board, rooks an open one
    let mut cp = tables.knight_pawn_adj[pawns] * knights - tables.rook_pawn_adj[pawns] * rooks;

    if knights > 1 {
        cp += params.knight_pair.value;
    }
    if rooks > 1 {
        cp += params.rook_pair.value;
    }
    if bishops > 1 {
        ctx.add(
            color,
            TaperedScore::new(params.bishop_pair_mg.value, params.bishop_pair_eg.value),
        );
    }

    // Queens suffer from enemy minors harassing them
    if queens > 0 {
        cp -= params.elephantiasis.value * ctx.position.minor_count(!color);
    }

    ctx.add(color, TaperedScore::splat(cp));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvalParams;
    use crate::tables::EvalTables;
    use cozy_chess::Board;
    use utils::Position;

    fn adjustment(fen: &str, color: Color) -> TaperedScore {
        let board: Board = fen.parse().unwrap();
        let position = Position::new(&board);
        let params = EvalParams::default();
        let tables = EvalTables::new(&params);
        let mut ctx = EvalContext::new(&position, &params, &tables, Color::White);
        let baseline = ctx.score[color as usize];
        evaluate(&mut ctx, color);
        ctx.score[color as usize] - baseline
    }

    #[test]
    fn test_start_position() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        // knights +2*24, knight pair -1, rook pair -11, four enemy minors -20, bishop pair +51
        assert_eq!(adjustment(fen, Color::White), TaperedScore::splat(48 - 1 - 11 - 20 + 51));
        assert_eq!(adjustment(fen, Color::White), adjustment(fen, Color::Black));
    }

    #[test]
    fn test_knight_loses_value_without_pawns() {
        let closed = adjustment("4k3/8/8/8/8/8/PPPPPPPP/1N2K3 w - - 0 1", Color::White);
        let open = adjustment("4k3/8/8/8/8/8/8/1N2K3 w - - 0 1", Color::White);
        assert_eq!(closed, TaperedScore::splat(24));
        assert_eq!(open, TaperedScore::splat(-24));
    }

    #[test]
    fn test_lone_queen_without_enemy_minors() {
        let score = adjustment("4k3/8/8/8/8/8/8/3QK3 w - - 0 1", Color::White);
        assert_eq!(score, TaperedScore::ZERO);
    }
}
