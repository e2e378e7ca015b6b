use crate::context::EvalContext;
use cozy_chess::{get_king_moves, Color, Piece};
use evaluation::scores::percent;
use evaluation::TaperedScore;
use utils::masks::king_root;

const UNDEFENDED_ZONE_UNITS: i32 = 5;
const MAX_ATTACK_UNITS: i32 = 399;

/// King placement plus the final score of `color`'s attack on the enemy king.
/// Runs after every piece evaluator, once the attack maps are complete.
pub(super) fn evaluate(ctx: &mut EvalContext, color: Color) {
    let tables = ctx.tables;
    let board = ctx.board();
    let i = color as usize;
    let enemy = !color;

    ctx.add_pst(color, Piece::King, board.king(color));

    // Zone squares we hit and they don't cover with anything but the king
    let zone = get_king_moves(king_root(board.king(enemy)));
    let attacks = (ctx.pawn_takes[i] | ctx.piece_attacks(color)) & zone;
    let defences = ctx.pawn_takes[enemy as usize] | ctx.piece_attacks(enemy);
    ctx.attack_units[i] += UNDEFENDED_ZONE_UNITS * (attacks & !defences).len() as i32;

    let units = if ctx.count(color, Piece::Queen) == 0 {
        0
    } else {
        ctx.attack_units[i].clamp(0, MAX_ATTACK_UNITS)
    };
    ctx.attack_units[i] = units;

    let danger = percent(tables.danger[units as usize], ctx.side_attack[i]);
    ctx.add(color, TaperedScore::splat(danger));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvalParams;
    use crate::tables::EvalTables;
    use cozy_chess::Board;
    use utils::Position;

    /// Runs the king evaluator with `units` already collected by the pieces.
    fn king_attack(fen: &str, units: i32) -> (i32, TaperedScore) {
        let board: Board = fen.parse().unwrap();
        let position = Position::new(&board);
        let params = EvalParams::default();
        let tables = EvalTables::new(&params);
        let mut ctx = EvalContext::new(&position, &params, &tables, Color::White);
        ctx.attack_units[0] = units;
        let before = ctx.score[0];
        evaluate(&mut ctx, Color::White);
        (ctx.attack_units[0], ctx.score[0] - before)
    }

    #[test]
    fn test_danger_lookup() {
        let (units, score) = king_attack("6k1/8/8/8/8/8/8/1Q4K1 w - - 0 1", 50);
        assert_eq!(units, 50);
        // danger[50] = 26, weighted by 110%
        assert_eq!(score, TaperedScore::splat(28));
    }

    #[test]
    fn test_units_are_capped() {
        let (units, score) = king_attack("6k1/8/8/8/8/8/8/1Q4K1 w - - 0 1", 5000);
        assert_eq!(units, MAX_ATTACK_UNITS);
        let tables = EvalTables::new(&EvalParams::default());
        assert_eq!(score, TaperedScore::splat(percent(tables.danger[399], 110)));
    }

    #[test]
    fn test_no_queen_no_attack() {
        let (units, score) = king_attack("6k1/8/8/8/8/8/8/1R4K1 w - - 0 1", 120);
        assert_eq!(units, 0);
        assert_eq!(score, TaperedScore::ZERO);
    }

    #[test]
    fn test_undefended_zone_squares() {
        // h5 pawn hits g6 in the zone around g7
        let (units, _) = king_attack("6k1/8/8/7P/8/8/8/1Q4K1 w - - 0 1", 0);
        assert_eq!(units, UNDEFENDED_ZONE_UNITS);
        // a black pawn on f7 covers g6
        let (units, _) = king_attack("6k1/5p2/8/7P/8/8/8/1Q4K1 w - - 0 1", 0);
        assert_eq!(units, 0);
    }

    #[test]
    fn test_king_pst_added() {
        let board = Board::default();
        let position = Position::new(&board);
        let params = EvalParams::default();
        let tables = EvalTables::new(&params);
        let mut ctx = EvalContext::new(&position, &params, &tables, Color::White);
        evaluate(&mut ctx, Color::White);
        assert_eq!(
            ctx.primary_pst[0],
            tables.primary_pst(Color::White, Piece::King, cozy_chess::Square::E1)
        );
    }
}
