use crate::context::EvalContext;
use cozy_chess::{BitBoard, Color, Piece};
use evaluation::scores::percent;
use evaluation::TaperedScore;
use utils::masks::{fill_north, fill_south, space_area};

// Indexed by the attacked piece. Kings and pawns are never scored as targets.
const HANGING_MG: [i32; Piece::NUM] = [0, 15, 15, 17, 25, 0];
const HANGING_EG: [i32; Piece::NUM] = [0, 23, 23, 25, 33, 0];
const DEFENDED_MG: [i32; Piece::NUM] = [0, 8, 8, 10, 15, 0];
const DEFENDED_EG: [i32; Piece::NUM] = [0, 12, 12, 14, 19, 0];
const FLOATING_MG: [i32; Piece::NUM] = [0, 5, 5, 5, 5, 0];
const FLOATING_EG: [i32; Piece::NUM] = [0, 9, 9, 9, 9, 0];

/// Pressure on enemy pieces: hanging, attacked but defended, and loose pieces nobody
/// looks at.
pub(super) fn evaluate(ctx: &mut EvalContext, color: Color) {
    let params = ctx.params;
    let board = ctx.board();
    let i = color as usize;
    let enemy = (!color) as usize;

    let mut undefended = board.colors(!color);
    let threatened = undefended & ctx.pawn_takes[i];
    let mut defended = undefended & ctx.all_attacks[enemy];
    let mut hanging = undefended & !ctx.pawn_takes[enemy];

    undefended &= !ctx.all_attacks[i];
    undefended &= !ctx.all_attacks[enemy];

    // a piece attacked by a pawn is never well defended
    hanging |= threatened;
    hanging &= ctx.all_attacks[i];

    defended &= ctx.nbr_attacks[i];
    defended &= !ctx.pawn_takes[i];

    let score = targets(ctx, hanging, &HANGING_MG, &HANGING_EG)
        + targets(ctx, defended, &DEFENDED_MG, &DEFENDED_EG)
        + targets(ctx, undefended, &FLOATING_MG, &FLOATING_EG);

    ctx.add(color, score.scaled(params.threats_weight.value));
}

fn targets(
    ctx: &EvalContext,
    squares: BitBoard,
    mg: &[i32; Piece::NUM],
    eg: &[i32; Piece::NUM],
) -> TaperedScore {
    let board = ctx.board();
    squares
        .into_iter()
        .filter_map(|sq| board.piece_on(sq))
        .fold(TaperedScore::ZERO, |acc, piece| {
            acc + TaperedScore::new(mg[piece as usize], eg[piece as usize])
        })
}

/// Space: central squares only we control, and squares behind our pawn chain.
/// Scaled by the number of own minor pieces, so mostly an opening term.
pub(super) fn evaluate_space(ctx: &mut EvalContext, color: Color) {
    let params = ctx.params;
    let i = color as usize;
    let own_pawns = ctx.pieces(color, Piece::Pawn);

    let behind = match color {
        Color::White => fill_south(own_pawns),
        Color::Black => fill_north(own_pawns),
    };
    let minors = ctx.position.minor_count(color);

    let mut space = space_area(color) & ctx.all_attacks[i];
    space |= !ctx.all_attacks[(!color) as usize];
    let mut bonus = minors * space.len() as i32 / 2;

    space |= behind;
    bonus += minors * space.len() as i32;

    ctx.add(color, TaperedScore::new(percent(bonus, params.space_weight.value), 0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvalParams;
    use crate::tables::EvalTables;
    use cozy_chess::Board;
    use utils::Position;

    fn threat_score(fen: &str, color: Color) -> TaperedScore {
        let board: Board = fen.parse().unwrap();
        let position = Position::new(&board);
        let params = EvalParams::default();
        let tables = EvalTables::new(&params);
        let mut ctx = EvalContext::new(&position, &params, &tables, Color::White);
        let before = ctx.score[color as usize];
        evaluate(&mut ctx, color);
        ctx.score[color as usize] - before
    }

    #[test]
    fn test_pawn_attacks_knight() {
        // e4 pawn hits the knight on d5, which a pawn on c6 defends
        let score = threat_score("4k3/8/2p5/3n4/4P3/8/8/4K3 w - - 0 1", Color::White);
        // pawn-defended, but attacked by a pawn: counts as hanging. Loose pawns score nothing.
        assert_eq!(score, TaperedScore::new(15, 23).scaled(109));
    }

    #[test]
    fn test_loose_pieces() {
        // nothing attacks or defends the rook on a8
        let score = threat_score("r3k3/8/8/8/8/8/8/4K3 w - - 0 1", Color::White);
        assert_eq!(score, TaperedScore::new(5, 9).scaled(109));
    }

    #[test]
    fn test_space_disabled_by_default() {
        let board = Board::default();
        let position = Position::new(&board);
        let params = EvalParams::default();
        let tables = EvalTables::new(&params);
        let mut ctx = EvalContext::new(&position, &params, &tables, Color::White);
        let before = ctx.score[0];
        evaluate_space(&mut ctx, Color::White);
        assert_eq!(ctx.score[0], before);

        let params = params.set("Space", "100").unwrap();
        let mut ctx = EvalContext::new(&position, &params, &tables, Color::White);
        evaluate_space(&mut ctx, Color::White);
        assert!(ctx.score[0].mg > before.mg);
    }
}
