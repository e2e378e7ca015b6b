use crate::context::EvalContext;
use crate::eval_drawish::{checkmate_helper, draw_factor, NO_SCALING};
use cozy_chess::{Color, Piece};
use evaluation::scores::{clip, percent, relative_to};
use evaluation::TaperedScore;

const MAX_WEIGHT_SHIFT: i32 = 40;

/// Turns the collected per-side totals into one White-relative score within
/// `MAX_EVAL`.
pub(super) fn compose(ctx: &EvalContext, game_key: u64) -> i32 {
    let params = ctx.params;
    let position = ctx.position;
    let board = ctx.board();

    let mut score = (ctx.score[0] - ctx.score[1]).interpolate(ctx.phase);
    score += blend_pst(ctx);
    if params.mobility_rebalancing.value {
        score += rebalance_mobility(ctx);
    }
    score += exchange_imbalance(ctx);
    score += blur(params.eval_blur.value, position.hash(), game_key);
    score += checkmate_helper(board);

    let factor = if score > 0 {
        draw_factor(board, Color::White)
    } else if score < 0 {
        draw_factor(board, Color::Black)
    } else {
        NO_SCALING
    };
    score = (score * factor) / NO_SCALING;

    clip(score)
}

/// Shift of weight toward the better-scoring hypothesis, from the difference
/// between the two.
#[inline(always)]
fn weight_shift(delta: i32) -> i32 {
    ((delta.abs() as f64).sqrt() as i32).min(MAX_WEIGHT_SHIFT)
}

/// Blends the two piece-square hypotheses. Whichever one suits the side to move
/// better gets more weight.
fn blend_pst(ctx: &EvalContext) -> i32 {
    let params = ctx.params;
    let stm = ctx.board().side_to_move();

    let primary = (ctx.primary_pst[0] - ctx.primary_pst[1]).interpolate(ctx.phase);
    let secondary = (ctx.secondary_pst[0] - ctx.secondary_pst[1]).interpolate(ctx.phase);

    // Delta is taken from the mover's side; a White-relative delta breaks color symmetry.
    let delta = relative_to((50 * (primary - secondary)) / 100, stm);
    let shift = weight_shift(delta);

    let mut primary_weight = params.primary_pst_weight.value;
    let mut secondary_weight = params.secondary_pst_weight.value;
    if delta > 0 {
        primary_weight += shift;
        secondary_weight -= shift;
    } else if delta < 0 {
        primary_weight -= shift;
        secondary_weight += shift;
    }

    percent(primary, primary_weight) + percent(secondary, secondary_weight)
}

/// Same scheme for mobility: dynamic (per-side weighted) against flat.
fn rebalance_mobility(ctx: &EvalContext) -> i32 {
    let params = ctx.params;
    let stm = ctx.board().side_to_move();
    let [white, black] = ctx.dynamic_mobility;

    let dynamic = (white - black).interpolate(ctx.phase);
    let flat = (ctx.flat_mobility[0] - ctx.flat_mobility[1]).interpolate(ctx.phase);

    // oriented like the PST blend
    let delta = relative_to((50 * (dynamic - flat)) / 100, stm);
    let shift = weight_shift(delta);

    let [mut white_weight, mut black_weight] = ctx.side_mobility;
    let mut flat_weight = params.flat_mobility.value;
    if delta > 0 {
        white_weight += shift;
        black_weight += shift;
        flat_weight -= shift;
    } else if delta < 0 {
        white_weight -= shift;
        black_weight -= shift;
        flat_weight += shift;
    }

    let weighted = TaperedScore::new(
        (white.mg * white_weight - black.mg * black_weight) / 100,
        (white.eg * white_weight - black.eg * black_weight) / 100,
    );
    weighted.interpolate(ctx.phase) + percent(flat, flat_weight)
}

/// A minor traded for a rook (or two minors for a queen and so on) leaves the side
/// with the extra major slightly better than raw material says.
fn exchange_imbalance(ctx: &EvalContext) -> i32 {
    let position = ctx.position;
    let minors = position.minor_count(Color::White) - position.minor_count(Color::Black);
    let majors = position.count(Color::White, Piece::Rook) - position.count(Color::Black, Piece::Rook)
        + 2 * (position.count(Color::White, Piece::Queen) - position.count(Color::Black, Piece::Queen));

    match (minors, majors) {
        (-1, 1) => ctx.params.exchange_imbalance.value,
        (1, -1) => -ctx.params.exchange_imbalance.value,
        _ => 0,
    }
}

/// Pseudo-random offset in `(-blur/2, blur/2]`, fixed per position and game.
#[inline(always)]
fn blur(blur: i32, hash: u64, game_key: u64) -> i32 {
    if blur <= 0 {
        return 0;
    }
    blur / 2 - ((hash ^ game_key) % blur as u64) as i32
}
