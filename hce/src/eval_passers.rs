use crate::context::EvalContext;
use cozy_chess::{Color, Piece, Square};
use evaluation::TaperedScore;
use utils::distance::{chebyshev, closeness};
use utils::masks::{
    front_span, passed_mask, relative_rank, relative_rank_mask, shift_forward, CENTER,
};

/// Endgame bonus for a passer that wins the race to promotion.
const UNSTOPPABLE_BONUS: i32 = 500;

/// Bonus for a 7th-rank passer that ties down a rook or queen on its stop square.
const MAJOR_BLOCKADE_BONUS: i32 = 100;

/// Pawn placement, pawn mobility and passed pawns. Not cached: depends on piece
/// placement and attack maps.
pub(super) fn evaluate(ctx: &mut EvalContext, color: Color) {
    let params = ctx.params;
    let tables = ctx.tables;
    let board = ctx.board();
    let i = color as usize;
    let enemy = !color;
    let occupied = board.occupied();
    let enemy_pawns = ctx.pieces(enemy, Piece::Pawn);
    let enemy_majors = ctx.pieces(enemy, Piece::Rook) | ctx.pieces(enemy, Piece::Queen);
    let own_king = board.king(color);
    let enemy_king = board.king(enemy);

    let mut total = TaperedScore::ZERO;

    for sq in ctx.pieces(color, Piece::Pawn) {
        ctx.add_pst(color, Piece::Pawn, sq);
        let stop = shift_forward(sq.bitboard(), color);

        if (stop & occupied).is_empty() {
            ctx.add(
                color,
                TaperedScore::new(params.pawn_mobility_mg.value, params.pawn_mobility_eg.value),
            );
            if CENTER.has(sq) {
                ctx.add(color, TaperedScore::new(2, 0));
            }
        }

        if !(passed_mask(color, sq) & enemy_pawns).is_empty() {
            continue;
        }

        let mut mul = 100;
        if ctx.pawn_takes[i].has(sq) {
            mul += params.passed_defended_mul.value;
        }
        if !(stop & ctx.pawn_takes[i]).is_empty() {
            mul += params.passed_stop_defended_mul.value;
        }

        let ours = !(stop & ctx.all_attacks[i]).is_empty();
        let theirs = !(stop & ctx.all_attacks[enemy as usize]).is_empty();
        if !(stop & occupied).is_empty() {
            mul -= params.passed_blocked_mul.value;
        } else if ours && !theirs {
            mul += params.passed_our_stop_mul.value;
        } else if theirs && !ours {
            mul -= params.passed_opp_stop_mul.value;
        }

        // In the endgame the passer attracts both kings
        let rank = relative_rank(color, sq);
        let eg = tables.passed_eg[rank];
        let mg = tables.passed_mg[rank];
        let eg = eg - (eg * closeness(sq, enemy_king)) / 30 + (eg * closeness(sq, own_king)) / 90;
        total += TaperedScore::new(mg, eg).scaled(mul);

        if relative_rank_mask(color, 6).has(sq) && !(stop & enemy_majors).is_empty() {
            ctx.add(color, TaperedScore::new(0, MAJOR_BLOCKADE_BONUS));
        }
    }

    ctx.add(color, total.scaled(params.passers_weight.value));
}

/// Pawn races against a bare king. Whoever promotes at least two tempi ahead of the
/// other side gets a decisive endgame bonus.
pub(super) fn evaluate_unstoppable(ctx: &mut EvalContext) {
    let white = race(ctx, Color::White);
    let black = race(ctx, Color::Black);

    if white < black - 1 {
        ctx.add(Color::White, TaperedScore::new(0, UNSTOPPABLE_BONUS));
    }
    if black < white - 1 {
        ctx.add(Color::Black, TaperedScore::new(0, UNSTOPPABLE_BONUS));
    }
}

/// Moves the fastest unstoppable passer of `color` needs to promote; 8 if there is none.
fn race(ctx: &EvalContext, color: Color) -> i32 {
    let board = ctx.board();
    let enemy = !color;
    let mut best = 8;

    if ctx.position.piece_count(enemy) != 0 {
        return best;
    }

    let enemy_king = board.king(enemy);
    let tempo = (board.side_to_move() == enemy) as i32;
    let enemy_pawns = ctx.pieces(enemy, Piece::Pawn);
    let own_king = ctx.pieces(color, Piece::King);

    for sq in ctx.pieces(color, Piece::Pawn) {
        if !(passed_mask(color, sq) & enemy_pawns).is_empty() {
            continue;
        }
        let promotion = promotion_square(color, sq);
        let mut distance = chebyshev(sq, promotion).min(5);
        if distance < chebyshev(enemy_king, promotion) - tempo {
            if !(front_span(color, sq) & own_king).is_empty() {
                distance += 1;
            }
            best = best.min(distance);
        }
    }
    best
}

#[inline(always)]
fn promotion_square(color: Color, sq: Square) -> Square {
    let rank = match color {
        Color::White => 7,
        Color::Black => 0,
    };
    Square::index(rank * 8 + sq.file() as usize)
}
