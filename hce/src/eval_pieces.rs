use crate::context::EvalContext;
use crate::{eval_bishops, eval_knights, eval_queens, eval_rooks};
use cozy_chess::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_rook_moves, BitBoard, Color, Piece,
    Square,
};
use evaluation::scores::percent;
use evaluation::TaperedScore;
use utils::distance::{closeness, manhattan};
use utils::masks::{home_half, king_root, outpost_map, relative_rank_mask, shift_forward};
use utils::minors;

/// Bonus for the defending side by number of own minors in its king zone (capped at four).
const KING_DEFENDERS: [i32; 5] = [-5, 0, 3, 6, 9];

// Tropism by distance to the enemy king. Bishops are measured along both diagonals.
const KNIGHT_TROPISM: [i32; 15] = [14, 22, 29, 28, 19, -1, -6, -10, -11, -12, -13, -14, -15, -16, -17];
const BISHOP_TROPISM: [i32; 15] = [6, -12, 4, -16, -11, -17, -6, -14, -9, -17, -1, -17, -4, 3, 7];
const ROOK_TROPISM: [i32; 15] = [7, 22, 23, 22, 22, 16, -2, -5, -14, -10, -8, -15, -16, -17, -17];
const QUEEN_TROPISM: [i32; 15] = [35, 49, 47, 44, 40, 14, 3, 0, -2, 1, 4, -3, -5, -6, -9];

/// The enemy king as seen by one side's pieces.
pub(super) struct KingTarget {
    pub king: Square,
    /// Squares around the king root.
    pub zone: BitBoard,
    pub knight_checks: BitBoard,
    pub bishop_checks: BitBoard,
    pub rook_checks: BitBoard,
    pub queen_checks: BitBoard,
    /// Own pawns and squares controlled by enemy pawns don't count as mobility.
    pub excluded: BitBoard,
}

impl KingTarget {
    pub(super) fn new(ctx: &EvalContext, color: Color) -> Self {
        let board = ctx.board();
        let enemy = !color;
        let king = board.king(enemy);
        let occupied = board.occupied();
        let safe = !board.colors(color) & !ctx.pawn_takes[enemy as usize];

        let bishop_checks = get_bishop_moves(king, occupied) & safe;
        let rook_checks = get_rook_moves(king, occupied) & safe;

        Self {
            king,
            zone: get_king_moves(king_root(king)),
            knight_checks: get_knight_moves(king) & safe,
            bishop_checks,
            rook_checks,
            queen_checks: bishop_checks | rook_checks,
            excluded: ctx.pieces(color, Piece::Pawn) | ctx.pawn_takes[enemy as usize],
        }
    }
}

/// Per-side sums collected over all pieces, weighted once at the end.
#[derive(Default)]
pub(super) struct PieceTerms {
    pub mobility: TaperedScore,
    pub flat_mobility: TaperedScore,
    pub tropism: i32,
    pub lines: TaperedScore,
    pub outposts: TaperedScore,
    pub rooks_on_seventh: i32,
}

pub(super) fn evaluate(ctx: &mut EvalContext, color: Color) {
    let params = ctx.params;
    let i = color as usize;
    let enemy = !color;

    let target = KingTarget::new(ctx, color);

    let defenders = (minors(ctx.board(), enemy) & target.zone).len().min(4) as usize;
    ctx.add(enemy, TaperedScore::new(KING_DEFENDERS[defenders], 0));

    let mut terms = PieceTerms::default();
    eval_knights::evaluate(ctx, color, &target, &mut terms);
    eval_bishops::evaluate(ctx, color, &target, &mut terms);
    eval_rooks::evaluate(ctx, color, &target, &mut terms);
    eval_queens::evaluate(ctx, color, &target, &mut terms);

    if terms.rooks_on_seventh > 1 {
        terms.lines += TaperedScore::new(params.rooks_seventh_mg.value, params.rooks_seventh_eg.value);
    }

    if params.mobility_rebalancing.value {
        ctx.dynamic_mobility[i] = terms.mobility;
        ctx.flat_mobility[i] = terms.flat_mobility;
    } else {
        let weight = ctx.side_mobility[i];
        ctx.add(color, terms.mobility.scaled(weight));
        ctx.add(color, terms.flat_mobility.scaled(params.flat_mobility.value));
    }

    ctx.add(color, TaperedScore::new(percent(terms.tropism, params.tropism_weight.value), 0));
    ctx.add(color, terms.lines.scaled(params.lines_weight.value));
    ctx.add(color, terms.outposts.scaled(params.outposts_weight.value));
}

/// Attack units for the zone squares hit by one piece. Squares covered by enemy pawns
/// count at the lower rate.
#[inline(always)]
pub(super) fn king_attack_units(
    ctx: &EvalContext,
    color: Color,
    attack: BitBoard,
    uncovered: i32,
    covered: i32,
) -> i32 {
    let enemy_pawn_control = ctx.pawn_takes[!color as usize];
    uncovered * (attack & !enemy_pawn_control).len() as i32
        + covered * (attack & enemy_pawn_control).len() as i32
}

/// The piece controls an outpost square that enemy pawns neither attack now
/// nor could after advancing.
#[inline(always)]
pub(super) fn reaches_outpost(ctx: &EvalContext, color: Color, control: BitBoard) -> bool {
    let enemy = !color as usize;
    !(control & !ctx.pawn_takes[enemy] & !ctx.pawn_can_take[enemy] & outpost_map(color)).is_empty()
}

/// Minor on its own half with a pawn directly in front of it.
#[inline(always)]
pub(super) fn shielded(
    ctx: &EvalContext,
    color: Color,
    sq: Square,
    bonus: TaperedScore,
    terms: &mut PieceTerms,
) {
    if !home_half(color).has(sq) {
        return;
    }
    let pawns = ctx.board().pieces(Piece::Pawn);
    if !(shift_forward(sq.bitboard(), color) & pawns).is_empty() {
        terms.outposts += bonus;
    }
}

pub(super) fn outpost(
    ctx: &EvalContext,
    color: Color,
    piece: Piece,
    sq: Square,
    terms: &mut PieceTerms,
) {
    let base = ctx.tables.outpost(color, piece, sq);
    if base == 0 {
        return;
    }
    let value = base + closeness(sq, ctx.board().king(!color)) / 2;

    let mut mul = 0;
    if !ctx.pawn_can_take[!color as usize].has(sq) {
        mul += 2;
    }
    if ctx.pawn_takes[color as usize].has(sq) {
        mul += 1;
    }
    if ctx.two_pawns_take[color as usize].has(sq) {
        mul += 1;
    }
    terms.outposts += TaperedScore::splat((value * mul) / 2);
}

/// Major piece on the relative 7th rank with enemy pawns there or the enemy king on the 8th.
#[inline(always)]
pub(super) fn on_seventh(ctx: &EvalContext, color: Color, sq: Square) -> bool {
    let enemy = !color;
    relative_rank_mask(color, 6).has(sq)
        && (!(ctx.pieces(enemy, Piece::Pawn) & relative_rank_mask(color, 6)).is_empty()
            || relative_rank_mask(color, 7).has(ctx.board().king(enemy)))
}

#[inline(always)]
pub(super) fn knight_tropism(sq: Square, king: Square) -> i32 {
    KNIGHT_TROPISM[manhattan(sq, king) as usize]
}

#[inline(always)]
pub(super) fn bishop_tropism(sq: Square, king: Square) -> i32 {
    let file = |s: Square| s.file() as i32;
    let rank = |s: Square| s.rank() as i32;
    let up_left = (file(sq) + rank(sq) - file(king) - rank(king)).abs();
    let up_right = ((7 - file(sq) + rank(sq)) - (7 - file(king) + rank(king))).abs();
    BISHOP_TROPISM[up_right as usize] + BISHOP_TROPISM[up_left as usize]
}

#[inline(always)]
pub(super) fn rook_tropism(sq: Square, king: Square) -> i32 {
    ROOK_TROPISM[manhattan(sq, king) as usize]
}

#[inline(always)]
pub(super) fn queen_tropism(sq: Square, king: Square) -> i32 {
    let distance = manhattan(sq, king);
    QUEEN_TROPISM[distance as usize] + 7 * (14 - distance)
}
