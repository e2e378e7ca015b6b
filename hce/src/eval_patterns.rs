use crate::context::EvalContext;
use cozy_chess::{BitBoard, Color, Piece, Square};
use evaluation::TaperedScore;
use utils::masks::{king_side_castle, queen_side_castle, relative_rank_mask, relative_square};

/// Knight pinned against king or queen by a bishop on the same diagonal.
const PIN_BONUS: TaperedScore = TaperedScore::new(10, 5);

// Pin lines from White's side: far pinned square, near pinned square, knight, bishop
// squares. Mirrored for Black.
const PIN_LINES: [[Square; 5]; 2] = [
    [Square::D8, Square::E7, Square::F6, Square::G5, Square::H4],
    [Square::E8, Square::D7, Square::C6, Square::B5, Square::A4],
];

// Castled king with no escape square: king square and the pawns in front of it.
const NO_LUFT: [(Square, &[Square]); 4] = [
    (Square::H1, &[Square::H2, Square::G2]),
    (Square::G1, &[Square::H2, Square::G2, Square::F2]),
    (Square::A1, &[Square::A2, Square::B2]),
    (Square::B1, &[Square::A2, Square::B2, Square::C2]),
];

/// Fixed-square patterns for `color`, given from White's side and mirrored for Black.
pub(super) fn evaluate(ctx: &mut EvalContext, color: Color) {
    let score = knight_patterns(ctx, color)
        + bishop_patterns(ctx, color)
        + king_patterns(ctx, color)
        + central_patterns(ctx, color);
    ctx.add(color, score);
}

fn knight_patterns(ctx: &EvalContext, color: Color) -> TaperedScore {
    let trapped = TaperedScore::splat(ctx.params.knight_trapped.value);
    let own = |piece, sq| ctx.is_on(color, piece, relative_square(color, sq));
    let opp = |piece, sq| ctx.is_on(!color, piece, relative_square(color, sq));

    let mut score = TaperedScore::ZERO;
    for (knight, pawns) in [(Square::A7, [Square::A6, Square::B7]), (Square::H7, [Square::H6, Square::G7])] {
        if own(Piece::Knight, knight) && pawns.iter().all(|&sq| opp(Piece::Pawn, sq)) {
            score += trapped;
        }
    }
    score
}

fn bishop_patterns(ctx: &EvalContext, color: Color) -> TaperedScore {
    let params = ctx.params;
    let board = ctx.board();
    let rel = |sq| relative_square(color, sq);
    let own = |piece, sq| ctx.is_on(color, piece, rel(sq));
    let opp = |piece, sq| ctx.is_on(!color, piece, rel(sq));
    let king = ctx.pieces(color, Piece::King);

    let mut score = TaperedScore::ZERO;
    if ctx.pieces(color, Piece::Bishop).is_empty() {
        return score;
    }

    let a2 = params.bishop_trapped_a2.value;
    let a3 = params.bishop_trapped_a3.value;
    let traps = [
        (Square::A6, Square::B5, a3),
        (Square::A7, Square::B6, a2),
        (Square::B8, Square::C7, a2),
        (Square::H6, Square::G5, a3),
        (Square::H7, Square::G6, a2),
        (Square::G8, Square::F7, a2),
    ];
    for (bishop, pawn, value) in traps {
        if own(Piece::Bishop, bishop) && opp(Piece::Pawn, pawn) {
            score += TaperedScore::splat(value);
        }
    }

    // Home bishop shut in by its own pawn, or guarding the castled king
    let home = [
        (Square::C1, Square::D2, Square::D3, [Square::B1, Square::A1, Square::A2]),
        (Square::F1, Square::E2, Square::E3, [Square::G1, Square::H1, Square::H2]),
    ];
    for (bishop, pawn, block, corner) in home {
        if !own(Piece::Bishop, bishop) {
            continue;
        }
        if own(Piece::Pawn, pawn) && board.occupied().has(rel(block)) {
            score += TaperedScore::new(params.bishop_blocked.value, 0);
        }
        if !(king & squares(color, &corner)).is_empty() {
            score += TaperedScore::new(params.bishop_return.value, 0);
        }
    }

    let fianchettos = [
        (Square::B2, Square::C3, Square::B3, [Square::A2, Square::C2], Square::D4, [Square::E5, Square::C5], queen_side_castle(color)),
        (Square::G2, Square::F3, Square::G3, [Square::H2, Square::F2], Square::E4, [Square::D5, Square::F5], king_side_castle(color)),
    ];
    for (bishop, blocker, front, sides, enemy_center, enemy_support, wing) in fianchettos {
        if !own(Piece::Bishop, bishop) {
            continue;
        }
        if own(Piece::Pawn, blocker) {
            score += TaperedScore::new(
                params.bishop_fianchetto_blocked_mg.value,
                params.bishop_fianchetto_blocked_eg.value,
            );
        }
        if own(Piece::Pawn, front) && sides.iter().any(|&sq| own(Piece::Pawn, sq)) {
            score += TaperedScore::splat(params.bishop_fianchetto.value);
        }
        if opp(Piece::Pawn, enemy_center) && enemy_support.iter().any(|&sq| opp(Piece::Pawn, sq)) {
            score += TaperedScore::splat(params.bishop_bad_fianchetto.value);
        }
        if !(king & wing).is_empty() {
            score += TaperedScore::new(params.bishop_king_fianchetto.value, 0);
        }
    }

    score
}

fn king_patterns(ctx: &EvalContext, color: Color) -> TaperedScore {
    let params = ctx.params;
    let board = ctx.board();
    let king = board.king(color);
    let own_pawn = |sq| ctx.is_on(color, Piece::Pawn, relative_square(color, sq));

    let mut score = TaperedScore::ZERO;
    if !relative_rank_mask(color, 0).has(king) {
        return score;
    }

    for (corner, pawns) in NO_LUFT {
        if king == relative_square(color, corner) && pawns.iter().all(|&sq| own_pawn(sq)) {
            score += TaperedScore::new(params.king_no_luft_mg.value, params.king_no_luft_eg.value);
        }
    }

    // Rook locked in by an uncastled king
    let rooks = ctx.pieces(color, Piece::Rook);
    let locked = [
        ([Square::F1, Square::G1], [Square::G1, Square::H1, Square::H2]),
        ([Square::B1, Square::C1], [Square::A1, Square::B1, Square::A2]),
    ];
    for (king_squares, rook_squares) in locked {
        if squares(color, &king_squares).has(king) && !(rooks & squares(color, &rook_squares)).is_empty() {
            score += TaperedScore::new(params.rook_blocked_mg.value, params.rook_blocked_eg.value);
        }
    }

    if king == relative_square(color, Square::E1) {
        let rights = board.castle_rights(color);
        if rights.short.is_some() {
            score += TaperedScore::new(params.king_castle_short.value, 0);
        } else if rights.long.is_some() {
            score += TaperedScore::new(params.king_castle_long.value, 0);
        }
    }

    score
}

/// Knight on c3 in front of the c-pawn in a d4 structure without e4.
fn central_patterns(ctx: &EvalContext, color: Color) -> TaperedScore {
    let own = |piece, sq| ctx.is_on(color, piece, relative_square(color, sq));

    if own(Piece::Pawn, Square::C2)
        && own(Piece::Pawn, Square::D4)
        && own(Piece::Knight, Square::C3)
        && !own(Piece::Pawn, Square::E4)
    {
        TaperedScore::new(ctx.params.knight_blocks_c_pawn.value, 0)
    } else {
        TaperedScore::ZERO
    }
}

/// Bishop pins of an enemy knight against the enemy king or queen on the two long
/// diagonals leading into the enemy camp.
pub(super) fn evaluate_pins(ctx: &mut EvalContext, color: Color) {
    let enemy = !color;

    for line in PIN_LINES {
        let [far, near, knight, bishop, bishop_far] = line.map(|sq| relative_square(color, sq));

        if !ctx.is_on(enemy, Piece::Knight, knight) {
            continue;
        }
        let pinning = ctx.is_on(color, Piece::Bishop, bishop)
            || (ctx.is_empty(bishop) && ctx.is_on(color, Piece::Bishop, bishop_far));
        if !pinning {
            continue;
        }

        let royal = |sq| ctx.is_on(enemy, Piece::King, sq) || ctx.is_on(enemy, Piece::Queen, sq);
        if royal(near) || (ctx.is_empty(near) && royal(far)) {
            ctx.add(color, PIN_BONUS);
        }
    }
}

#[inline(always)]
fn squares(color: Color, list: &[Square]) -> BitBoard {
    list.iter()
        .fold(BitBoard::EMPTY, |bb, &sq| bb | relative_square(color, sq).bitboard())
}
