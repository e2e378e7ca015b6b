use evaluation::TaperedScore;

// Mobility by number of reachable squares. The dynamic tables flatten out
// as mobility grows; the flat tables are linear around an average count.

const KNIGHT_MG: [i32; 9] = [-28, -16, -6, 0, 5, 9, 12, 14, 15];
const KNIGHT_EG: [i32; 9] = [-28, -16, -6, 0, 5, 9, 12, 14, 15];

const BISHOP_MG: [i32; 14] = [-30, -20, -11, -4, 2, 7, 11, 15, 18, 20, 22, 23, 24, 25];
const BISHOP_EG: [i32; 14] = [-30, -20, -11, -4, 2, 7, 11, 15, 18, 20, 22, 23, 24, 25];

const ROOK_MG: [i32; 15] = [-14, -10, -7, -4, -2, 0, 2, 4, 5, 6, 7, 8, 9, 10, 10];
const ROOK_EG: [i32; 15] = [-28, -20, -14, -8, -4, 0, 4, 8, 11, 14, 16, 18, 20, 21, 22];

const QUEEN_MG: [i32; 28] = [
    -14, -12, -10, -8, -6, -4, -3, -2, -1, 0, 1, 2, 3, 4, 5, 6, 6, 7, 7, 8, 8, 8, 9, 9, 9, 10, 10,
    10,
];
const QUEEN_EG: [i32; 28] = [
    -28, -24, -20, -16, -12, -9, -6, -4, -2, 0, 2, 4, 6, 8, 10, 11, 12, 13, 14, 15, 16, 16, 17, 17,
    18, 18, 19, 19,
];

const fn flat<const N: usize>(step: i32, average: i32) -> [i32; N] {
    let mut table = [0; N];
    let mut i = 0;
    while i < N {
        table[i] = step * (i as i32 - average);
        i += 1;
    }
    table
}

const KNIGHT_FLAT_MG: [i32; 9] = flat(4, 4);
const KNIGHT_FLAT_EG: [i32; 9] = flat(4, 4);
const BISHOP_FLAT_MG: [i32; 14] = flat(5, 6);
const BISHOP_FLAT_EG: [i32; 14] = flat(5, 6);
const ROOK_FLAT_MG: [i32; 15] = flat(2, 7);
const ROOK_FLAT_EG: [i32; 15] = flat(4, 7);
const QUEEN_FLAT_MG: [i32; 28] = flat(1, 14);
const QUEEN_FLAT_EG: [i32; 28] = flat(2, 14);

#[inline(always)]
fn lookup(mg: &[i32], eg: &[i32], count: usize) -> TaperedScore {
    let i = count.min(mg.len() - 1);
    TaperedScore::new(mg[i], eg[i])
}

/// Diminishing mobility score of a knight reaching `count` squares.
#[inline(always)]
pub fn knight(count: usize) -> TaperedScore {
    lookup(&KNIGHT_MG, &KNIGHT_EG, count)
}

#[inline(always)]
pub fn bishop(count: usize) -> TaperedScore {
    lookup(&BISHOP_MG, &BISHOP_EG, count)
}

#[inline(always)]
pub fn rook(count: usize) -> TaperedScore {
    lookup(&ROOK_MG, &ROOK_EG, count)
}

#[inline(always)]
pub fn queen(count: usize) -> TaperedScore {
    lookup(&QUEEN_MG, &QUEEN_EG, count)
}

/// Linear mobility score of a knight reaching `count` squares.
#[inline(always)]
pub fn knight_flat(count: usize) -> TaperedScore {
    lookup(&KNIGHT_FLAT_MG, &KNIGHT_FLAT_EG, count)
}

#[inline(always)]
pub fn bishop_flat(count: usize) -> TaperedScore {
    lookup(&BISHOP_FLAT_MG, &BISHOP_FLAT_EG, count)
}

#[inline(always)]
pub fn rook_flat(count: usize) -> TaperedScore {
    lookup(&ROOK_FLAT_MG, &ROOK_FLAT_EG, count)
}

#[inline(always)]
pub fn queen_flat(count: usize) -> TaperedScore {
    lookup(&QUEEN_FLAT_MG, &QUEEN_FLAT_EG, count)
}
