use cozy_chess::Piece;

/// Piece-Square Table set of one style: position-dependent bonuses for each piece,
/// middlegame (mg) and endgame (eg), interpolated by game phase.
///
/// Values are in centipawns. Tables are defined for White (a1=index 0, h8=index 63);
/// Black reads them through the rank-mirrored square.
///
/// <https://www.chessprogramming.org/Piece-Square_Tables>
#[allow(clippy::upper_case_acronyms)]
pub struct PST {
    pub mg: [[i32; 64]; Piece::NUM],
    pub eg: [[i32; 64]; Piece::NUM],
}

pub const STYLE_COUNT: usize = 2;

static STYLES: [PST; STYLE_COUNT] = [
    // 0: hand-written tables
    PST {
        mg: [
            PAWN_MG,
            KNIGHT_MG,
            BISHOP_MG,
            ROOK_MG,
            QUEEN_MG,
            KING_MG,
        ],
        eg: [
            PAWN_EG,
            KNIGHT_EG,
            BISHOP_EG,
            ROOK_EG,
            QUEEN_EG,
            KING_EG,
        ],
    },
    // 1: Fruit-like tables built from per-file and per-rank weights
    PST {
        mg: [
            fruit_pawn_mg(),
            fruit_knight(true),
            fruit_bishop(true),
            fruit_rook_mg(),
            fruit_queen(true),
            fruit_king(true),
        ],
        eg: [
            [0; 64],
            fruit_knight(false),
            fruit_bishop(false),
            [0; 64],
            fruit_queen(false),
            fruit_king(false),
        ],
    },
];

/// Returns the table set of a style, falling back to style 0 for unknown indices.
pub fn style(index: i32) -> &'static PST {
    usize::try_from(index)
        .ok()
        .and_then(|i| STYLES.get(i))
        .unwrap_or(&STYLES[0])
}

const PAWN_MG: [i32; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0, // rank 1 (a1-h1)
    0, 0, 0, -6, -6, 0, 0, 0, // rank 2
    0, 2, 4, 6, 6, 4, 2, 0, // rank 3
    0, 2, 6, 14, 14, 6, 2, 0, // rank 4
    2, 4, 8, 12, 12, 8, 4, 2, // rank 5
    4, 6, 10, 12, 12, 10, 6, 4, // rank 6
    6, 8, 10, 10, 10, 10, 8, 6, // rank 7
    0, 0, 0, 0, 0, 0, 0, 0, // rank 8
];

const PAWN_EG: [i32; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0, // rank 1
    0, 0, 0, 0, 0, 0, 0, 0, // rank 2
    2, 2, 2, 2, 2, 2, 2, 2, // rank 3
    4, 4, 4, 4, 4, 4, 4, 4, // rank 4
    8, 8, 8, 8, 8, 8, 8, 8, // rank 5
    14, 14, 14, 14, 14, 14, 14, 14, // rank 6
    20, 20, 20, 20, 20, 20, 20, 20, // rank 7
    0, 0, 0, 0, 0, 0, 0, 0, // rank 8
];

// Knights: rim squares cover at most four squares.
const KNIGHT_MG: [i32; 64] = [
    -40, -24, -16, -12, -12, -16, -24, -40, // rank 1
    -24, -12, -2, 2, 2, -2, -12, -24, // rank 2
    -16, -2, 8, 12, 12, 8, -2, -16, // rank 3
    -12, 2, 12, 18, 18, 12, 2, -12, // rank 4
    -12, 4, 14, 20, 20, 14, 4, -12, // rank 5
    -16, 2, 12, 16, 16, 12, 2, -16, // rank 6
    -24, -12, 0, 4, 4, 0, -12, -24, // rank 7
    -40, -24, -16, -12, -12, -16, -24, -40, // rank 8
];

const KNIGHT_EG: [i32; 64] = [
    -30, -20, -14, -10, -10, -14, -20, -30, // rank 1
    -20, -10, -4, 0, 0, -4, -10, -20, // rank 2
    -14, -4, 4, 8, 8, 4, -4, -14, // rank 3
    -10, 0, 8, 12, 12, 8, 0, -10, // rank 4
    -10, 0, 8, 12, 12, 8, 0, -10, // rank 5
    -14, -4, 4, 8, 8, 4, -4, -14, // rank 6
    -20, -10, -4, 0, 0, -4, -10, -20, // rank 7
    -30, -20, -14, -10, -10, -14, -20, -30, // rank 8
];

// Bishops: long diagonals and the fianchetto squares.
const BISHOP_MG: [i32; 64] = [
    -8, -6, -8, -6, -6, -8, -6, -8, // rank 1
    -4, 8, 0, 4, 4, 0, 8, -4, // rank 2
    -2, 2, 6, 4, 4, 6, 2, -2, // rank 3
    -2, 4, 6, 10, 10, 6, 4, -2, // rank 4
    -2, 4, 6, 10, 10, 6, 4, -2, // rank 5
    -2, 2, 6, 4, 4, 6, 2, -2, // rank 6
    -4, 0, 0, 0, 0, 0, 0, -4, // rank 7
    -8, -4, -4, -4, -4, -4, -4, -8, // rank 8
];

const BISHOP_EG: [i32; 64] = [
    -12, -8, -6, -4, -4, -6, -8, -12, // rank 1
    -8, -2, 0, 2, 2, 0, -2, -8, // rank 2
    -6, 0, 4, 6, 6, 4, 0, -6, // rank 3
    -4, 2, 6, 8, 8, 6, 2, -4, // rank 4
    -4, 2, 6, 8, 8, 6, 2, -4, // rank 5
    -6, 0, 4, 6, 6, 4, 0, -6, // rank 6
    -8, -2, 0, 2, 2, 0, -2, -8, // rank 7
    -12, -8, -6, -4, -4, -6, -8, -12, // rank 8
];

const ROOK_MG: [i32; 64] = [
    -2, -2, 2, 6, 6, 2, -2, -2, // rank 1
    -4, -2, 0, 2, 2, 0, -2, -4, // rank 2
    -4, -2, 0, 2, 2, 0, -2, -4, // rank 3
    -4, -2, 0, 2, 2, 0, -2, -4, // rank 4
    -4, -2, 0, 2, 2, 0, -2, -4, // rank 5
    -4, -2, 0, 2, 2, 0, -2, -4, // rank 6
    8, 10, 10, 10, 10, 10, 10, 8, // rank 7
    0, 0, 2, 4, 4, 2, 0, 0, // rank 8
];

const ROOK_EG: [i32; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0, // rank 1
    0, 0, 0, 0, 0, 0, 0, 0, // rank 2
    0, 0, 0, 0, 0, 0, 0, 0, // rank 3
    0, 0, 0, 0, 0, 0, 0, 0, // rank 4
    2, 2, 2, 2, 2, 2, 2, 2, // rank 5
    2, 2, 2, 2, 2, 2, 2, 2, // rank 6
    6, 6, 6, 6, 6, 6, 6, 6, // rank 7
    2, 2, 2, 2, 2, 2, 2, 2, // rank 8
];

const QUEEN_MG: [i32; 64] = [
    -8, -6, -4, 0, 0, -4, -6, -8, // rank 1
    -6, 0, 2, 2, 2, 2, 0, -6, // rank 2
    -4, 2, 4, 4, 4, 4, 2, -4, // rank 3
    -2, 2, 4, 6, 6, 4, 2, -2, // rank 4
    -2, 2, 4, 6, 6, 4, 2, -2, // rank 5
    -4, 2, 4, 4, 4, 4, 2, -4, // rank 6
    -6, 0, 2, 2, 2, 2, 0, -6, // rank 7
    -8, -6, -4, -2, -2, -4, -6, -8, // rank 8
];

const QUEEN_EG: [i32; 64] = [
    -20, -12, -8, -4, -4, -8, -12, -20, // rank 1
    -12, -4, 0, 4, 4, 0, -4, -12, // rank 2
    -8, 0, 8, 12, 12, 8, 0, -8, // rank 3
    -4, 4, 12, 16, 16, 12, 4, -4, // rank 4
    -4, 4, 12, 16, 16, 12, 4, -4, // rank 5
    -8, 0, 8, 12, 12, 8, 0, -8, // rank 6
    -12, -4, 0, 4, 4, 0, -4, -12, // rank 7
    -20, -12, -8, -4, -4, -8, -12, -20, // rank 8
];

// King MG: castled corners, every step forward costs cover.
const KING_MG: [i32; 64] = [
    16, 24, 8, -8, -4, -8, 26, 18, // rank 1
    10, 12, -6, -14, -14, -6, 12, 10, // rank 2
    -10, -16, -22, -28, -28, -22, -16, -10, // rank 3
    -20, -26, -32, -38, -38, -32, -26, -20, // rank 4
    -30, -36, -42, -48, -48, -42, -36, -30, // rank 5
    -40, -46, -52, -58, -58, -52, -46, -40, // rank 6
    -50, -56, -62, -68, -68, -62, -56, -50, // rank 7
    -60, -66, -72, -78, -78, -72, -66, -60, // rank 8
];

// King EG: centralize.
const KING_EG: [i32; 64] = [
    -40, -26, -18, -12, -12, -18, -26, -40, // rank 1
    -26, -12, -4, 2, 2, -4, -12, -26, // rank 2
    -18, -4, 6, 12, 12, 6, -4, -18, // rank 3
    -12, 2, 12, 20, 20, 12, 2, -12, // rank 4
    -12, 2, 12, 20, 20, 12, 2, -12, // rank 5
    -18, -4, 6, 12, 12, 6, -4, -18, // rank 6
    -26, -12, -4, 2, 2, -4, -12, -26, // rank 7
    -40, -26, -18, -12, -12, -18, -26, -40, // rank 8
];

const PAWN_FILE: [i32; 8] = [-3, -1, 0, 1, 1, 0, -1, -3];
const KNIGHT_LINE: [i32; 8] = [-4, -2, 0, 1, 1, 0, -2, -4];
const KNIGHT_RANK: [i32; 8] = [-2, -1, 0, 1, 2, 3, 2, 1];
const CENTRE_LINE: [i32; 8] = [-3, -1, 0, 1, 1, 0, -1, -3];
const ROOK_FILE: [i32; 8] = [-2, -1, 0, 1, 1, 0, -1, -2];
const KING_FILE: [i32; 8] = [3, 4, 2, 0, 0, 2, 4, 3];
const KING_RANK: [i32; 8] = [1, 0, -2, -3, -4, -5, -6, -7];

const fn fruit_pawn_mg() -> [i32; 64] {
    let mut table = [0; 64];
    let mut sq = 8;
    while sq < 56 {
        table[sq] = PAWN_FILE[sq % 8] * 5;
        sq += 1;
    }
    // d3/e3, d4/e4, d5/e5
    table[19] += 10;
    table[20] += 10;
    table[27] += 20;
    table[28] += 20;
    table[35] += 10;
    table[36] += 10;
    table
}

const fn fruit_knight(mg: bool) -> [i32; 64] {
    let mut table = [0; 64];
    let mut sq = 0;
    while sq < 64 {
        let (file, rank) = (sq % 8, sq / 8);
        table[sq] = (KNIGHT_LINE[file] + KNIGHT_LINE[rank]) * 5;
        if mg {
            table[sq] += KNIGHT_RANK[rank] * 5;
        }
        sq += 1;
    }
    if mg {
        // a8/h8 are traps
        table[56] -= 100;
        table[63] -= 100;
    }
    table
}

const fn fruit_bishop(mg: bool) -> [i32; 64] {
    let mut table = [0; 64];
    let mut sq = 0;
    while sq < 64 {
        let (file, rank) = (sq % 8, sq / 8);
        let centre = CENTRE_LINE[file] + CENTRE_LINE[rank];
        if mg {
            table[sq] = centre * 2;
            if rank == 0 {
                table[sq] -= 10;
            }
            if file == rank || file + rank == 7 {
                table[sq] += 4;
            }
        } else {
            table[sq] = centre * 3;
        }
        sq += 1;
    }
    table
}

const fn fruit_rook_mg() -> [i32; 64] {
    let mut table = [0; 64];
    let mut sq = 0;
    while sq < 64 {
        table[sq] = ROOK_FILE[sq % 8] * 3;
        sq += 1;
    }
    table
}

const fn fruit_queen(mg: bool) -> [i32; 64] {
    let mut table = [0; 64];
    let mut sq = 0;
    while sq < 64 {
        let (file, rank) = (sq % 8, sq / 8);
        table[sq] = if mg {
            if rank == 0 {
                -5
            } else {
                0
            }
        } else {
            (CENTRE_LINE[file] + CENTRE_LINE[rank]) * 4
        };
        sq += 1;
    }
    table
}

const fn fruit_king(mg: bool) -> [i32; 64] {
    let mut table = [0; 64];
    let mut sq = 0;
    while sq < 64 {
        let (file, rank) = (sq % 8, sq / 8);
        table[sq] = if mg {
            (KING_FILE[file] + KING_RANK[rank]) * 10
        } else {
            (CENTRE_LINE[file] + CENTRE_LINE[rank]) * 12
        };
        sq += 1;
    }
    table
}

// Outposts: squares in enemy territory where a minor cannot be chased by pawns.
pub const KNIGHT_OUTPOST: [i32; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0, // rank 1
    0, 0, 0, 0, 0, 0, 0, 0, // rank 2
    0, 0, 0, 0, 0, 0, 0, 0, // rank 3
    0, 2, 4, 8, 8, 4, 2, 0, // rank 4
    0, 4, 10, 16, 16, 10, 4, 0, // rank 5
    0, 4, 10, 12, 12, 10, 4, 0, // rank 6
    0, 0, 0, 0, 0, 0, 0, 0, // rank 7
    0, 0, 0, 0, 0, 0, 0, 0, // rank 8
];

pub const BISHOP_OUTPOST: [i32; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0, // rank 1
    0, 0, 0, 0, 0, 0, 0, 0, // rank 2
    0, 0, 0, 0, 0, 0, 0, 0, // rank 3
    0, 1, 2, 4, 4, 2, 1, 0, // rank 4
    0, 2, 5, 8, 8, 5, 2, 0, // rank 5
    0, 2, 5, 6, 6, 5, 2, 0, // rank 6
    0, 0, 0, 0, 0, 0, 0, 0, // rank 7
    0, 0, 0, 0, 0, 0, 0, 0, // rank 8
];

/// Bonus for a pawn defended by another pawn.
pub const DEFENDED_PAWN_MG: [i32; 64] = pawn_mass([0, 0, 2, 4, 6, 10, 14, 0], [0, 1, 2, 3, 3, 2, 1, 0]);
pub const DEFENDED_PAWN_EG: [i32; 64] = pawn_mass([0, 0, 2, 4, 8, 12, 18, 0], [0, 0, 0, 0, 0, 0, 0, 0]);
/// Bonus for a pawn standing next to another pawn.
pub const PHALANX_PAWN_MG: [i32; 64] = pawn_mass([0, 2, 4, 6, 10, 14, 20, 0], [0, 1, 2, 4, 4, 2, 1, 0]);
pub const PHALANX_PAWN_EG: [i32; 64] = pawn_mass([0, 1, 2, 4, 8, 12, 18, 0], [0, 0, 0, 0, 0, 0, 0, 0]);

const fn pawn_mass(by_rank: [i32; 8], by_file: [i32; 8]) -> [i32; 64] {
    let mut table = [0; 64];
    let mut sq = 8;
    while sq < 56 {
        table[sq] = by_rank[sq / 8] + by_file[sq % 8];
        sq += 1;
    }
    table
}

/// King bonus when the king side (files f-h) holds no pawns. Indexed by the
/// absolute king square for both colors.
pub const EMPTY_KING_SIDE: [i32; 64] = by_file([8, 8, 6, 2, -4, -10, -16, -20]);
/// King bonus when the queen side (files a-c) holds no pawns.
pub const EMPTY_QUEEN_SIDE: [i32; 64] = by_file([-20, -16, -10, -4, 2, 6, 8, 8]);

const fn by_file(values: [i32; 8]) -> [i32; 64] {
    let mut table = [0; 64];
    let mut sq = 0;
    while sq < 64 {
        table[sq] = values[sq % 8];
        sq += 1;
    }
    table
}
