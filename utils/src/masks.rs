use cozy_chess::{BitBoard, Color, Square};

pub const FILE_A: u64 = 0x0101_0101_0101_0101;
pub const FILE_H: u64 = FILE_A << 7;
pub const RANK_1: u64 = 0xFF;

pub const LIGHT_SQUARES: BitBoard = BitBoard(0x55AA_55AA_55AA_55AA);
pub const DARK_SQUARES: BitBoard = BitBoard(!0x55AA_55AA_55AA_55AA);

/// c3-f6 block.
pub const CENTER: BitBoard = BitBoard(0x0000_3C3C_3C3C_0000);
/// Files c to f.
pub const CENTRAL_FILES: BitBoard = BitBoard(0x3C3C_3C3C_3C3C_3C3C);
/// Files f to h.
pub const KING_SIDE: BitBoard = BitBoard(0xE0E0_E0E0_E0E0_E0E0);
/// Files a to c.
pub const QUEEN_SIDE: BitBoard = BitBoard(0x0707_0707_0707_0707);

#[inline(always)]
const fn side(color: Color) -> usize {
    match color {
        Color::White => 0,
        Color::Black => 1,
    }
}

/// Mirrors a White mask vertically for Black.
const fn mirror_pair(white: u64) -> [u64; 2] {
    [white, white.swap_bytes()]
}

// Relative ranks 4-6, files b-g.
const OUTPOST_MAP: [u64; 2] = mirror_pair(0x0000_7E7E_7E00_0000);
// Relative ranks 1-4 and 5-8.
const HOME: [u64; 2] = mirror_pair(0x0000_0000_FFFF_FFFF);
const AWAY: [u64; 2] = mirror_pair(0xFFFF_FFFF_0000_0000);
// f1, g1, h1, f2, g2, h2.
const KS_CASTLE: [u64; 2] = mirror_pair(0xE0E0);
// a1, b1, c1, a2, b2, c2.
const QS_CASTLE: [u64; 2] = mirror_pair(0x0707);
// Files c-f, relative ranks 2-5.
const SPACE: [u64; 2] = mirror_pair(0x0000_003C_3C3C_3C00);

#[inline(always)]
pub fn outpost_map(color: Color) -> BitBoard {
    BitBoard(OUTPOST_MAP[side(color)])
}

#[inline(always)]
pub fn home_half(color: Color) -> BitBoard {
    BitBoard(HOME[side(color)])
}

#[inline(always)]
pub fn enemy_half(color: Color) -> BitBoard {
    BitBoard(AWAY[side(color)])
}

#[inline(always)]
pub fn king_side_castle(color: Color) -> BitBoard {
    BitBoard(KS_CASTLE[side(color)])
}

#[inline(always)]
pub fn queen_side_castle(color: Color) -> BitBoard {
    BitBoard(QS_CASTLE[side(color)])
}

#[inline(always)]
pub fn space_area(color: Color) -> BitBoard {
    BitBoard(SPACE[side(color)])
}

/// Rank as seen from `color`'s side of the board (0 = own back rank).
#[inline(always)]
pub fn relative_rank_mask(color: Color, rank: usize) -> BitBoard {
    match color {
        Color::White => BitBoard(RANK_1 << (8 * rank)),
        Color::Black => BitBoard(RANK_1 << (8 * (7 - rank))),
    }
}

/// Relative rank index of a square (0..7).
#[inline(always)]
pub fn relative_rank(color: Color, sq: Square) -> usize {
    match color {
        Color::White => sq.rank() as usize,
        Color::Black => 7 - sq.rank() as usize,
    }
}

/// Square as seen from `color`'s side of the board: for Black the rank is mirrored.
#[inline(always)]
pub fn relative_square(color: Color, sq: Square) -> Square {
    match color {
        Color::White => sq,
        Color::Black => sq.flip_rank(),
    }
}

#[inline(always)]
pub fn fill_north(bb: BitBoard) -> BitBoard {
    let mut b = bb.0;
    b |= b << 8;
    b |= b << 16;
    b |= b << 32;
    BitBoard(b)
}

#[inline(always)]
pub fn fill_south(bb: BitBoard) -> BitBoard {
    let mut b = bb.0;
    b |= b >> 8;
    b |= b >> 16;
    b |= b >> 32;
    BitBoard(b)
}

#[inline(always)]
pub fn fill_forward(bb: BitBoard, color: Color) -> BitBoard {
    match color {
        Color::White => fill_north(bb),
        Color::Black => fill_south(bb),
    }
}

#[inline(always)]
pub fn shift_forward(bb: BitBoard, color: Color) -> BitBoard {
    match color {
        Color::White => BitBoard(bb.0 << 8),
        Color::Black => BitBoard(bb.0 >> 8),
    }
}

#[inline(always)]
pub fn shift_north(bb: BitBoard) -> BitBoard {
    BitBoard(bb.0 << 8)
}

#[inline(always)]
pub fn shift_east(bb: BitBoard) -> BitBoard {
    BitBoard((bb.0 & !FILE_H) << 1)
}

#[inline(always)]
pub fn shift_west(bb: BitBoard) -> BitBoard {
    BitBoard((bb.0 & !FILE_A) >> 1)
}

#[inline(always)]
pub fn shift_sideways(bb: BitBoard) -> BitBoard {
    shift_east(bb) | shift_west(bb)
}

/// Squares attacked by the given pawns.
#[inline(always)]
pub fn pawn_control(pawns: BitBoard, color: Color) -> BitBoard {
    let (west, east) = pawn_control_sides(pawns, color);
    BitBoard(west | east)
}

/// Squares attacked by two of the given pawns at once.
#[inline(always)]
pub fn double_pawn_control(pawns: BitBoard, color: Color) -> BitBoard {
    let (west, east) = pawn_control_sides(pawns, color);
    BitBoard(west & east)
}

#[inline(always)]
fn pawn_control_sides(pawns: BitBoard, color: Color) -> (u64, u64) {
    let p = pawns.0;
    match color {
        Color::White => ((p & !FILE_A) << 7, (p & !FILE_H) << 9),
        Color::Black => ((p & !FILE_A) >> 9, (p & !FILE_H) >> 7),
    }
}

/// King square pulled one step away from the edges, so that the king zone
/// never shrinks at the border.
#[inline(always)]
pub fn king_root(sq: Square) -> Square {
    let file = (sq.file() as usize).clamp(1, 6);
    let rank = (sq.rank() as usize).clamp(1, 6);
    Square::index(rank * 8 + file)
}

#[inline(always)]
pub fn adjacent_files(sq: Square) -> BitBoard {
    BitBoard(ADJACENT_FILES[sq.file() as usize])
}

/// Own file ahead of the pawn.
#[inline(always)]
pub fn front_span(color: Color, sq: Square) -> BitBoard {
    BitBoard(FRONT_SPANS[side(color)][sq as usize])
}

/// Own and adjacent files ahead of the pawn. A pawn with no enemy pawns
/// in this mask is passed.
#[inline(always)]
pub fn passed_mask(color: Color, sq: Square) -> BitBoard {
    BitBoard(PASSED_MASKS[side(color)][sq as usize])
}

/// Adjacent files on the pawn's rank and behind it: where a supporting pawn can stand.
#[inline(always)]
pub fn support_mask(color: Color, sq: Square) -> BitBoard {
    BitBoard(SUPPORT_MASKS[side(color)][sq as usize])
}

const ADJACENT_FILES: [u64; 8] = {
    let mut table = [0u64; 8];
    let mut file = 0;
    while file < 8 {
        if file > 0 {
            table[file] |= FILE_A << (file - 1);
        }
        if file < 7 {
            table[file] |= FILE_A << (file + 1);
        }
        file += 1;
    }
    table
};

const fn ranks_ahead(color: usize, rank: usize) -> u64 {
    let mut mask = 0u64;
    let mut r = 0;
    while r < 8 {
        let ahead = if color == 0 { r > rank } else { r < rank };
        if ahead {
            mask |= RANK_1 << (8 * r);
        }
        r += 1;
    }
    mask
}

const fn ranks_not_ahead(color: usize, rank: usize) -> u64 {
    !ranks_ahead(color, rank)
}

const FRONT_SPANS: [[u64; 64]; 2] = {
    let mut table = [[0u64; 64]; 2];
    let mut color = 0;
    while color < 2 {
        let mut sq = 0;
        while sq < 64 {
            table[color][sq] = (FILE_A << (sq % 8)) & ranks_ahead(color, sq / 8);
            sq += 1;
        }
        color += 1;
    }
    table
};

const PASSED_MASKS: [[u64; 64]; 2] = {
    let mut table = [[0u64; 64]; 2];
    let mut color = 0;
    while color < 2 {
        let mut sq = 0;
        while sq < 64 {
            let files = (FILE_A << (sq % 8)) | ADJACENT_FILES[sq % 8];
            table[color][sq] = files & ranks_ahead(color, sq / 8);
            sq += 1;
        }
        color += 1;
    }
    table
};

const SUPPORT_MASKS: [[u64; 64]; 2] = {
    let mut table = [[0u64; 64]; 2];
    let mut color = 0;
    while color < 2 {
        let mut sq = 0;
        while sq < 64 {
            table[color][sq] = ADJACENT_FILES[sq % 8] & ranks_not_ahead(color, sq / 8);
            sq += 1;
        }
        color += 1;
    }
    table
};
