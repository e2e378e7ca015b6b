use crate::config::EvalParams;
use crate::pst::{self, PST};
use cozy_chess::{Color, Piece, Square};
use evaluation::TaperedScore;

/// Knights gain and rooks lose value with each own pawn present.
const PAWN_COUNT_ADJ: [i32; 9] = [-4, -3, -2, -1, 0, 1, 2, 3, 4];

/// Backward pawns on central files are a bigger liability.
const BACKWARD_FILE_OFFSET: [i32; 8] = [3, 1, -1, -3, -3, -1, 1, 3];

pub const DANGER_SIZE: usize = 512;

/// Lookup tables derived from a parameter snapshot. Rebuilt whenever the
/// parameters change, never during evaluation.
pub struct EvalTables {
    /// Piece values after the `Material` weight.
    pub material: [TaperedScore; Piece::NUM],
    pub knight_pawn_adj: [i32; 9],
    pub rook_pawn_adj: [i32; 9],
    pub backward_mg: [i32; 8],
    /// Indexed by relative rank.
    pub passed_mg: [i32; 8],
    pub passed_eg: [i32; 8],
    pub candidate_mg: [i32; 8],
    pub candidate_eg: [i32; 8],
    pub danger: [i32; DANGER_SIZE],
    pub shield: [i32; 8],
    pub storm: [i32; 8],
    primary: [[[TaperedScore; 64]; Piece::NUM]; 2],
    secondary: [[[TaperedScore; 64]; Piece::NUM]; 2],
    knight_outpost: [[i32; 64]; 2],
    bishop_outpost: [[i32; 64]; 2],
    defended_pawn: [[TaperedScore; 64]; 2],
    phalanx_pawn: [[TaperedScore; 64]; 2],
}

impl EvalTables {
    pub fn new(params: &EvalParams) -> Self {
        let values = params.piece_values().scaled(params.material_weight.value);
        let mut material = [TaperedScore::ZERO; Piece::NUM];
        for piece in Piece::ALL {
            material[piece as usize] = values.get(piece);
        }

        let mut knight_pawn_adj = [0; 9];
        let mut rook_pawn_adj = [0; 9];
        for (i, adj) in PAWN_COUNT_ADJ.iter().enumerate() {
            knight_pawn_adj[i] = adj * params.knight_pawn_adj.value;
            rook_pawn_adj[i] = adj * params.rook_pawn_adj.value;
        }

        let mut backward_mg = [0; 8];
        for (file, offset) in BACKWARD_FILE_OFFSET.iter().enumerate() {
            backward_mg[file] = params.backward_mg.value + offset;
        }

        let passed_mg = [
            0,
            params.passed_mg2.value,
            params.passed_mg3.value,
            params.passed_mg4.value,
            params.passed_mg5.value,
            params.passed_mg6.value,
            params.passed_mg7.value,
            0,
        ];
        let passed_eg = [
            0,
            params.passed_eg2.value,
            params.passed_eg3.value,
            params.passed_eg4.value,
            params.passed_eg5.value,
            params.passed_eg6.value,
            params.passed_eg7.value,
            0,
        ];
        let candidate_mg = [
            0,
            params.candidate_mg2.value,
            params.candidate_mg3.value,
            params.candidate_mg4.value,
            params.candidate_mg5.value,
            params.candidate_mg6.value,
            0,
            0,
        ];
        let candidate_eg = [
            0,
            params.candidate_eg2.value,
            params.candidate_eg3.value,
            params.candidate_eg4.value,
            params.candidate_eg5.value,
            params.candidate_eg6.value,
            0,
            0,
        ];

        // First own pawn on relative ranks 2..7; index 0 means no pawn on the file.
        let shield = [
            params.shield_none.value,
            params.shield_rank2.value,
            params.shield_rank3.value,
            params.shield_rank4.value,
            params.shield_rank5.value,
            params.shield_rank6.value,
            params.shield_rank7.value,
            0,
        ];
        // Nearest enemy pawn on relative ranks 3..5; index 0 means an open file.
        let storm = [
            params.storm_open.value,
            0,
            params.storm_rank3.value,
            params.storm_rank4.value,
            params.storm_rank5.value,
            0,
            0,
            0,
        ];

        Self {
            material,
            knight_pawn_adj,
            rook_pawn_adj,
            backward_mg,
            passed_mg,
            passed_eg,
            candidate_mg,
            candidate_eg,
            danger: danger_table(),
            shield,
            storm,
            primary: by_color(pst::style(params.primary_pst_style.value)),
            secondary: by_color(pst::style(params.secondary_pst_style.value)),
            knight_outpost: mirror(&pst::KNIGHT_OUTPOST),
            bishop_outpost: mirror(&pst::BISHOP_OUTPOST),
            defended_pawn: mirror_tapered(&pst::DEFENDED_PAWN_MG, &pst::DEFENDED_PAWN_EG),
            phalanx_pawn: mirror_tapered(&pst::PHALANX_PAWN_MG, &pst::PHALANX_PAWN_EG),
        }
    }

    #[inline(always)]
    pub fn primary_pst(&self, color: Color, piece: Piece, sq: Square) -> TaperedScore {
        self.primary[color as usize][piece as usize][sq as usize]
    }

    #[inline(always)]
    pub fn secondary_pst(&self, color: Color, piece: Piece, sq: Square) -> TaperedScore {
        self.secondary[color as usize][piece as usize][sq as usize]
    }

    /// Base outpost value of a minor piece; zero for other pieces.
    #[inline(always)]
    pub fn outpost(&self, color: Color, piece: Piece, sq: Square) -> i32 {
        match piece {
            Piece::Knight => self.knight_outpost[color as usize][sq as usize],
            Piece::Bishop => self.bishop_outpost[color as usize][sq as usize],
            _ => 0,
        }
    }

    #[inline(always)]
    pub fn defended_pawn(&self, color: Color, sq: Square) -> TaperedScore {
        self.defended_pawn[color as usize][sq as usize]
    }

    #[inline(always)]
    pub fn phalanx_pawn(&self, color: Color, sq: Square) -> TaperedScore {
        self.phalanx_pawn[color as usize][sq as usize]
    }
}

/// King-safety curve: quadratic at first, then capped in growth and in value.
/// Units are rescaled to centipawns.
fn danger_table() -> [i32; DANGER_SIZE] {
    let mut table = [0; DANGER_SIZE];
    let mut t = 0i32;
    for (i, slot) in table.iter_mut().enumerate().take(511).skip(1) {
        let i = i as f64;
        t = 1280.0f64.min((27.0 * 0.001 * i * i).min(t as f64 + 8.0)) as i32;
        *slot = (t * 100) / 256;
    }
    table
}

#[inline(always)]
fn flipped(sq: usize) -> usize {
    sq ^ 56
}

fn mirror(white: &[i32; 64]) -> [[i32; 64]; 2] {
    let mut black = [0; 64];
    for (sq, value) in black.iter_mut().enumerate() {
        *value = white[flipped(sq)];
    }
    [*white, black]
}

fn mirror_tapered(mg: &[i32; 64], eg: &[i32; 64]) -> [[TaperedScore; 64]; 2] {
    let mut tables = [[TaperedScore::ZERO; 64]; 2];
    for sq in 0..64 {
        tables[0][sq] = TaperedScore::new(mg[sq], eg[sq]);
        tables[1][sq] = TaperedScore::new(mg[flipped(sq)], eg[flipped(sq)]);
    }
    tables
}

fn by_color(style: &PST) -> [[[TaperedScore; 64]; Piece::NUM]; 2] {
    let mut tables = [[[TaperedScore::ZERO; 64]; Piece::NUM]; 2];
    for piece in 0..Piece::NUM {
        let [white, black] = mirror_tapered(&style.mg[piece], &style.eg[piece]);
        tables[0][piece] = white;
        tables[1][piece] = black;
    }
    tables
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_weight() {
        let params = EvalParams::default().set("Material", "50").unwrap();
        let tables = EvalTables::new(&params);
        assert_eq!(tables.material[Piece::Pawn as usize], TaperedScore::new(45, 55));
        assert_eq!(tables.material[Piece::King as usize], TaperedScore::ZERO);
    }

    #[test]
    fn test_derived_tables() {
        let tables = EvalTables::new(&EvalParams::default());
        assert_eq!(tables.knight_pawn_adj, [-24, -18, -12, -6, 0, 6, 12, 18, 24]);
        assert_eq!(tables.rook_pawn_adj, [0; 9]);
        assert_eq!(tables.backward_mg, [1, -1, -3, -5, -5, -3, -1, 1]);
        assert_eq!(tables.passed_mg, [0, 2, 2, 11, 33, 71, 135, 0]);
        assert_eq!(tables.candidate_eg, [0, 4, 7, 16, 31, 53, 0, 0]);
        assert_eq!(tables.shield[0], -40);
        assert_eq!(tables.storm[2], -16);
    }

    #[test]
    fn test_danger_table() {
        let tables = EvalTables::new(&EvalParams::default());
        assert_eq!(tables.danger[0], 0);
        // 0.027 * 50 * 50 = 67.5
        assert_eq!(tables.danger[50], (67 * 100) / 256);
        assert_eq!(tables.danger[510], 500);
        assert_eq!(tables.danger[511], 0);
        assert!(tables.danger.windows(2).take(510).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_pst_mirrored_for_black() {
        let tables = EvalTables::new(&EvalParams::default());
        assert_eq!(
            tables.primary_pst(Color::White, Piece::Knight, Square::F3),
            tables.primary_pst(Color::Black, Piece::Knight, Square::F6)
        );
        assert_eq!(
            tables.outpost(Color::Black, Piece::Knight, Square::D4),
            tables.outpost(Color::White, Piece::Knight, Square::D5)
        );
        assert_eq!(tables.outpost(Color::White, Piece::Rook, Square::D5), 0);
    }
}
