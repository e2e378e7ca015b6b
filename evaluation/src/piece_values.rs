use crate::scores::{percent, TaperedScore};
use cozy_chess::{Board, Color, Piece};

/// Piece values for middlegame (mg) and endgame (eg), interpolated by game phase.
///
/// <https://www.chessprogramming.org/Tapered_Eval>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceValues {
    pub pawn_value_mg: i32,
    pub pawn_value_eg: i32,
    pub knight_value_mg: i32,
    pub knight_value_eg: i32,
    pub bishop_value_mg: i32,
    pub bishop_value_eg: i32,
    pub rook_value_mg: i32,
    pub rook_value_eg: i32,
    pub queen_value_mg: i32,
    pub queen_value_eg: i32,
}

impl Default for PieceValues {
    fn default() -> Self {
        Self {
            pawn_value_mg: 90,
            pawn_value_eg: 110,
            knight_value_mg: 380,
            knight_value_eg: 360,
            bishop_value_mg: 390,
            bishop_value_eg: 370,
            rook_value_mg: 530,
            rook_value_eg: 650,
            queen_value_mg: 1160,
            queen_value_eg: 1190,
        }
    }
}

impl PieceValues {
    #[inline(always)]
    pub fn get(&self, piece: Piece) -> TaperedScore {
        match piece {
            Piece::Pawn => TaperedScore::new(self.pawn_value_mg, self.pawn_value_eg),
            Piece::Knight => TaperedScore::new(self.knight_value_mg, self.knight_value_eg),
            Piece::Bishop => TaperedScore::new(self.bishop_value_mg, self.bishop_value_eg),
            Piece::Rook => TaperedScore::new(self.rook_value_mg, self.rook_value_eg),
            Piece::Queen => TaperedScore::new(self.queen_value_mg, self.queen_value_eg),
            Piece::King => TaperedScore::ZERO,
        }
    }

    /// Every value multiplied by `weight` percent.
    pub fn scaled(&self, weight: i32) -> Self {
        Self {
            pawn_value_mg: percent(self.pawn_value_mg, weight),
            pawn_value_eg: percent(self.pawn_value_eg, weight),
            knight_value_mg: percent(self.knight_value_mg, weight),
            knight_value_eg: percent(self.knight_value_eg, weight),
            bishop_value_mg: percent(self.bishop_value_mg, weight),
            bishop_value_eg: percent(self.bishop_value_eg, weight),
            rook_value_mg: percent(self.rook_value_mg, weight),
            rook_value_eg: percent(self.rook_value_eg, weight),
            queen_value_mg: percent(self.queen_value_mg, weight),
            queen_value_eg: percent(self.queen_value_eg, weight),
        }
    }

    /// Sums the values of all pieces of one color.
    pub fn material(&self, board: &Board, color: Color) -> TaperedScore {
        let mut material = TaperedScore::ZERO;
        for piece in Piece::ALL {
            let count = board.colored_pieces(color, piece).len() as i32;
            let value = self.get(piece);
            material += TaperedScore::new(value.mg * count, value.eg * count);
        }
        material
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_material() {
        let values = PieceValues::default();
        let board = Board::default();
        let white = values.material(&board, Color::White);
        assert_eq!(white, values.material(&board, Color::Black));
        assert_eq!(white.mg, 8 * 90 + 2 * 380 + 2 * 390 + 2 * 530 + 1160);
    }

    #[test]
    fn test_scaled() {
        let values = PieceValues::default().scaled(50);
        assert_eq!(values.get(Piece::Rook), TaperedScore::new(265, 325));
        assert_eq!(values.get(Piece::King), TaperedScore::ZERO);
    }
}
