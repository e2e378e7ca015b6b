use crate::config::EvalParams;
use crate::tables::EvalTables;
use cozy_chess::{get_king_moves, BitBoard, Board, Color, Piece, Square};
use evaluation::TaperedScore;
use utils::masks::{double_pawn_control, fill_forward, pawn_control};
use utils::Position;

/// Scratch state of a single evaluation, indexed by color. Totals only ever grow by
/// additions; nothing is written back into the position.
pub struct EvalContext<'a> {
    pub position: &'a Position<'a>,
    pub params: &'a EvalParams,
    pub tables: &'a EvalTables,
    pub phase: i32,

    /// General totals, starting at the material baseline.
    pub score: [TaperedScore; 2],
    /// Pawn-structure totals (cacheable).
    pub pawns: [TaperedScore; 2],
    pub primary_pst: [TaperedScore; 2],
    pub secondary_pst: [TaperedScore; 2],
    pub attack_units: [i32; 2],
    /// Raw mobility, kept only when mobility rebalancing is enabled.
    pub dynamic_mobility: [TaperedScore; 2],
    pub flat_mobility: [TaperedScore; 2],

    pub pawn_takes: [BitBoard; 2],
    /// Squares pawns could control after advancing.
    pub pawn_can_take: [BitBoard; 2],
    pub two_pawns_take: [BitBoard; 2],
    pub all_attacks: [BitBoard; 2],
    /// Knight, bishop and rook control.
    pub nbr_attacks: [BitBoard; 2],
    pub q_attacks: [BitBoard; 2],

    /// Per-side weights; "own" belongs to the program side.
    pub side_attack: [i32; 2],
    pub side_mobility: [i32; 2],
}

impl<'a> EvalContext<'a> {
    pub fn new(
        position: &'a Position<'a>,
        params: &'a EvalParams,
        tables: &'a EvalTables,
        program_side: Color,
    ) -> Self {
        let board = position.board;

        let mut score = [TaperedScore::ZERO; 2];
        let mut pawn_takes = [BitBoard::EMPTY; 2];
        let mut pawn_can_take = [BitBoard::EMPTY; 2];
        let mut two_pawns_take = [BitBoard::EMPTY; 2];
        let mut all_attacks = [BitBoard::EMPTY; 2];
        let mut side_attack = [params.opp_attack.value; 2];
        let mut side_mobility = [params.opp_mobility.value; 2];

        for color in Color::ALL {
            let i = color as usize;
            let pawns = board.colored_pieces(color, Piece::Pawn);

            for piece in Piece::ALL {
                let count = board.colored_pieces(color, piece).len() as i32;
                let value = tables.material[piece as usize];
                score[i] += TaperedScore::new(value.mg * count, value.eg * count);
            }

            pawn_takes[i] = pawn_control(pawns, color);
            pawn_can_take[i] = fill_forward(pawn_takes[i], color);
            two_pawns_take[i] = double_pawn_control(pawns, color);
            all_attacks[i] = pawn_takes[i] | get_king_moves(board.king(color));
        }

        side_attack[program_side as usize] = params.own_attack.value;
        side_mobility[program_side as usize] = params.own_mobility.value;

        Self {
            position,
            params,
            tables,
            phase: position.phase(),
            score,
            pawns: [TaperedScore::ZERO; 2],
            primary_pst: [TaperedScore::ZERO; 2],
            secondary_pst: [TaperedScore::ZERO; 2],
            attack_units: [0; 2],
            dynamic_mobility: [TaperedScore::ZERO; 2],
            flat_mobility: [TaperedScore::ZERO; 2],
            pawn_takes,
            pawn_can_take,
            two_pawns_take,
            all_attacks,
            nbr_attacks: [BitBoard::EMPTY; 2],
            q_attacks: [BitBoard::EMPTY; 2],
            side_attack,
            side_mobility,
        }
    }

    #[inline(always)]
    pub fn board(&self) -> &'a Board {
        self.position.board
    }

    #[inline(always)]
    pub fn pieces(&self, color: Color, piece: Piece) -> BitBoard {
        self.position.board.colored_pieces(color, piece)
    }

    #[inline(always)]
    pub fn count(&self, color: Color, piece: Piece) -> i32 {
        self.position.count(color, piece)
    }

    #[inline(always)]
    pub fn is_on(&self, color: Color, piece: Piece, sq: Square) -> bool {
        self.pieces(color, piece).has(sq)
    }

    #[inline(always)]
    pub fn is_empty(&self, sq: Square) -> bool {
        !self.position.board.occupied().has(sq)
    }

    #[inline(always)]
    pub fn add(&mut self, color: Color, score: TaperedScore) {
        self.score[color as usize] += score;
    }

    #[inline(always)]
    pub fn add_pawns(&mut self, color: Color, score: TaperedScore) {
        self.pawns[color as usize] += score;
    }

    /// Adds both piece-square hypotheses for a piece.
    #[inline(always)]
    pub fn add_pst(&mut self, color: Color, piece: Piece, sq: Square) {
        let i = color as usize;
        self.primary_pst[i] += self.tables.primary_pst(color, piece, sq);
        self.secondary_pst[i] += self.tables.secondary_pst(color, piece, sq);
    }

    /// Everything attacked by knights, bishops, rooks and queens.
    #[inline(always)]
    pub fn piece_attacks(&self, color: Color) -> BitBoard {
        self.nbr_attacks[color as usize] | self.q_attacks[color as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let board = Board::default();
        let position = Position::new(&board);
        let params = EvalParams::default();
        let tables = EvalTables::new(&params);
        let ctx = EvalContext::new(&position, &params, &tables, Color::White);

        assert_eq!(ctx.phase, 24);
        assert_eq!(ctx.score[0], ctx.score[1]);
        assert_eq!(ctx.score[0].mg, 8 * 90 + 2 * 380 + 2 * 390 + 2 * 530 + 1160);
        // third rank entirely covered by pawns
        assert_eq!(ctx.pawn_takes[0], BitBoard(0xFF_0000));
        assert_eq!(ctx.pawn_can_take[1].len(), 48);
        assert!(ctx.two_pawns_take[0].has(Square::C3));
        assert!(!ctx.two_pawns_take[0].has(Square::A3));
        assert!(ctx.all_attacks[0].has(Square::D2));
    }

    #[test]
    fn test_program_side_weights() {
        let board = Board::default();
        let position = Position::new(&board);
        let params = EvalParams::default()
            .set("OwnAttack", "150")
            .unwrap()
            .set("OppMobility", "20")
            .unwrap();
        let tables = EvalTables::new(&params);
        let ctx = EvalContext::new(&position, &params, &tables, Color::Black);

        assert_eq!(ctx.side_attack, [110, 150]);
        assert_eq!(ctx.side_mobility, [20, 50]);
    }
}
