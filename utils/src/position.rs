use cozy_chess::{Board, Color, Piece};
use std::cell::OnceCell;

/// Game phase weight per piece type (pawn, knight, bishop, rook, queen, king).
/// The starting position sums to 24.
pub const PHASE_WEIGHTS: [i32; Piece::NUM] = [0, 1, 1, 2, 4, 0];

/// Upper end of the phase scale used for interpolation.
pub const MAX_PHASE: i32 = 24;

/// Read-only view over a board with a few derived values the evaluator needs.
pub struct Position<'a> {
    pub board: &'a Board,
    pawn_key: OnceCell<u64>,
}

impl<'a> Position<'a> {
    #[inline(always)]
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            pawn_key: OnceCell::new(),
        }
    }

    #[inline(always)]
    pub fn count(&self, color: Color, piece: Piece) -> i32 {
        self.board.colored_pieces(color, piece).len() as i32
    }

    #[inline(always)]
    pub fn minor_count(&self, color: Color) -> i32 {
        self.count(color, Piece::Knight) + self.count(color, Piece::Bishop)
    }

    /// Number of pieces other than pawns and the king.
    #[inline(always)]
    pub fn piece_count(&self, color: Color) -> i32 {
        self.minor_count(color) + self.count(color, Piece::Rook) + self.count(color, Piece::Queen)
    }

    /// Phase counter: 24 with all pieces on the board, 0 with pawns and kings only.
    /// Promotions can push it above 24.
    pub fn phase(&self) -> i32 {
        Piece::ALL
            .iter()
            .map(|&piece| PHASE_WEIGHTS[piece as usize] * self.board.pieces(piece).len() as i32)
            .sum()
    }

    /// Full-position key.
    #[inline(always)]
    pub fn hash(&self) -> u64 {
        self.board.hash()
    }

    /// Key derived only from pawn and king placement (computed once, cached for reuse).
    #[inline(always)]
    pub fn pawn_key(&self) -> u64 {
        *self.pawn_key.get_or_init(|| pawn_key(self.board))
    }
}

/// Structural hash of pawns and kings. Positions sharing pawn structure and
/// king squares share the key regardless of the other pieces.
pub fn pawn_key(board: &Board) -> u64 {
    let white_pawns = board.colored_pieces(Color::White, Piece::Pawn).0;
    let black_pawns = board.colored_pieces(Color::Black, Piece::Pawn).0;
    let kings = (board.king(Color::White) as u64) | ((board.king(Color::Black) as u64) << 6);

    mix(white_pawns ^ 0x9E37_79B9_7F4A_7C15)
        ^ mix(black_pawns ^ 0xC2B2_AE3D_27D4_EB4F).rotate_left(23)
        ^ mix(kings ^ 0x1656_67B1_9E37_79F9).rotate_left(47)
}

// splitmix64 finalizer
#[inline(always)]
fn mix(mut x: u64) -> u64 {
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_start_position() {
        let board = Board::default();
        assert_eq!(Position::new(&board).phase(), 24);
    }

    #[test]
    fn test_phase_pawn_endgame() {
        let board: Board = "4k3/pp6/8/8/8/8/PP6/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(Position::new(&board).phase(), 0);
    }

    #[test]
    fn test_counts() {
        let board = Board::default();
        let position = Position::new(&board);
        assert_eq!(position.count(Color::White, Piece::Pawn), 8);
        assert_eq!(position.minor_count(Color::Black), 4);
        assert_eq!(position.piece_count(Color::White), 7);
    }

    #[test]
    fn test_pawn_key_ignores_pieces() {
        let a: Board = "r3k3/pp6/8/8/8/8/PP6/4K2R w - - 0 1".parse().unwrap();
        let b: Board = "4k3/pp6/8/3n4/8/8/PP6/4K3 b - - 0 1".parse().unwrap();
        assert_eq!(pawn_key(&a), pawn_key(&b));
        assert_ne!(a.hash(), b.hash());
    }

    #[test]
    fn test_pawn_key_tracks_pawns_and_kings() {
        let a: Board = "4k3/pp6/8/8/8/8/PP6/4K3 w - - 0 1".parse().unwrap();
        let b: Board = "4k3/pp6/8/8/8/1P6/P7/4K3 w - - 0 1".parse().unwrap();
        let c: Board = "4k3/pp6/8/8/8/8/PP6/3K4 w - - 0 1".parse().unwrap();
        assert_ne!(pawn_key(&a), pawn_key(&b));
        assert_ne!(pawn_key(&a), pawn_key(&c));
    }
}
