use cozy_chess::{Board, Color, Piece, Square};
use utils::distance::{chebyshev, closeness};
use utils::masks::LIGHT_SQUARES;
use utils::{has_opposite_bishops, is_bare_king, side_has_insufficient_material};

/// Draw factor meaning "no scaling".
pub const NO_SCALING: i32 = 64;

/// Pull toward the right corner in KBN vs K, per step of distance.
const CORNER_PULL: i32 = 20;
/// Pull toward the edge against a lone king, per step away from the center.
const EDGE_PULL: i32 = 10;
/// Bonus per step the attacking king gains on the lone king.
const KING_PROXIMITY: i32 = 2;

struct Material {
    pawns: i32,
    knights: i32,
    bishops: i32,
    rooks: i32,
    queens: i32,
}

impl Material {
    fn of(board: &Board, color: Color) -> Self {
        let count = |piece| board.colored_pieces(color, piece).len() as i32;
        Self {
            pawns: count(Piece::Pawn),
            knights: count(Piece::Knight),
            bishops: count(Piece::Bishop),
            rooks: count(Piece::Rook),
            queens: count(Piece::Queen),
        }
    }

    #[inline(always)]
    fn minors(&self) -> i32 {
        self.knights + self.bishops
    }

    #[inline(always)]
    fn majors(&self) -> i32 {
        self.rooks + self.queens
    }
}

/// How much of `color`'s advantage survives in drawish endgames, in 64ths.
/// Only called for the side the score favors, so it never increases a score.
pub(super) fn draw_factor(board: &Board, color: Color) -> i32 {
    let own = Material::of(board, color);
    let other = Material::of(board, !color);

    if own.pawns == 0 {
        // A lone king, or a single minor, cannot win
        if side_has_insufficient_material(board, color) {
            return 0;
        }

        // Two knights can't force mate against a bare king
        if own.knights == 2 && own.bishops + own.majors() == 0 && is_bare_king(board, !color) {
            return 0;
        }

        // Rook vs minor
        if other.pawns == 0
            && own.queens == 0
            && own.rooks == 1
            && own.minors() == 0
            && other.majors() == 0
            && other.minors() == 1
        {
            return 48;
        }

        // Rook + minor vs rook
        if other.pawns == 0
            && own.queens + other.queens == 0
            && own.rooks == 1
            && own.minors() == 1
            && other.rooks == 1
            && other.minors() == 0
        {
            return 51;
        }
    }

    // Opposite-colored bishops with nothing else but pawns
    if has_opposite_bishops(board)
        && own.knights + own.majors() == 0
        && other.knights + other.majors() == 0
    {
        let pawn_diff = (own.pawns - other.pawns).abs();
        return (35 + 3 * pawn_diff).min(57);
    }

    NO_SCALING
}

/// Guides the stronger side toward mate against a bare king, White's point of view.
/// KBN drives the king to a corner of the bishop's color; other mating material
/// drives it to the edge.
pub(super) fn checkmate_helper(board: &Board) -> i32 {
    if !board.pieces(Piece::Pawn).is_empty() {
        return 0;
    }

    for strong in Color::ALL {
        let weak = !strong;
        if !is_bare_king(board, weak) || is_bare_king(board, strong) {
            continue;
        }
        let own = Material::of(board, strong);
        if side_has_insufficient_material(board, strong)
            || (own.knights == 2 && own.bishops + own.majors() == 0)
        {
            return 0;
        }

        let lone_king = board.king(weak);
        let strong_king = board.king(strong);
        let mut bonus = KING_PROXIMITY * closeness(strong_king, lone_king);

        if own.knights == 1 && own.bishops == 1 && own.majors() == 0 {
            let light = !(board.colored_pieces(strong, Piece::Bishop) & LIGHT_SQUARES).is_empty();
            let corners = if light {
                [Square::A8, Square::H1]
            } else {
                [Square::A1, Square::H8]
            };
            let to_corner = corners
                .iter()
                .map(|&corner| chebyshev(lone_king, corner))
                .min()
                .unwrap_or(7);
            bonus += CORNER_PULL * (7 - to_corner);
        } else {
            bonus += EDGE_PULL * center_distance(lone_king);
        }

        return match strong {
            Color::White => bonus,
            Color::Black => -bonus,
        };
    }

    0
}

/// 0 on the four center squares, 6 in the corners.
#[inline(always)]
fn center_distance(sq: Square) -> i32 {
    let file = sq.file() as i32;
    let rank = sq.rank() as i32;
    (3 - file).max(file - 4) + (3 - rank).max(rank - 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factor(fen: &str, color: Color) -> i32 {
        let board: Board = fen.parse().unwrap();
        draw_factor(&board, color)
    }

    fn helper(fen: &str) -> i32 {
        let board: Board = fen.parse().unwrap();
        checkmate_helper(&board)
    }

    #[test]
    fn test_no_scaling_by_default() {
        assert_eq!(factor("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", Color::White), 64);
        assert_eq!(factor("4k3/8/8/8/8/8/P7/R3K3 w - - 0 1", Color::White), 64);
    }

    #[test]
    fn test_cannot_win() {
        assert_eq!(factor("k7/8/8/8/8/8/8/KN6 w - - 0 1", Color::White), 0);
        assert_eq!(factor("k7/8/8/8/8/8/8/KNN5 w - - 0 1", Color::White), 0);
        assert_eq!(factor("k7/8/8/8/8/8/8/K7 w - - 0 1", Color::Black), 0);
    }

    #[test]
    fn test_rook_endings() {
        assert_eq!(factor("k7/8/8/8/8/8/8/KR4n1 w - - 0 1", Color::White), 48);
        assert_eq!(factor("kr6/8/8/8/8/8/8/KR4N1 w - - 0 1", Color::White), 51);
        // the defender's pawns keep the game alive
        assert_eq!(factor("k7/p7/8/8/8/8/8/KR4n1 w - - 0 1", Color::White), 64);
        assert_eq!(factor("kr6/p7/8/8/8/8/8/KR4N1 w - - 0 1", Color::White), 64);
    }

    #[test]
    fn test_opposite_bishops() {
        // f2 is dark, f7 is light
        assert_eq!(factor("4k3/p4b2/8/8/8/8/PP3B2/4K3 w - - 0 1", Color::White), 38);
    }

    #[test]
    fn test_kbn_drives_to_bishop_corner() {
        // light-squared bishop: a8 is the mating corner, h8 is not
        let right = helper("k7/8/8/8/8/8/8/4KBN1 b - - 0 1");
        let wrong = helper("7k/8/8/8/8/8/8/4KBN1 b - - 0 1");
        assert!(right > wrong);
        assert!(right > 0);
    }

    #[test]
    fn test_lone_king_driven_to_edge() {
        let edge = helper("7k/8/8/8/8/8/8/1Q2K3 b - - 0 1");
        let center = helper("8/8/8/3k4/8/8/8/1Q2K3 b - - 0 1");
        assert!(edge > center);
        let mirrored = helper("1q2k3/8/8/8/8/8/8/7K w - - 0 1");
        assert_eq!(mirrored, -edge);
    }

    #[test]
    fn test_no_help_without_mating_material() {
        assert_eq!(helper("k7/8/8/8/8/8/8/KNN5 w - - 0 1"), 0);
        assert_eq!(helper("k7/8/8/8/8/8/P7/KQ6 w - - 0 1"), 0);
    }

    #[test]
    fn test_center_distance() {
        assert_eq!(center_distance(Square::D4), 0);
        assert_eq!(center_distance(Square::E5), 0);
        assert_eq!(center_distance(Square::A1), 6);
        assert_eq!(center_distance(Square::H8), 6);
    }
}
