use crate::masks::LIGHT_SQUARES;
use cozy_chess::{BitBoard, Board, Color, Piece};

/// Minor pieces (knights and bishops) of a color.
pub fn minors(board: &Board, color: Color) -> BitBoard {
    board.colored_pieces(color, Piece::Knight) | board.colored_pieces(color, Piece::Bishop)
}

/// Major pieces (rooks and queens) of a color.
pub fn majors(board: &Board, color: Color) -> BitBoard {
    board.colored_pieces(color, Piece::Rook) | board.colored_pieces(color, Piece::Queen)
}

/// True if `color` has only its king.
pub fn is_bare_king(board: &Board, color: Color) -> bool {
    board.colors(color).len() == 1
}

/// True if `color` cannot force mate on its own: king alone, or king with a single minor
/// and no pawns.
pub fn side_has_insufficient_material(board: &Board, color: Color) -> bool {
    if !(board.colored_pieces(color, Piece::Pawn) | majors(board, color)).is_empty() {
        return false;
    }
    minors(board, color).len() <= 1
}

/// Both sides have exactly one bishop and they stand on squares of different colors.
pub fn has_opposite_bishops(board: &Board) -> bool {
    let white = board.colored_pieces(Color::White, Piece::Bishop);
    let black = board.colored_pieces(Color::Black, Piece::Bishop);
    if white.len() != 1 || black.len() != 1 {
        return false;
    }
    let white_on_light = !(white & LIGHT_SQUARES).is_empty();
    let black_on_light = !(black & LIGHT_SQUARES).is_empty();
    white_on_light != black_on_light
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_material_lone_king_and_minor() {
        let board: Board = "k7/8/8/8/8/8/8/KN6 w - - 0 1".parse().unwrap();
        assert!(side_has_insufficient_material(&board, Color::White));
        assert!(side_has_insufficient_material(&board, Color::Black));

        let board: Board = "kb6/8/8/8/8/8/8/K7 w - - 0 1".parse().unwrap();
        assert!(side_has_insufficient_material(&board, Color::Black));
    }

    #[test]
    fn test_sufficient_material() {
        let board: Board = "k7/8/8/8/8/8/8/KNN5 w - - 0 1".parse().unwrap();
        assert!(!side_has_insufficient_material(&board, Color::White));

        let board: Board = "k7/8/8/8/8/8/P7/K7 w - - 0 1".parse().unwrap();
        assert!(!side_has_insufficient_material(&board, Color::White));

        let board: Board = "k7/8/8/8/8/8/8/KR6 w - - 0 1".parse().unwrap();
        assert!(!side_has_insufficient_material(&board, Color::White));
    }

    #[test]
    fn test_bare_king() {
        let board: Board = "k7/8/8/8/8/8/8/KR6 w - - 0 1".parse().unwrap();
        assert!(is_bare_king(&board, Color::Black));
        assert!(!is_bare_king(&board, Color::White));
    }

    #[test]
    fn test_opposite_bishops() {
        // c1 is dark, c8 is light
        let board: Board = "2b1k3/8/8/8/8/8/8/2B1K3 w - - 0 1".parse().unwrap();
        assert!(has_opposite_bishops(&board));

        // c1 and f8 are both dark
        let board: Board = "4kb2/8/8/8/8/8/8/2B1K3 w - - 0 1".parse().unwrap();
        assert!(!has_opposite_bishops(&board));
    }

    #[test]
    fn test_minors_and_majors() {
        let board = Board::default();
        assert_eq!(minors(&board, Color::White).len(), 4);
        assert_eq!(majors(&board, Color::Black).len(), 3);
    }
}
