use arrayvec::ArrayVec;
use cozy_chess::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves, BitBoard,
    Board, Color, Piece, Square,
};

/// Exchange values; the king is priced so that capturing it ends any sequence.
const SEE_VALUES: [i32; Piece::NUM] = [100, 325, 325, 500, 1000, 20_000];

#[inline(always)]
pub fn see_value(piece: Piece) -> i32 {
    SEE_VALUES[piece as usize]
}

/// Static exchange evaluation of moving the piece on `from` to `to`,
/// capturing whatever stands there, followed by the best sequence of
/// recaptures for both sides (least valuable attacker first, x-rays included).
///
/// Returns the material balance for the side making the first move.
/// An empty `from` square yields 0.
///
/// <https://www.chessprogramming.org/SEE_-_The_Swap_Algorithm>
pub fn see(board: &Board, from: Square, to: Square) -> i32 {
    let (Some(mut attacker), Some(mut side)) = (board.piece_on(from), board.color_on(from)) else {
        return 0;
    };

    // One entry per capture; 32 pieces bound the sequence.
    let mut gains: ArrayVec<i32, 33> = ArrayVec::new();
    gains.push(board.piece_on(to).map_or(0, see_value));

    let mut occupied = board.occupied() ^ from.bitboard();
    let mut attackers = attackers_to(board, to, occupied);

    loop {
        side = !side;
        let ours = attackers & board.colors(side);
        let Some((piece, sq)) = least_valuable(board, ours) else {
            break;
        };

        let previous = gains[gains.len() - 1];
        if gains.try_push(see_value(attacker) - previous).is_err() {
            break;
        }

        attacker = piece;
        occupied ^= sq.bitboard();
        attackers = attackers_to(board, to, occupied);
    }

    while gains.len() > 1 {
        let last = gains.pop().unwrap_or_default();
        let depth = gains.len() - 1;
        gains[depth] = -(-gains[depth]).max(last);
    }

    gains[0]
}

/// All pieces of both colors attacking `sq` given the occupancy.
fn attackers_to(board: &Board, sq: Square, occupied: BitBoard) -> BitBoard {
    let queens = board.pieces(Piece::Queen);
    let diagonal = board.pieces(Piece::Bishop) | queens;
    let straight = board.pieces(Piece::Rook) | queens;

    let attackers = (get_pawn_attacks(sq, Color::Black)
        & board.colored_pieces(Color::White, Piece::Pawn))
        | (get_pawn_attacks(sq, Color::White) & board.colored_pieces(Color::Black, Piece::Pawn))
        | (get_knight_moves(sq) & board.pieces(Piece::Knight))
        | (get_king_moves(sq) & board.pieces(Piece::King))
        | (get_bishop_moves(sq, occupied) & diagonal)
        | (get_rook_moves(sq, occupied) & straight);

    attackers & occupied
}

fn least_valuable(board: &Board, candidates: BitBoard) -> Option<(Piece, Square)> {
    Piece::ALL.into_iter().find_map(|piece| {
        (candidates & board.pieces(piece))
            .next_square()
            .map(|sq| (piece, sq))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_see_free_pawn() {
        let board: Board = "4k3/8/8/3p4/8/8/8/3RK3 w - - 0 1".parse().unwrap();
        assert_eq!(see(&board, Square::D1, Square::D5), 100);
    }

    #[test]
    fn test_see_defended_pawn() {
        let board: Board = "4k3/8/4p3/3p4/8/8/8/3RK3 w - - 0 1".parse().unwrap();
        assert_eq!(see(&board, Square::D1, Square::D5), 100 - 500);
    }

    #[test]
    fn test_see_xray_recapture() {
        // Doubled rooks win the pawn defended once by a rook.
        let board: Board = "3rk3/8/8/3p4/8/8/3R4/3RK3 w - - 0 1".parse().unwrap();
        assert_eq!(see(&board, Square::D2, Square::D5), 100);
    }

    #[test]
    fn test_see_quiet_move_to_safe_square() {
        let board: Board = "4k3/8/8/8/8/8/8/Q3K3 w - - 0 1".parse().unwrap();
        assert_eq!(see(&board, Square::A1, Square::A4), 0);
    }

    #[test]
    fn test_see_queen_next_to_king_needs_support() {
        // Qh7 next to the black king: unsupported loses the queen
        let board: Board = "6k1/8/8/8/8/3Q4/8/6K1 w - - 0 1".parse().unwrap();
        assert_eq!(see(&board, Square::D3, Square::H7), -1000);

        // with the rook behind it on the h-file, Kxh7 Rxh7 gives the queen back for the king
        let board: Board = "6k1/8/8/8/8/3Q4/8/6KR w - - 0 1".parse().unwrap();
        assert_eq!(see(&board, Square::D3, Square::H7), 0);
    }

    #[test]
    fn test_see_empty_from_square() {
        let board = Board::default();
        assert_eq!(see(&board, Square::E4, Square::E5), 0);
    }
}
