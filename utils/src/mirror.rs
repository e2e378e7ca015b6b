/// Color-flipped FEN: ranks mirrored, piece colors and side to move swapped.
/// The evaluation of the result is the negated evaluation of the input.
pub fn mirror_fen(fen: &str) -> String {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().unwrap_or_default();
    let side = fields.next().unwrap_or("w");
    let castling = fields.next().unwrap_or("-");
    let en_passant = fields.next().unwrap_or("-");

    let placement = placement
        .split('/')
        .rev()
        .map(swap_case)
        .collect::<Vec<_>>()
        .join("/");

    let side = if side == "w" { "b" } else { "w" };

    let castling = if castling == "-" {
        castling.to_string()
    } else {
        let mut rights: Vec<char> = swap_case(castling).chars().collect();
        rights.sort_by_key(|c| c.is_ascii_lowercase());
        rights.into_iter().collect()
    };

    let en_passant = match en_passant.as_bytes() {
        [file, rank] => format!("{}{}", *file as char, (b'1' + b'8' - rank) as char),
        _ => "-".to_string(),
    };

    let mut mirrored = vec![placement, side.to_string(), castling, en_passant];
    mirrored.extend(fields.map(str::to_string));
    mirrored.join(" ")
}

fn swap_case(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozy_chess::Board;

    #[test]
    fn test_start_position_mirrors_to_itself() {
        let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert_eq!(
            mirror_fen(start),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1"
        );
    }

    #[test]
    fn test_mirror_fields() {
        let fen = "4k3/8/8/3pP3/8/8/8/4K2R w K d6 0 3";
        let mirrored = mirror_fen(fen);
        assert_eq!(mirrored, "4k2r/8/8/8/3Pp3/8/8/4K3 b k d3 0 3");
        assert!(mirrored.parse::<Board>().is_ok());
        assert_eq!(mirror_fen(&mirrored), fen);
    }
}
