use std::fs;
use std::path::Path;

use cozy_chess::Board;
use evaluation::HCE;
use hce::{EvalParams, Evaluator};
use log::{debug, warn};
use rayon::prelude::*;
use utils::{mirror_fen, Position};

/// Score of one input position, relative to the side to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scored {
    pub fen: String,
    pub score: i16,
    /// Score of the color-flipped position, when requested.
    pub mirrored: Option<i16>,
}

/// Applies `NAME=VALUE` overrides on top of `params`.
pub fn apply_overrides(params: EvalParams, overrides: &[String]) -> Result<EvalParams, String> {
    overrides.iter().try_fold(params, |params, entry| {
        let (name, value) = entry
            .split_once('=')
            .ok_or_else(|| format!("Expected NAME=VALUE, got '{}'", entry))?;
        debug!("Setting {} to {}", name.trim(), value.trim());
        params.set(name.trim(), value)
    })
}

/// FEN of an EPD record. Operations after the four position fields are dropped;
/// move counters are kept when present.
pub fn epd_to_fen(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return None;
    }

    let counters = match fields.get(4..6) {
        Some([halfmove, fullmove])
            if halfmove.parse::<u32>().is_ok() && fullmove.parse::<u32>().is_ok() =>
        {
            format!("{} {}", halfmove, fullmove)
        }
        _ => "0 1".to_string(),
    };

    Some(format!("{} {}", fields[..4].join(" "), counters))
}

pub fn read_epd(path: &Path) -> Result<Vec<String>, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let fens: Vec<String> = contents.lines().filter_map(epd_to_fen).collect();
    debug!("Read {} positions from {}", fens.len(), path.display());
    Ok(fens)
}

fn score(evaluator: &mut Evaluator, fen: &str) -> Result<i16, String> {
    let board: Board = fen
        .parse()
        .map_err(|e| format!("Invalid FEN '{}': {:?}", fen, e))?;
    Ok(evaluator.evaluate(&Position::new(&board)))
}

fn evaluate_one(evaluator: &mut Evaluator, fen: &str, mirror: bool) -> Result<Scored, String> {
    let value = score(evaluator, fen)?;
    let mirrored = if mirror {
        let flipped = score(evaluator, &mirror_fen(fen))?;
        if flipped != value {
            warn!("Asymmetric evaluation: {} vs {} for {}", value, flipped, fen);
        }
        Some(flipped)
    } else {
        None
    };

    Ok(Scored {
        fen: fen.to_string(),
        score: value,
        mirrored,
    })
}

/// Evaluates every position in parallel. Each rayon worker owns its evaluator and
/// caches; results keep the input order.
pub fn evaluate_all(
    fens: &[String],
    params: &EvalParams,
    game_key: u64,
    mirror: bool,
) -> Result<Vec<Scored>, String> {
    fens.par_iter()
        .map_init(
            || {
                let mut evaluator = Evaluator::new(params.clone());
                evaluator.new_game(game_key);
                evaluator
            },
            |evaluator, fen| evaluate_one(evaluator, fen, mirror),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_epd_to_fen() {
        assert_eq!(
            epd_to_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - bm e4; id \"start\";"),
            Some(START.to_string())
        );
        assert_eq!(
            epd_to_fen("4k3/8/8/8/8/8/4P3/4K3 b - - 3 40"),
            Some("4k3/8/8/8/8/8/4P3/4K3 b - - 3 40".to_string())
        );
        assert_eq!(epd_to_fen("   "), None);
        assert_eq!(epd_to_fen("# comment"), None);
        assert_eq!(epd_to_fen("4k3/8 w"), None);
    }

    #[test]
    fn test_apply_overrides() {
        let overrides = vec!["PassedPawns=120".to_string(), " KeepQueen = 5".to_string()];
        let params = apply_overrides(EvalParams::default(), &overrides).unwrap();
        assert_eq!(params.get("PassedPawns"), Some(120));
        assert_eq!(params.get("KeepQueen"), Some(5));

        assert!(apply_overrides(EvalParams::default(), &["PassedPawns".to_string()]).is_err());
        assert!(apply_overrides(EvalParams::default(), &["Nope=1".to_string()]).is_err());
        assert!(apply_overrides(EvalParams::default(), &["Material=900".to_string()]).is_err());
    }

    #[test]
    fn test_evaluate_all_keeps_order() {
        let fens = vec![
            START.to_string(),
            "4k3/8/8/8/8/8/8/R3K3 w - - 0 1".to_string(),
            "4k3/8/8/8/8/8/8/R3K3 b - - 0 1".to_string(),
        ];
        let scored = evaluate_all(&fens, &EvalParams::default(), 0, true).unwrap();

        assert_eq!(scored.len(), 3);
        assert_eq!(scored[0].fen, START);
        assert_eq!(scored[0].score, 14);
        assert!(scored[1].score > 0);
        assert!(scored[2].score < 0);
        for entry in &scored {
            assert_eq!(entry.mirrored, Some(entry.score));
        }
    }

    #[test]
    fn test_mirrored_score_matches() {
        let mut evaluator = Evaluator::default();
        let fen = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

        let plain = evaluate_one(&mut evaluator, fen, false).unwrap();
        assert_eq!(plain.mirrored, None);

        let scored = evaluate_one(&mut evaluator, fen, true).unwrap();
        assert_eq!(scored.score, plain.score);
        assert_eq!(scored.mirrored, Some(plain.score));
    }

    #[test]
    fn test_invalid_fen_is_an_error() {
        let fens = vec!["not a fen".to_string()];
        assert!(evaluate_all(&fens, &EvalParams::default(), 0, false).is_err());
    }
}
