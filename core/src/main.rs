mod args;
mod batch;

use args::Args;
use clap::Parser;
use hce::EvalParams;
use log::{debug, LevelFilter};
use rand::{rngs::StdRng, Rng, SeedableRng};
use simplelog::{Config, WriteLogger};
use std::error::Error;
use std::fs::File;

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;
    let params = configure(&args)?;

    if args.list_options {
        for line in params.options() {
            println!("{}", line);
        }
        return Ok(());
    }

    let mut fens = args.fen.clone();
    if let Some(path) = &args.epd {
        fens.extend(batch::read_epd(path)?);
    }
    if fens.is_empty() {
        fens.push(START_FEN.to_string());
    }

    let game_key: u64 = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed).gen(),
        None => rand::thread_rng().gen(),
    };
    debug!("Evaluating {} positions, game key {:#018x}", fens.len(), game_key);

    for scored in batch::evaluate_all(&fens, &params, game_key, args.mirror)? {
        match scored.mirrored {
            Some(mirrored) => println!("{} {} {}", scored.score, mirrored, scored.fen),
            None => println!("{} {}", scored.score, scored.fen),
        }
    }

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        WriteLogger::init(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        )?;
    }

    Ok(args)
}

fn configure(args: &Args) -> Result<EvalParams, String> {
    let mut params = EvalParams::default();
    if let Some(elo) = args.elo {
        params = params.with_elo(elo)?;
    }
    batch::apply_overrides(params, &args.set)
}
