use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "Sable")]
#[command(about = "Hand-crafted chess position evaluator")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Position to evaluate. May be given more than once.
    #[arg(short, long)]
    pub fen: Vec<String>,

    /// EPD file with one position per line.
    #[arg(short, long)]
    pub epd: Option<PathBuf>,

    /// Override an evaluation parameter, e.g. `--set PassedPawns=120`.
    #[arg(short, long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,

    /// Blur the evaluation to play at roughly this strength.
    #[arg(long)]
    pub elo: Option<i32>,

    /// Seed for the per-game blur key. Random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print every parameter as an engine option and exit.
    #[arg(long)]
    pub list_options: bool,

    /// Also evaluate the color-flipped position and report asymmetries.
    #[arg(short, long)]
    pub mirror: bool,

    /// Log evaluator diagnostics to a file.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,
}
