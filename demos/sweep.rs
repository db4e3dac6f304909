//! Prints the trial frequency of a state for every sample count `1..=N`.
//!
//! ```bash
//! cargo run --example sweep -- half --max-count 1000
//! cargo run --example sweep -- union --seed 7
//! ```

use clap::{Parser, ValueEnum};
use log::info;

use states_rs::prelude::*;

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Preset {
    /// `[0, 50]` sampled over `[0, 100]`.
    Half,
    /// `[0, 10] ∪ [10, 30]` sampled over `[0, 60]`.
    Union,
    /// `{1, ..., 30}` sampled over `[0, 60]`.
    Set,
}

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// State to sample.
    #[arg(value_enum, default_value = "half")]
    state: Preset,

    /// Random seed.
    #[clap(long, value_name = "INT", default_value = "2021")]
    seed: u64,

    /// Lower sampling bound (overrides the preset).
    #[clap(long, value_name = "INT", allow_hyphen_values = true)]
    min: Option<i64>,

    /// Upper sampling bound (overrides the preset).
    #[clap(long, value_name = "INT", allow_hyphen_values = true)]
    max: Option<i64>,

    /// Largest sample count.
    #[clap(long, value_name = "INT", default_value = "1000")]
    max_count: u64,

    /// Enable debug logging.
    #[clap(long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    info!("args = {:?}", args);

    let (state, (min, max)) = match args.state {
        Preset::Half => (StateBox::new(Segment::new(0, 50)), (0, 100)),
        Preset::Union => (factory::union(Segment::new(0, 10), Segment::new(10, 30)), (0, 60)),
        Preset::Set => (StateBox::new(SetState::new(1..=30)), (0, 60)),
    };
    let min = args.min.unwrap_or(min);
    let max = args.max.unwrap_or(max);

    let base = TrialConfig::new(args.seed, min, max, 1);
    info!("state = {:?}, exact = {}", state, exact_frequency(&state, min, max)?);

    for freq in sweep(&state, &base, 1..=args.max_count)? {
        println!("{}", freq);
    }

    Ok(())
}
