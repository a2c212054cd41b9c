use anyhow::{Context, Result};
use clap::Parser;
use flick_core::ritual::DEFAULT_PERCENT;
use flick_core::RitualConfig;
use plant_flicks::{logging, render_outcome, render_summary, resolve_base_dir};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Plant flicks in a random percentage of folders.
///
/// Walks the directory tree under `--root`, appends a graffiti line to a
/// dotfile in each chosen folder (creating one when the folder has none), and
/// commits every file on its own in the enclosing Git repository.
#[derive(Parser, Debug)]
#[command(
    name = "plant-flicks",
    version,
    about = "🌱 Plant flicks in a random % of folders.",
    long_about = None
)]
struct Cli {
    /// Percentage of folders to flick.
    #[arg(long, default_value_t = DEFAULT_PERCENT, allow_negative_numbers = true)]
    percent: i64,

    /// Directory to walk. The Git root is searched upward from here.
    #[arg(long, default_value = ".")]
    root: String,

    /// Seed for folder sampling, file naming and tags. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let base_dir = resolve_base_dir(&cli.root)?;
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    debug!(
        version = flick_core::version(),
        base = %base_dir.display(),
        percent = cli.percent,
        seed = ?cli.seed,
        "parsed arguments"
    );

    let config = RitualConfig::new(base_dir).with_percent(cli.percent);
    let report = flick_core::ritual::plant_flicks(config, rng, |outcome| {
        println!("{}", render_outcome(outcome));
    })
    .context("❌ Ritual aborted")?;

    println!();
    println!("{}", render_summary(&report));
    Ok(())
}
