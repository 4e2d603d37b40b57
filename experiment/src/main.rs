mod logger;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process;

use anyhow::{ensure, Context};
use clap::{ArgAction, Parser};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use experiment::{plot, report, run_experiment, DEFAULT_SIZES};

/// Times insertion and deletion on an unbalanced BST fed random or balanced order, against
/// `BTreeSet`, and writes the results as a CSV table and a plot
#[derive(Debug, Parser)]
#[clap(version)]
struct Args {
    /// Numbers of keys to measure with, comma separated
    #[clap(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES.to_vec())]
    sizes: Vec<usize>,
    /// Seed for generating keys. A random seed is chosen and logged when omitted.
    #[clap(long, env = "BST_EXPERIMENT_SEED")]
    seed: Option<u64>,
    /// Path to write the CSV table to
    #[clap(short, long, default_value = "table.csv")]
    output: PathBuf,
    /// Path to write the insertion and deletion time plot to
    #[clap(short, long, default_value = "graph.png")]
    plot: PathBuf,
    /// Enables verbose logging
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    if let Err(err) = run() {
        log::error!("{:?}", err);
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init(args.verbose);
    log::debug!("{:?}", args);

    ensure!(!args.sizes.is_empty(), "at least one size is required");

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("using seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let rows = run_experiment(&args.sizes, &mut rng)?;
    report::log_summary(&rows);

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    report::write_csv(&rows, BufWriter::new(file))
        .with_context(|| format!("failed to write results to {}", args.output.display()))?;

    log::info!("wrote {} rows to {}", rows.len(), args.output.display());

    plot::plot(&rows, &args.plot)
        .with_context(|| format!("failed to plot results to {}", args.plot.display()))?;
    log::info!("wrote plot to {}", args.plot.display());
    Ok(())
}
