//! Writes a random data set of coordinate pairs, plus the reference answer for it.
//!
//! ```bash
//! generator 1234 1000 --algorithm uniform --output-dir data/
//! ```

mod sample;

use anyhow::{Context, Result};
use clap::Parser;
use haversine::answer::write_answer;
use haversine::distance::pair_distance;
use haversine::earth;
use haversine::haversine::HaversineData;
use sample::SelectionAlgorithm;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "generator", about = "Generate random coordinate pairs and their distances")]
struct Args {
    #[arg(value_name = "RANDOM_SEED", required = true)]
    seed: u64,
    #[arg(value_name = "COUNT", required = true)]
    count: usize,
    #[arg(default_value_t = SelectionAlgorithm::Cluster, long)]
    algorithm: SelectionAlgorithm,
    /// Directory the JSON data set and the answer file are written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn json_path(dir: &Path, count: usize) -> PathBuf {
    dir.join(format!("data_{count}_flex.json"))
}

fn answer_path(dir: &Path, count: usize) -> PathBuf {
    dir.join(format!("data_{count}_haveranswer.f64"))
}

fn write_json(data: &HaversineData, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    data.to_writer(BufWriter::new(file))
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Returns the mean distance.
fn write_reference(data: &HaversineData, path: &Path) -> Result<f64> {
    let distances: Vec<f64> = data
        .pairs
        .iter()
        .map(|pair| pair_distance(pair, earth::RADIUS))
        .collect();

    let file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mean = write_answer(BufWriter::new(file), &distances)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(mean)
}

/// Generates the data set and writes both files, returning their paths.
fn run(args: &Args) -> Result<(PathBuf, PathBuf)> {
    let data = sample::generate(args.seed, args.count, args.algorithm)?;

    let json = json_path(&args.output_dir, args.count);
    write_json(&data, &json)?;

    let answer = answer_path(&args.output_dir, args.count);
    let mean = write_reference(&data, &answer)?;

    info!(mean, "expected mean distance");
    Ok((json, answer))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!(
        method = %args.algorithm,
        seed = args.seed,
        count = args.count,
        "generating pairs"
    );

    let (json, answer) = run(&args)?;
    info!(json = %json.display(), answer = %answer.display(), "done");
    Ok(())
}
