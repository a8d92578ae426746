mod nearby;
mod validate;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use haversine::answer::read_answer;
use haversine::coordinate::Coordinate;
use haversine::haversine::HaversineData;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "haversine-app", about = "Great-circle distances between coordinates")]
struct Args {
    #[command(subcommand)]
    command: Command,
    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Distance in kilometres between two points given as "longitude,latitude"
    Distance {
        #[arg(value_name = "FROM", allow_hyphen_values = true)]
        from: Coordinate,
        #[arg(value_name = "TO", allow_hyphen_values = true)]
        to: Coordinate,
    },
    /// Rank the locations in a JSON file by distance from an origin
    Nearby {
        #[arg(value_name = "ORIGIN", allow_hyphen_values = true)]
        origin: Coordinate,
        #[arg(value_name = "INPUT_JSON")]
        input: PathBuf,
        /// Only keep locations at most this many kilometres away
        #[arg(long)]
        radius_km: Option<f64>,
        /// Maximum number of locations to print
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Recompute a generated data set and compare it against its reference answer
    Validate {
        #[arg(value_name = "INPUT_JSON")]
        input_json: PathBuf,
        #[arg(value_name = "EXPECTED_F64")]
        expected: PathBuf,
    },
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    Ok(BufReader::new(file))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Distance { from, to } => {
            println!("{}", from.distance_to(&to));
        }
        Command::Nearby {
            origin,
            input,
            radius_km,
            limit,
        } => {
            let locations = nearby::load_locations(open(&input)?)
                .with_context(|| format!("reading {}", input.display()))?;
            info!(count = locations.len(), %origin, "ranking locations");
            for ranked in nearby::search(&origin, locations, radius_km, limit)? {
                println!("{}\t{:.3}", ranked.item, ranked.distance_km);
            }
        }
        Command::Validate {
            input_json,
            expected,
        } => {
            let data = HaversineData::from_reader(open(&input_json)?)
                .with_context(|| format!("reading {}", input_json.display()))?;
            let reference = read_answer(open(&expected)?)
                .with_context(|| format!("reading {}", expected.display()))?;

            let report = validate::check(&data, &reference)?;
            println!("Pair count: {}", report.pair_count);
            println!("Validation:");
            println!("Reference mean: {}", report.reference_mean);
            println!("Computed mean: {}", report.computed_mean);
            println!("Difference: {}", report.difference());
            println!("Mismatched pairs: {}", report.mismatches);
        }
    }

    Ok(())
}
