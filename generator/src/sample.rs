use clap::{builder::PossibleValue, ValueEnum};
use haversine::haversine::{CoordinatePair, HaversineData};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

pub const CLUSTER_COUNT: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionAlgorithm {
    Cluster,
    Uniform,
}

impl Display for SelectionAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cluster => f.write_str("cluster"),
            Self::Uniform => f.write_str("uniform"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    #[error("unknown selection algorithm {0:?}, expected cluster or uniform")]
    UnknownAlgorithm(String),
    #[error("number of points {count} is not a multiple of cluster count {CLUSTER_COUNT}")]
    UnevenClusters { count: usize },
}

impl FromStr for SelectionAlgorithm {
    type Err = SampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cluster" => Ok(SelectionAlgorithm::Cluster),
            "uniform" => Ok(SelectionAlgorithm::Uniform),
            _ => Err(SampleError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

impl ValueEnum for SelectionAlgorithm {
    fn value_variants<'a>() -> &'a [Self] {
        &[SelectionAlgorithm::Cluster, SelectionAlgorithm::Uniform]
    }
    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            SelectionAlgorithm::Cluster => Some(PossibleValue::new("cluster")),
            SelectionAlgorithm::Uniform => Some(PossibleValue::new("uniform")),
        }
    }
}

/// Returns the smaller one then the larger one.
fn sample_two<R, D>(range: D, rng: &mut R) -> (f64, f64)
where
    R: Rng,
    D: Distribution<f64>,
{
    let x1 = range.sample(rng);
    let x2 = range.sample(rng);

    if x1 < x2 {
        (x1, x2)
    } else {
        (x2, x1)
    }
}

fn sample_pair<R, D1, D2>(rng: &mut R, x_range: &D1, y_range: &D2) -> CoordinatePair
where
    R: Rng,
    D1: Distribution<f64>,
    D2: Distribution<f64>,
{
    CoordinatePair {
        x0: x_range.sample(rng),
        y0: y_range.sample(rng),
        x1: x_range.sample(rng),
        y1: y_range.sample(rng),
    }
}

/// Draws `count` random pairs of `(longitude, latitude)` points. The same seed always yields
/// the same pairs.
pub fn generate(
    seed: u64,
    count: usize,
    algorithm: SelectionAlgorithm,
) -> Result<HaversineData, SampleError> {
    let mut pairs = Vec::with_capacity(count);
    let mut rng = StdRng::seed_from_u64(seed);

    let x_range = Uniform::new(-180.0_f64, 180.0);
    let y_range = Uniform::new(-90.0_f64, 90.0);

    match algorithm {
        SelectionAlgorithm::Uniform => {
            for _ in 0..count {
                pairs.push(sample_pair(&mut rng, &x_range, &y_range));
            }
        }
        SelectionAlgorithm::Cluster => {
            if count % CLUSTER_COUNT != 0 {
                return Err(SampleError::UnevenClusters { count });
            }

            for cluster in 0..CLUSTER_COUNT {
                let (min_x, max_x) = sample_two(x_range, &mut rng);
                let (min_y, max_y) = sample_two(y_range, &mut rng);
                tracing::debug!(cluster, min_x, max_x, min_y, max_y, "sampling cluster");

                let x_range = Uniform::new_inclusive(min_x, max_x);
                let y_range = Uniform::new_inclusive(min_y, max_y);

                for _ in 0..count / CLUSTER_COUNT {
                    pairs.push(sample_pair(&mut rng, &x_range, &y_range));
                }
            }
        }
    }

    Ok(HaversineData { pairs })
}
