use anyhow::{bail, Result};
use haversine::answer::ReferenceAnswer;
use haversine::distance::{mean_distance, pair_distance};
use haversine::earth;
use haversine::haversine::HaversineData;
use tracing::debug;

#[derive(Debug, PartialEq)]
pub struct Report {
    pub pair_count: usize,
    pub reference_mean: f64,
    pub computed_mean: f64,
    /// Pairs whose recomputed distance is not bit-identical to the reference.
    pub mismatches: usize,
}

impl Report {
    pub fn difference(&self) -> f64 {
        f64::abs(self.reference_mean - self.computed_mean)
    }
}

pub fn check(data: &HaversineData, reference: &ReferenceAnswer) -> Result<Report> {
    if data.pairs.len() != reference.distances.len() {
        bail!(
            "data set has {} pairs but the reference answer has {} distances",
            data.pairs.len(),
            reference.distances.len()
        );
    }

    let mut mismatches = 0;
    for (index, (pair, &expected)) in data.pairs.iter().zip(&reference.distances).enumerate() {
        let actual = pair_distance(pair, earth::RADIUS);
        if actual.to_bits() != expected.to_bits() {
            debug!(index, expected, actual, ?pair, "distance mismatch");
            mismatches += 1;
        }
    }

    Ok(Report {
        pair_count: data.pairs.len(),
        reference_mean: reference.mean,
        computed_mean: mean_distance(&data.pairs, earth::RADIUS),
        mismatches,
    })
}
