use anyhow::{Context, Result};
use haversine::coordinate::Coordinate;
use haversine::proximity::{nearest, rank_by_distance, within_radius, Located, Ranked, SearchRadius};
use serde::Deserialize;
use std::io::Read;
use tracing::warn;

/// A profile location as stored: coordinates may be missing or garbage.
#[derive(Debug, Deserialize)]
struct StoredLocation {
    id: String,
    longitude: f64,
    latitude: f64,
}

/// Reads a JSON array of stored locations, dropping entries whose coordinates are invalid.
pub fn load_locations<R>(reader: R) -> Result<Vec<Located<String>>>
where
    R: Read,
{
    let stored: Vec<StoredLocation> =
        serde_json::from_reader(reader).context("parsing location list")?;

    let mut located = Vec::with_capacity(stored.len());
    for entry in stored {
        match Coordinate::new(entry.longitude, entry.latitude) {
            Ok(coordinate) => located.push(Located {
                item: entry.id,
                coordinate,
            }),
            Err(e) => warn!(id = %entry.id, error = %e, "skipping location"),
        }
    }
    Ok(located)
}

pub fn search(
    origin: &Coordinate,
    locations: Vec<Located<String>>,
    radius_km: Option<f64>,
    limit: Option<usize>,
) -> Result<Vec<Ranked<String>>> {
    let mut found = match radius_km {
        Some(km) => within_radius(origin, locations, SearchRadius::new(km)?),
        None => match limit {
            Some(limit) => return Ok(nearest(origin, locations, limit)),
            None => rank_by_distance(origin, locations),
        },
    };
    if let Some(limit) = limit {
        found.truncate(limit);
    }
    Ok(found)
}
