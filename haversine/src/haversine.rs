use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};
use std::io::{Read, Write};
use thiserror::Error;

/// One record of a data set: `x` is longitude and `y` is latitude, in degrees.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinatePair {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl CoordinatePair {
    #[must_use]
    pub fn from_points(from: (f64, f64), to: (f64, f64)) -> CoordinatePair {
        CoordinatePair {
            x0: from.0,
            y0: from.1,
            x1: to.0,
            y1: to.1,
        }
    }

    /// The two endpoints as `(longitude, latitude)` tuples.
    #[must_use]
    pub fn points(&self) -> ((f64, f64), (f64, f64)) {
        ((self.x0, self.y0), (self.x1, self.y1))
    }
}

// The byte patterns make bit-level disagreements between two runs visible.
impl Debug for CoordinatePair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "x0: {} ({:?}), y0: {} ({:?}), x1: {} ({:?}), y1: {} ({:?})",
            self.x0,
            self.x0.to_be_bytes(),
            self.y0,
            self.y0.to_be_bytes(),
            self.x1,
            self.x1.to_be_bytes(),
            self.y1,
            self.y1.to_be_bytes()
        ))
    }
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read or write pair data: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed pair data: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct HaversineData {
    pub pairs: Vec<CoordinatePair>,
}

impl HaversineData {
    pub fn from_reader<R>(reader: R) -> Result<HaversineData, DataError>
    where
        R: Read,
    {
        let data: HaversineData = serde_json::from_reader(reader)?;
        tracing::debug!(pairs = data.pairs.len(), "loaded pair data");
        Ok(data)
    }

    pub fn to_writer<W>(&self, mut writer: W) -> Result<(), DataError>
    where
        W: Write,
    {
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}
