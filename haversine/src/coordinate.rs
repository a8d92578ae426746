//! Validated geographic coordinates.
//!
//! The distance functions accept any numbers. Callers that take coordinates from the outside
//! world build a [`Coordinate`] first, so bad input is rejected with a descriptive error before
//! any distance is computed.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::distance;

pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("longitude must be a finite number, got {0}")]
    NonFiniteLongitude(f64),
    #[error("latitude must be a finite number, got {0}")]
    NonFiniteLatitude(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("expected \"longitude,latitude\", got {0:?}")]
    Malformed(String),
}

/// A point on the Earth's surface in decimal degrees, known to be in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    longitude: f64,
    latitude: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    longitude: f64,
    latitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = CoordinateError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.longitude, raw.latitude)
    }
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64) -> Result<Coordinate, CoordinateError> {
        if !longitude.is_finite() {
            return Err(CoordinateError::NonFiniteLongitude(longitude));
        }
        if !latitude.is_finite() {
            return Err(CoordinateError::NonFiniteLatitude(latitude));
        }
        if !LONGITUDE_RANGE.contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        if !LATITUDE_RANGE.contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        Ok(Coordinate {
            longitude,
            latitude,
        })
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// `(longitude, latitude)`, the argument order of [`distance::distance_km`].
    #[must_use]
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }

    /// Great-circle distance in kilometres.
    #[must_use]
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        distance::distance_km(self.as_tuple(), other.as_tuple())
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(value: Coordinate) -> Self {
        value.as_tuple()
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.longitude, self.latitude)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CoordinateError::Malformed(s.to_owned());
        let (longitude, latitude) = s.trim().split_once(',').ok_or_else(malformed)?;
        let longitude = longitude.trim().parse::<f64>().map_err(|_| malformed())?;
        let latitude = latitude.trim().parse::<f64>().map_err(|_| malformed())?;
        Coordinate::new(longitude, latitude)
    }
}

#[cfg(test)]
mod test_coordinate {
    use super::{Coordinate, CoordinateError};

    #[test]
    fn test_boundaries_are_valid() {
        for (lon, lat) in [(-180.0, -90.0), (180.0, 90.0), (0.0, 0.0), (-180.0, 90.0)] {
            let c = Coordinate::new(lon, lat).unwrap();
            assert_eq!(c.as_tuple(), (lon, lat));
        }
    }

    #[test]
    fn test_rejections() {
        assert_eq!(
            Coordinate::new(f64::NAN, 0.0).unwrap_err().to_string(),
            "longitude must be a finite number, got NaN"
        );
        assert_eq!(
            Coordinate::new(0.0, f64::INFINITY),
            Err(CoordinateError::NonFiniteLatitude(f64::INFINITY))
        );
        assert_eq!(
            Coordinate::new(180.5, 0.0),
            Err(CoordinateError::LongitudeOutOfRange(180.5))
        );
        assert_eq!(
            Coordinate::new(0.0, -90.01),
            Err(CoordinateError::LatitudeOutOfRange(-90.01))
        );
    }

    #[test]
    fn test_finiteness_checked_before_range() {
        assert_eq!(
            Coordinate::new(500.0, f64::NEG_INFINITY),
            Err(CoordinateError::NonFiniteLatitude(f64::NEG_INFINITY))
        );
    }

    #[test]
    fn test_parse() {
        let c: Coordinate = " -0.1276, 51.5072 ".parse().unwrap();
        assert_eq!(c.longitude(), -0.1276);
        assert_eq!(c.latitude(), 51.5072);
        assert_eq!(c.to_string(), "-0.1276,51.5072");

        assert_eq!(
            "12.5".parse::<Coordinate>(),
            Err(CoordinateError::Malformed("12.5".to_owned()))
        );
        assert_eq!(
            "east,north".parse::<Coordinate>(),
            Err(CoordinateError::Malformed("east,north".to_owned()))
        );
        assert_eq!(
            "10,95".parse::<Coordinate>(),
            Err(CoordinateError::LatitudeOutOfRange(95.0))
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let c: Coordinate =
            serde_json::from_str(r#"{"longitude": 2.3522, "latitude": 48.8566}"#).unwrap();
        assert_eq!(c.as_tuple(), (2.3522, 48.8566));

        let err = serde_json::from_str::<Coordinate>(r#"{"longitude": 200, "latitude": 0}"#)
            .unwrap_err();
        assert!(err.to_string().contains("outside [-180, 180]"), "{err}");
    }

    #[test]
    fn test_distance_to() {
        let london = Coordinate::new(-0.1276, 51.5072).unwrap();
        let paris = Coordinate::new(2.3522, 48.8566).unwrap();
        let d = london.distance_to(&paris);
        assert!((343.0..=344.0).contains(&d));
        assert_eq!(d, paris.distance_to(&london));
    }
}
