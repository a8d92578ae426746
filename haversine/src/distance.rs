use crate::earth;
use crate::haversine::CoordinatePair;

fn square(x: f64) -> f64 {
    x * x
}

/// Great-circle distance in kilometres between two `(longitude, latitude)` points, in degrees,
/// on a sphere of radius `earth::RADIUS`.
///
/// No validation is performed: out-of-range degrees still produce a number.
#[must_use]
pub fn distance_km(point1: (f64, f64), point2: (f64, f64)) -> f64 {
    great_circle(point1, point2, earth::RADIUS)
}

/// Haversine distance between two `(longitude, latitude)` points on a sphere of the given radius.
/// The result is in the same unit as `earth_radius`.
#[must_use]
pub fn great_circle(from: (f64, f64), to: (f64, f64), earth_radius: f64) -> f64 {
    let (lon1, lat1) = from;
    let (lon2, lat2) = to;

    let lat_delta = (lat2 - lat1).to_radians();
    let lon_delta = (lon2 - lon1).to_radians();
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();

    let a = square(f64::sin(lat_delta / 2.0))
        + f64::cos(lat1) * f64::cos(lat2) * square(f64::sin(lon_delta / 2.0));
    // Rounding can push `a` a hair past 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * f64::atan2(f64::sqrt(a), f64::sqrt(1.0 - a));

    earth_radius * c
}

#[must_use]
pub fn pair_distance(pair: &CoordinatePair, earth_radius: f64) -> f64 {
    let (from, to) = pair.points();
    great_circle(from, to, earth_radius)
}

/// Mean distance over all the pairs, or 0 if there are none.
///
/// Accumulated as a running mean, so the generator and the checker reach the same bits.
#[must_use]
pub fn mean_distance(pairs: &[CoordinatePair], earth_radius: f64) -> f64 {
    running_mean(pairs.iter().map(|pair| pair_distance(pair, earth_radius)))
}

pub(crate) fn running_mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut mean = 0.0_f64;
    for (count, value) in values.into_iter().enumerate() {
        let n = count as f64 + 1.0;
        mean = ((1.0 - (1.0 / n)) * mean) + (value / n);
    }
    mean
}
