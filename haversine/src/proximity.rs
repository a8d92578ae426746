//! Ranking and radius filtering of located items around an origin, as used by profile search.

use thiserror::Error;

use crate::coordinate::Coordinate;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProximityError {
    #[error("search radius must be a finite positive number of kilometres, got {0}")]
    InvalidRadius(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchRadius(f64);

impl SearchRadius {
    pub fn new(km: f64) -> Result<SearchRadius, ProximityError> {
        if km.is_finite() && km > 0.0 {
            Ok(SearchRadius(km))
        } else {
            Err(ProximityError::InvalidRadius(km))
        }
    }

    #[must_use]
    pub fn km(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Located<T> {
    pub item: T,
    pub coordinate: Coordinate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T> {
    pub item: T,
    pub distance_km: f64,
}

/// Every item with its distance from `origin`, closest first. Equal distances keep their input
/// order.
pub fn rank_by_distance<T, I>(origin: &Coordinate, items: I) -> Vec<Ranked<T>>
where
    I: IntoIterator<Item = Located<T>>,
{
    let mut ranked: Vec<Ranked<T>> = items
        .into_iter()
        .map(|located| Ranked {
            distance_km: origin.distance_to(&located.coordinate),
            item: located.item,
        })
        .collect();
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked
}

/// Items no further than `radius` from `origin`, closest first.
pub fn within_radius<T, I>(origin: &Coordinate, items: I, radius: SearchRadius) -> Vec<Ranked<T>>
where
    I: IntoIterator<Item = Located<T>>,
{
    let mut ranked = rank_by_distance(origin, items);
    let cutoff = ranked.partition_point(|r| r.distance_km <= radius.km());
    ranked.truncate(cutoff);
    ranked
}

/// The `limit` items closest to `origin`.
pub fn nearest<T, I>(origin: &Coordinate, items: I, limit: usize) -> Vec<Ranked<T>>
where
    I: IntoIterator<Item = Located<T>>,
{
    let mut ranked = rank_by_distance(origin, items);
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod test_proximity {
    use super::{nearest, rank_by_distance, within_radius, Located, ProximityError, SearchRadius};
    use crate::coordinate::Coordinate;

    fn at(item: &'static str, lon: f64, lat: f64) -> Located<&'static str> {
        Located {
            item,
            coordinate: Coordinate::new(lon, lat).unwrap(),
        }
    }

    fn cities() -> Vec<Located<&'static str>> {
        vec![
            at("new-york", -74.006, 40.7128),
            at("paris", 2.3522, 48.8566),
            at("london", -0.1276, 51.5072),
            at("brussels", 4.3517, 50.8503),
        ]
    }

    fn london() -> Coordinate {
        Coordinate::new(-0.1276, 51.5072).unwrap()
    }

    #[test]
    fn test_rank_by_distance() {
        let ranked = rank_by_distance(&london(), cities());
        let order: Vec<_> = ranked.iter().map(|r| r.item).collect();
        assert_eq!(order, vec!["london", "brussels", "paris", "new-york"]);
        assert_eq!(ranked[0].distance_km, 0.0);
        assert!(ranked.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items = vec![at("a", 10.0, 10.0), at("b", 10.0, 10.0), at("c", 10.0, 10.0)];
        let ranked = rank_by_distance(&london(), items);
        let order: Vec<_> = ranked.iter().map(|r| r.item).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_within_radius() {
        let radius = SearchRadius::new(400.0).unwrap();
        let found = within_radius(&london(), cities(), radius);
        let names: Vec<_> = found.iter().map(|r| r.item).collect();
        assert_eq!(names, vec!["london", "brussels", "paris"]);
    }

    #[test]
    fn test_within_radius_is_inclusive() {
        let paris = Coordinate::new(2.3522, 48.8566).unwrap();
        let exact = london().distance_to(&paris);
        let found = within_radius(&london(), cities(), SearchRadius::new(exact).unwrap());
        assert_eq!(found.last().map(|r| r.item), Some("paris"));
    }

    #[test]
    fn test_nearest() {
        let found = nearest(&london(), cities(), 2);
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].item, "brussels");
        assert!(nearest(&london(), cities(), 0).is_empty());
        assert_eq!(nearest(&london(), cities(), 10).len(), 4);
    }

    #[test]
    fn test_invalid_radius() {
        for km in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                SearchRadius::new(km),
                Err(ProximityError::InvalidRadius(_))
            ));
        }
    }
}
