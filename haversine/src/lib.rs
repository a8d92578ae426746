pub mod answer;
pub mod coordinate;
pub mod distance;
pub mod earth;
pub mod haversine;
pub mod proximity;
