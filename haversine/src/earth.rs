use std::f64::consts::PI;

/// Mean radius of the spherical Earth model, in kilometres.
pub const RADIUS: f64 = 6371.0;

/// Great-circle distance between two antipodal points.
pub const MAX_DISTANCE: f64 = PI * RADIUS;
