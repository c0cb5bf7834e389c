// src/geo.rs
// DOCUMENTATION: Distance helpers for venue proximity
// PURPOSE: Cheap planar filter distance plus great-circle display distance

use geo_types::Point;

/// Kilometers per degree used by the planar approximation
pub const KM_PER_DEGREE: f64 = 111.0;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Build a point from latitude/longitude, rejecting non-finite or out-of-range values
pub fn checked_point(latitude: f64, longitude: f64) -> Option<Point<f64>> {
    let valid = latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude);

    valid.then(|| Point::new(longitude, latitude))
}

/// Planar distance in kilometers: Euclidean distance in degrees times 111.
/// No cosine correction for longitude, so east-west distances are overestimated
/// away from the equator. Used for the nearby filter.
pub fn approx_distance_km(a: Point<f64>, b: Point<f64>) -> f64 {
    (a.y() - b.y()).hypot(a.x() - b.x()) * KM_PER_DEGREE
}

/// Great-circle distance in kilometers (haversine formula)
pub fn haversine_km(a: Point<f64>, b: Point<f64>) -> f64 {
    let d_lat = (b.y() - a.y()).to_radians();
    let d_lon = (b.x() - a.x()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.y().to_radians().cos() * b.y().to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}
