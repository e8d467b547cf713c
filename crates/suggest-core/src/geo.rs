// crates/suggest-core/src/geo.rs

//! Great-circle distance on a spherical Earth.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Finite, latitude within ±90 and longitude within ±180.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

/// Haversine distance between `a` and `b`, in the unit of `radius`.
///
/// Never exceeds `π × radius`.
///
/// ```rust
/// use suggest_core::geo::{great_circle_distance, GeoPoint, EARTH_RADIUS_KM};
///
/// let paris = GeoPoint::new(48.8566, 2.3522);
/// let london = GeoPoint::new(51.5074, -0.1278);
/// let d = great_circle_distance(paris, london, EARTH_RADIUS_KM);
/// assert!((d - 343.5).abs() < 1.0);
/// ```
pub fn great_circle_distance(a: GeoPoint, b: GeoPoint, radius: f64) -> f64 {
    let (phi1, phi2) = (a.lat.to_radians(), b.lat.to_radians());
    let d_phi = phi2 - phi1;
    let d_lambda = (b.lon - a.lon).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    // Rounding can push h a hair above 1 for antipodal points.
    2.0 * radius * h.sqrt().min(1.0).asin()
}

/// Largest possible great-circle distance: half the circumference.
#[inline]
pub fn max_distance(radius: f64) -> f64 {
    std::f64::consts::PI * radius
}
