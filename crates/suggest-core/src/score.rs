// crates/suggest-core/src/score.rs

//! Multi-signal scoring of a matched city.
//!
//! Each signal sits in `[0, 1]` for well-formed data:
//!
//! | signal     | formula                                  |
//! |------------|------------------------------------------|
//! | length     | `len(query) / len(ascii_name)`           |
//! | population | `1 - min_population / population`        |
//! | distance   | `1 - great_circle(origin, city) / (π R)` |
//!
//! The composite is the mean of the active signals (distance only takes part
//! when the query carries an origin), rounded to one decimal, half away from
//! zero.

use crate::geo::{great_circle_distance, max_distance, GeoPoint, EARTH_RADIUS_KM};
use crate::model::City;
use crate::request::Query;
use crate::text::char_len;

/// How much of the city name the query covers.
#[inline]
pub fn length_signal(query_len: usize, ascii_name: &str) -> f64 {
    query_len as f64 / char_len(ascii_name) as f64
}

/// 0 for the smallest city in the catalog, approaching 1 for large ones.
///
/// `population` must be positive; [`Catalog::new`](crate::Catalog::new)
/// guarantees it.
#[inline]
pub fn population_signal(min_population: u64, population: u64) -> f64 {
    1.0 - min_population as f64 / population as f64
}

/// 1 at the origin, 0 at its antipode.
#[inline]
pub fn distance_signal(origin: GeoPoint, city: GeoPoint) -> f64 {
    1.0 - great_circle_distance(origin, city, EARTH_RADIUS_KM) / max_distance(EARTH_RADIUS_KM)
}

/// Rounds to one decimal, half away from zero (`0.25 -> 0.3`, `0.55 -> 0.6`).
#[inline]
pub fn round_score(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// The individual signals for one city, before averaging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signals {
    pub length: f64,
    pub population: f64,
    pub distance: Option<f64>,
}

impl Signals {
    /// Rounded mean of the active signals.
    pub fn composite(&self) -> f64 {
        let (sum, n) = match self.distance {
            Some(d) => (self.length + self.population + d, 3.0),
            None => (self.length + self.population, 2.0),
        };
        round_score(sum / n)
    }
}

/// Scores cities for one query against one catalog.
#[derive(Debug, Clone, Copy)]
pub struct Scorer {
    query_len: usize,
    origin: Option<GeoPoint>,
    min_population: u64,
}

impl Scorer {
    pub fn new(query: &Query, min_population: u64) -> Self {
        Self {
            query_len: query.text_len(),
            origin: query.origin(),
            min_population,
        }
    }

    pub fn signals(&self, city: &City) -> Signals {
        Signals {
            length: length_signal(self.query_len, city.ascii_name()),
            population: population_signal(self.min_population, city.population()),
            distance: self.origin.map(|o| distance_signal(o, city.point())),
        }
    }

    pub fn score(&self, city: &City) -> f64 {
        self.signals(city).composite()
    }
}
