// crates/suggest-core/src/model/city.rs
use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};

/// A city in the catalog.
///
/// Records are read-only once they sit in a [`Catalog`](super::Catalog);
/// the catalog constructor is where population and coordinates are checked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// Display string, e.g. `"Montréal, QC, Canada"`.
    pub complete_name: String,
    /// Diacritic-free name the matcher compares against.
    pub ascii_name: String,
    pub population: u64,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    pub fn new(
        complete_name: impl Into<String>,
        ascii_name: impl Into<String>,
        population: u64,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            complete_name: complete_name.into(),
            ascii_name: ascii_name.into(),
            population,
            latitude,
            longitude,
        }
    }

    pub fn name(&self) -> &str {
        &self.complete_name
    }

    pub fn ascii_name(&self) -> &str {
        &self.ascii_name
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Returns the first precondition this record breaks, if any.
    pub(crate) fn integrity_issue(&self) -> Option<String> {
        if self.ascii_name.trim().is_empty() {
            return Some(format!("'{}' has an empty ascii name", self.complete_name));
        }
        if !self.ascii_name.is_ascii() {
            return Some(format!(
                "'{}' has non-ASCII characters in its ascii name '{}'",
                self.complete_name, self.ascii_name
            ));
        }
        if self.population == 0 {
            return Some(format!("'{}' has zero population", self.complete_name));
        }
        if !self.point().is_valid() {
            return Some(format!(
                "'{}' has out-of-range coordinates ({}, {})",
                self.complete_name, self.latitude, self.longitude
            ));
        }
        None
    }
}
