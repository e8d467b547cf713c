// crates/suggest-core/src/model/catalog.rs
use super::{City, CityRaw};
use crate::error::{Result, SuggestError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The in-memory collection of cities searched per query.
///
/// Built once, then only read. The catalog-wide minimum population is
/// computed here and handed to the scorer explicitly.
#[derive(Clone, Debug)]
pub struct Catalog {
    cities: Vec<City>,
    min_population: u64,
}

/// Simple aggregate statistics for a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub cities: usize,
    pub min_population: u64,
    pub max_population: u64,
}

impl Catalog {
    /// Builds a catalog, refusing records the scorer cannot handle.
    ///
    /// Fails with [`SuggestError::DataIntegrity`] on the first city with a
    /// zero population, an empty ascii name or out-of-range coordinates.
    pub fn new(cities: Vec<City>) -> Result<Self> {
        for (line, city) in cities.iter().enumerate() {
            if let Some(reason) = city.integrity_issue() {
                return Err(SuggestError::DataIntegrity { line, reason });
            }
        }

        // An empty catalog never reaches the scorer, so 0 is never divided by.
        let min_population = cities.iter().map(City::population).min().unwrap_or(0);
        debug!(cities = cities.len(), min_population, "catalog built");

        Ok(Self {
            cities,
            min_population,
        })
    }

    /// Builds a catalog from raw JSON-shaped records.
    pub fn from_raw(raw: Vec<CityRaw>) -> Result<Self> {
        let cities = raw
            .into_iter()
            .enumerate()
            .map(|(line, r)| r.into_city(line))
            .collect::<Result<Vec<_>>>()?;
        Self::new(cities)
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Smallest population in the catalog (0 when the catalog is empty).
    pub fn min_population(&self) -> u64 {
        self.min_population
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            cities: self.cities.len(),
            min_population: self.min_population,
            max_population: self.cities.iter().map(City::population).max().unwrap_or(0),
        }
    }
}
