// crates/suggest-core/src/lib.rs

//! # suggest-core
//!
//! Ranks an in-memory catalog of cities against a partial, accent-insensitive
//! query, optionally weighted by proximity to a coordinate.
//!
//! ```rust
//! use suggest_core::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let catalog = Catalog::new(vec![
//!     City::new("Paris", "Paris", 2_000_000, 48.8566, 2.3522),
//!     City::new("Parma", "Parma", 1_000_000, 44.8, 10.3),
//! ])?;
//!
//! let query = SuggestionRequest::new("Par").with_limit(2).to_query()?;
//! let hits = catalog.results(&query);
//!
//! assert_eq!(hits[0].name, "Paris");
//! assert_eq!(hits[0].score, 0.6);
//! # Ok(()) }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod geo;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod request;
pub mod score;
pub mod search;
pub mod text;

// Re-exports
pub use crate::error::{Result, SuggestError, ValidationError};
pub use crate::geo::{great_circle_distance, GeoPoint, EARTH_RADIUS_KM};
pub use crate::model::{Catalog, CatalogStats, City, CityRaw, Coordinate, SharedCatalog};
pub use crate::request::{Query, SuggestionRequest};
pub use crate::search::{results, validate, CitySuggest, ScoredMatch, Suggestions};
