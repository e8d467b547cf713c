//! suggest-core prelude: bring common types and traits into scope.

pub use crate::error::{Result, SuggestError, ValidationError};
pub use crate::geo::{GeoPoint, EARTH_RADIUS_KM};
pub use crate::model::{Catalog, CatalogStats, City, CityRaw, Coordinate, SharedCatalog};
pub use crate::request::{Query, SuggestionRequest};
pub use crate::search::{results, validate, CitySuggest, ScoredMatch, Suggestions};
