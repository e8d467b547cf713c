// crates/suggest-core/src/loader/json.rs
#![cfg(feature = "json")]

use super::common_io::open_stream;
use crate::error::Result;
use crate::model::{Catalog, CityRaw};
use std::path::Path;

/// Parses a JSON array of [`CityRaw`] records.
pub(super) fn load(path: &Path) -> Result<Catalog> {
    let reader = open_stream(path)?;
    let raw: Vec<CityRaw> = serde_json::from_reader(reader)?;
    Catalog::from_raw(raw)
}
