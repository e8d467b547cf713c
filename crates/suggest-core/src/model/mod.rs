// crates/suggest-core/src/model/mod.rs
pub mod catalog;
pub mod city;
pub mod raw;
pub mod shared;

pub use catalog::{Catalog, CatalogStats};
pub use city::City;
pub use raw::{CityRaw, Coordinate};
pub use shared::SharedCatalog;
