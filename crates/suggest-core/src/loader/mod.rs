// crates/suggest-core/src/loader/mod.rs

//! # Catalog Loader
//!
//! Handles the physical layer (files, decompression, caching) and delegates
//! to the format parsers (JSON, GeoNames TSV, binary cache). Every path ends
//! in [`Catalog::new`], so loaded catalogs carry the same guarantees as
//! hand-built ones.

use crate::error::{Result, SuggestError};
use crate::model::Catalog;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

mod binary;
mod common_io;
#[cfg(feature = "json")]
mod json;
mod tsv;

pub use common_io::{get_cache_path, is_cache_fresh};

// Single in-process cache so the bundled dataset is parsed once per process.
static DEFAULT_CATALOG: OnceCell<Arc<Catalog>> = OnceCell::new();

/// Suffix appended to a source file name for its binary cache.
pub const CACHE_SUFFIX: &str = "cache.bin";

/// What a catalog file contains, judged by its extension (`.gz` ignored).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Tsv,
    Binary,
}

impl SourceFormat {
    pub fn detect(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        let name = name.strip_suffix(".gz").unwrap_or(&name);

        if name.ends_with(".json") {
            SourceFormat::Json
        } else if name.ends_with(".tsv") {
            SourceFormat::Tsv
        } else {
            SourceFormat::Binary
        }
    }
}

impl Catalog {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "cities.json"
    }

    /// The bundled sample dataset, parsed once per process.
    pub fn load() -> Result<Arc<Self>> {
        DEFAULT_CATALOG
            .get_or_try_init(|| {
                let path = Self::default_data_dir().join(Self::default_dataset_filename());
                Self::load_from_path(path).map(Arc::new)
            })
            .cloned()
    }

    /// Loads a catalog, choosing the parser from the file name:
    /// `.json[.gz]`, `.tsv[.gz]`, anything else is a binary cache written by
    /// [`Catalog::save_as`].
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = SourceFormat::detect(path);
        debug!(path = %path.display(), ?format, "loading catalog");

        match format {
            #[cfg(feature = "json")]
            SourceFormat::Json => json::load(path),
            #[cfg(not(feature = "json"))]
            SourceFormat::Json => Err(SuggestError::InvalidData(format!(
                "{} is JSON but the 'json' feature is disabled",
                path.display()
            ))),
            SourceFormat::Tsv => tsv::load(path),
            SourceFormat::Binary => binary::load(path),
        }
    }

    /// **Smart Load:** reuses `<source>.cache.bin` while it is newer than the
    /// source, otherwise parses the source and refreshes the cache.
    ///
    /// Failing to write the cache is logged, not returned.
    pub fn load_cached(source: impl AsRef<Path>) -> Result<Self> {
        let source = source.as_ref();
        if SourceFormat::detect(source) == SourceFormat::Binary {
            return Self::load_from_path(source);
        }

        let cache = get_cache_path(source, CACHE_SUFFIX)?;
        if is_cache_fresh(source, &cache) {
            match binary::load(&cache) {
                Ok(catalog) => {
                    debug!(cache = %cache.display(), "catalog cache hit");
                    return Ok(catalog);
                }
                Err(e) => warn!(cache = %cache.display(), error = %e, "ignoring unreadable cache"),
            }
        }

        let catalog = Self::load_from_path(source)?;
        if let Err(e) = catalog.save_as(&cache) {
            warn!(cache = %cache.display(), error = %e, "could not write catalog cache");
        }
        Ok(catalog)
    }

    /// Writes the catalog as a binary cache (gzip-compressed with `compact`).
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        binary::save(self, path.as_ref())
    }

    /// Rebuilds a catalog from the bytes [`Catalog::save_as`] writes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        binary::from_bytes(data)
    }
}

/// Shorthand for [`SuggestError::NotFound`] with the path in the message.
pub(crate) fn not_found(path: &Path, e: std::io::Error) -> SuggestError {
    SuggestError::NotFound(format!("Catalog not found at {}: {}", path.display(), e))
}
