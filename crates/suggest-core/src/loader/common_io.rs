// crates/suggest-core/src/loader/common_io.rs
use super::not_found;
use crate::error::{Result, SuggestError};
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a file, buffers it, and unwraps gzip when the name ends in `.gz`.
pub(crate) fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| not_found(path, e))?;
    let reader = BufReader::new(file);

    let gzipped = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
    if !gzipped {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(SuggestError::InvalidData(format!(
            "{} is gzipped but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

/// `cities.tsv` + `cache.bin` -> `cities.tsv.cache.bin`, next to the source.
pub fn get_cache_path(source: &Path, suffix: &str) -> Result<PathBuf> {
    let filename = source
        .file_name()
        .ok_or_else(|| SuggestError::InvalidData(format!("{} has no file name", source.display())))?
        .to_string_lossy();
    Ok(source.with_file_name(format!("{filename}.{suffix}")))
}

/// `true` when `cache` exists and is not older than `source`.
pub fn is_cache_fresh(source: &Path, cache: &Path) -> bool {
    let cache_time = match fs::metadata(cache).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        // Source gone: the cache is all we have.
        Err(_) => true,
    }
}
