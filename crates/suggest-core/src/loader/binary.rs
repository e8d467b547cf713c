// crates/suggest-core/src/loader/binary.rs
use super::not_found;
use crate::error::{Result, SuggestError};
use crate::model::{Catalog, City};
use bincode::Options;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

// Refuse absurd length prefixes in corrupt or hostile files.
const SIZE_LIMIT: u64 = 256 * 1024 * 1024;
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SIZE_LIMIT)
        .allow_trailing_bytes()
}

pub(super) fn load(path: &Path) -> Result<Catalog> {
    let bytes = fs::read(path).map_err(|e| not_found(path, e))?;
    from_bytes(&bytes)
}

/// Only the cities are stored; the minimum population is recomputed.
pub(super) fn from_bytes(data: &[u8]) -> Result<Catalog> {
    let cities: Vec<City> = if data.starts_with(&GZIP_MAGIC) {
        #[cfg(feature = "compact")]
        {
            options().deserialize_from(GzDecoder::new(data))?
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(SuggestError::InvalidData(
                "cache is gzipped but the 'compact' feature is disabled".into(),
            ));
        }
    } else {
        options().deserialize(data)?
    };
    Catalog::new(cities)
}

pub(super) fn save(catalog: &Catalog, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(SuggestError::Io)?;
    let mut writer = BufWriter::new(file);

    #[cfg(feature = "compact")]
    {
        let mut encoder = GzEncoder::new(&mut writer, Compression::default());
        options().serialize_into(&mut encoder, catalog.cities())?;
        encoder.finish()?;
    }
    #[cfg(not(feature = "compact"))]
    {
        options().serialize_into(&mut writer, catalog.cities())?;
    }

    writer.flush()?;
    Ok(())
}
