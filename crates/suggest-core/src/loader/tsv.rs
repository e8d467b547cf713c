// crates/suggest-core/src/loader/tsv.rs

//! GeoNames-style tab-separated dumps (`cities_canada-usa.tsv`).
//!
//! The first line names the columns; only `name`, `ascii`, `lat`, `long`,
//! `country`, `admin1` and `population` are read. The display name is
//! `"{name}, {region}, {country}"`, e.g. `"Montréal, QC, Canada"`.

use super::common_io::open_stream;
use crate::error::{Result, SuggestError};
use crate::model::{Catalog, CityRaw, Coordinate};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

const REQUIRED: [&str; 7] = ["name", "ascii", "lat", "long", "country", "admin1", "population"];

pub(super) fn load(path: &Path) -> Result<Catalog> {
    parse(open_stream(path)?)
}

/// Column positions resolved from the header row.
struct Columns([usize; REQUIRED.len()]);

impl Columns {
    fn from_header(header: &str) -> Result<Self> {
        let names: Vec<&str> = header.split('\t').map(str::trim).collect();
        let mut idx = [0usize; REQUIRED.len()];
        for (slot, wanted) in idx.iter_mut().zip(REQUIRED) {
            *slot = names.iter().position(|n| *n == wanted).ok_or_else(|| {
                SuggestError::InvalidData(format!("TSV header lacks a '{wanted}' column"))
            })?;
        }
        Ok(Self(idx))
    }

    fn record(&self, fields: &[&str], line: usize) -> Result<CityRaw> {
        let get = |i: usize| {
            fields.get(self.0[i]).copied().ok_or_else(|| SuggestError::DataIntegrity {
                line,
                reason: format!("missing '{}' field", REQUIRED[i]),
            })
        };
        let (name, ascii, lat, long) = (get(0)?, get(1)?, get(2)?, get(3)?);
        let (country, admin1, population) = (get(4)?, get(5)?, get(6)?);

        let population = population
            .trim()
            .parse::<u64>()
            .map_err(|e| SuggestError::DataIntegrity {
                line,
                reason: format!("'{name}' has bad population '{population}': {e}"),
            })?;

        Ok(CityRaw {
            complete_name: display_name(name, admin1, country),
            ascii_name: ascii.to_owned(),
            population,
            latitude: Coordinate::from(lat),
            longitude: Coordinate::from(long),
        })
    }
}

pub(super) fn parse(reader: impl Read) -> Result<Catalog> {
    let mut lines = BufReader::new(reader).lines();
    let header = match lines.next() {
        Some(h) => h?,
        None => return Catalog::new(Vec::new()),
    };
    let columns = Columns::from_header(&header)?;

    let mut cities = Vec::new();
    for (i, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        // +2: one for the header, one for 1-based numbering.
        let line_no = i + 2;
        let fields: Vec<&str> = line.split('\t').collect();
        cities.push(columns.record(&fields, line_no)?.into_city(line_no)?);
    }
    debug!(rows = cities.len(), "parsed TSV catalog");
    Catalog::new(cities)
}

fn display_name(name: &str, admin1: &str, country: &str) -> String {
    let (region, country) = match country {
        "CA" => (canadian_province(admin1).unwrap_or(admin1), "Canada"),
        "US" => (admin1, "USA"),
        other => (admin1, other),
    };
    if region.is_empty() {
        format!("{name}, {country}")
    } else {
        format!("{name}, {region}, {country}")
    }
}

/// GeoNames admin1 codes for Canada use FIPS numbers instead of postal codes.
fn canadian_province(code: &str) -> Option<&'static str> {
    Some(match code {
        "01" => "AB",
        "02" => "BC",
        "03" => "MB",
        "04" => "NB",
        "05" => "NL",
        "07" => "NS",
        "08" => "ON",
        "09" => "PE",
        "10" => "QC",
        "11" => "SK",
        "12" => "YT",
        "13" => "NT",
        "14" => "NU",
        _ => return None,
    })
}
