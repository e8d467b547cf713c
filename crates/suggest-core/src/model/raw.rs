// crates/suggest-core/src/model/raw.rs
use super::City;
use crate::error::{Result, SuggestError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A coordinate as it arrives from the outside: a JSON number or a numeric
/// string such as `"45.50884"`.
///
/// It is turned into an `f64` exactly once, at catalog load or request
/// construction, through [`Coordinate::to_f64`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    /// `true` for an empty or whitespace-only string.
    pub fn is_blank(&self) -> bool {
        match self {
            Coordinate::Number(_) => false,
            Coordinate::Text(s) => s.trim().is_empty(),
        }
    }

    /// Parses the value, rejecting blanks, garbage and non-finite numbers.
    pub fn to_f64(&self) -> Option<f64> {
        let v = match self {
            Coordinate::Number(n) => *n,
            Coordinate::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        v.is_finite().then_some(v)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Number(n) => write!(f, "{n}"),
            Coordinate::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Coordinate {
    fn from(v: f64) -> Self {
        Coordinate::Number(v)
    }
}

impl From<&str> for Coordinate {
    fn from(v: &str) -> Self {
        Coordinate::Text(v.to_owned())
    }
}

impl From<String> for Coordinate {
    fn from(v: String) -> Self {
        Coordinate::Text(v)
    }
}

/// Raw city record as it comes from a JSON catalog.
///
/// ```json
/// { "name": "Montréal, QC, Canada", "ascii": "Montreal",
///   "population": 3268513, "latitude": "45.50884", "longitude": -73.58781 }
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct CityRaw {
    #[serde(alias = "name")]
    pub complete_name: String,
    #[serde(alias = "ascii")]
    pub ascii_name: String,
    pub population: u64,
    #[serde(alias = "lat")]
    pub latitude: Coordinate,
    #[serde(alias = "long", alias = "lng")]
    pub longitude: Coordinate,
}

impl CityRaw {
    /// Parses the coordinates; `line` only feeds the error message.
    pub fn into_city(self, line: usize) -> Result<City> {
        let parse = |c: &Coordinate, what: &str| {
            c.to_f64().ok_or_else(|| SuggestError::DataIntegrity {
                line,
                reason: format!("'{}' has malformed {what} '{c}'", self.complete_name),
            })
        };
        let latitude = parse(&self.latitude, "latitude")?;
        let longitude = parse(&self.longitude, "longitude")?;

        Ok(City {
            complete_name: self.complete_name,
            ascii_name: self.ascii_name,
            population: self.population,
            latitude,
            longitude,
        })
    }
}
