// crates/suggest-core/src/request.rs
use crate::error::ValidationError;
use crate::geo::GeoPoint;
use crate::model::Coordinate;
use crate::text::{char_len, transliterate};
use serde::Deserialize;

/// A lookup as the caller sent it, before any checking.
///
/// Shaped like the query string of a suggestion endpoint, so it can be
/// deserialized straight from one:
///
/// ```rust
/// use suggest_core::SuggestionRequest;
///
/// let req: SuggestionRequest =
///     serde_json::from_str(r#"{"q":"Lond","latitude":"43.70011","longitude":-79.4163,"limit":5}"#)
///         .unwrap();
/// assert!(req.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SuggestionRequest {
    pub q: Option<String>,
    pub latitude: Option<Coordinate>,
    pub longitude: Option<Coordinate>,
    pub limit: Option<i64>,
}

impl SuggestionRequest {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            ..Self::default()
        }
    }

    pub fn with_latitude(mut self, latitude: impl Into<Coordinate>) -> Self {
        self.latitude = Some(latitude.into());
        self
    }

    pub fn with_longitude(mut self, longitude: impl Into<Coordinate>) -> Self {
        self.longitude = Some(longitude.into());
        self
    }

    pub fn with_coordinates(self, latitude: impl Into<Coordinate>, longitude: impl Into<Coordinate>) -> Self {
        self.with_latitude(latitude).with_longitude(longitude)
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Checks that a query is present and that coordinates come in pairs.
    ///
    /// A blank coordinate counts as absent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.q.as_deref().map_or(true, |q| q.trim().is_empty()) {
            return Err(ValidationError::MissingQuery);
        }
        if present(&self.latitude) != present(&self.longitude) {
            return Err(ValidationError::InconsistentCoordinates);
        }
        Ok(())
    }

    /// Validates the request and turns it into a [`Query`] the engine accepts.
    ///
    /// On top of [`validate`](Self::validate) this parses and range-checks
    /// the coordinates and rejects queries whose transliteration is empty.
    pub fn to_query(&self) -> Result<Query, ValidationError> {
        self.validate()?;

        let mut query = Query::new(self.q.as_deref().unwrap_or_default())?;

        if let (Some(lat), Some(lon)) = (&self.latitude, &self.longitude) {
            if !lat.is_blank() {
                query = query.with_origin(parse_point(lat, lon)?);
            }
        }

        let limit = self.limit.unwrap_or(0).max(0);
        Ok(query.with_limit(usize::try_from(limit).unwrap_or(usize::MAX)))
    }
}

fn present(c: &Option<Coordinate>) -> bool {
    c.as_ref().is_some_and(|c| !c.is_blank())
}

fn parse_point(lat: &Coordinate, lon: &Coordinate) -> Result<GeoPoint, ValidationError> {
    let parse = |c: &Coordinate| {
        c.to_f64()
            .ok_or_else(|| ValidationError::InvalidCoordinate(c.to_string()))
    };
    let point = GeoPoint::new(parse(lat)?, parse(lon)?);
    if !point.is_valid() {
        return Err(ValidationError::InvalidCoordinate(format!("{lat}, {lon}")));
    }
    Ok(point)
}

/// A validated, normalized lookup.
///
/// The only way into [`results`](crate::search::results). Its text is never
/// empty, so the matcher never sees a zero-length prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    text: String,
    text_len: usize,
    origin: Option<GeoPoint>,
    limit: usize,
}

impl Query {
    /// Normalizes `raw` (trimmed, transliterated to ASCII, case kept).
    ///
    /// The limit starts at 0, which yields no results until
    /// [`with_limit`](Self::with_limit) raises it.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let text = transliterate(raw.trim());
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::MissingQuery);
        }
        Ok(Self {
            text_len: char_len(text),
            text: text.to_owned(),
            origin: None,
            limit: 0,
        })
    }

    pub fn with_origin(mut self, origin: GeoPoint) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// The normalized query text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn text_len(&self) -> usize {
        self.text_len
    }

    pub fn origin(&self) -> Option<GeoPoint> {
        self.origin
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
