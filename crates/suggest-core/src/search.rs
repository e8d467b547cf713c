// crates/suggest-core/src/search.rs
use crate::error::ValidationError;
use crate::model::{Catalog, City};
use crate::request::{Query, SuggestionRequest};
use crate::score::Scorer;
use crate::text::starts_with_ignore_ascii_case;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// One ranked suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMatch {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Composite score, one decimal.
    pub score: f64,
}

/// Response envelope: `{"suggestions": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestions {
    pub suggestions: Vec<ScoredMatch>,
}

impl From<Vec<ScoredMatch>> for Suggestions {
    fn from(suggestions: Vec<ScoredMatch>) -> Self {
        Self { suggestions }
    }
}

/// The lookup operations available on a catalog.
pub trait CitySuggest {
    /// Cities whose ascii name starts with the query text, ignoring ASCII
    /// case, in catalog order.
    fn matches<'a>(&'a self, query: &Query) -> Vec<&'a City>;

    /// Scored, ranked and truncated matches.
    ///
    /// Ordered by score descending, then by display name ascending; at most
    /// `query.limit()` entries.
    fn results(&self, query: &Query) -> Vec<ScoredMatch>;
}

impl CitySuggest for Catalog {
    fn matches<'a>(&'a self, query: &Query) -> Vec<&'a City> {
        let prefix = query.text();
        self.cities()
            .iter()
            .filter(|city| starts_with_ignore_ascii_case(city.ascii_name(), prefix))
            .collect()
    }

    fn results(&self, query: &Query) -> Vec<ScoredMatch> {
        if query.limit() == 0 {
            return Vec::new();
        }

        let scorer = Scorer::new(query, self.min_population());
        let scored = self
            .matches(query)
            .into_iter()
            .map(|city| ScoredMatch {
                name: city.name().to_owned(),
                latitude: city.latitude,
                longitude: city.longitude,
                score: scorer.score(city),
            })
            .collect();

        let out = rank(scored, query.limit());
        trace!(query = query.text(), hits = out.len(), "suggestions computed");
        out
    }
}

/// Sorts by score descending with name ascending as the second key, then
/// keeps the first `limit` entries.
pub fn rank(mut matches: Vec<ScoredMatch>, limit: usize) -> Vec<ScoredMatch> {
    matches.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.name.cmp(&b.name))
    });
    matches.truncate(limit);
    matches
}

/// Ranked suggestions for a validated query.
///
/// ```rust
/// use suggest_core::{results, Catalog, City, SuggestionRequest};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = Catalog::new(vec![City::new("Munich", "Munich", 1_500_000, 48.137, 11.575)])?;
/// let query = SuggestionRequest::new("Münich").with_limit(1).to_query()?;
/// assert_eq!(results(&catalog, &query)[0].name, "Munich");
/// # Ok(()) }
/// ```
pub fn results(catalog: &Catalog, query: &Query) -> Vec<ScoredMatch> {
    catalog.results(query)
}

/// Advisory check; see [`SuggestionRequest::validate`].
pub fn validate(request: &SuggestionRequest) -> Result<(), ValidationError> {
    request.validate()
}
