use anyhow::Context;
use std::fmt::Write;
use suggest_core::{Catalog, CitySuggest, SuggestionRequest, Suggestions, ValidationError};

/// Exit status for a request rejected by validation.
pub const EXIT_INVALID_INPUT: u8 = 2;
/// Exit status for every other failure.
pub const EXIT_FAILURE: u8 = 1;

/// Runs `request` against `catalog` and renders what `suggest search` prints.
///
/// Validation failures come back as a [`ValidationError`] inside the
/// `anyhow::Error`; see [`exit_status`].
pub fn render(catalog: &Catalog, request: &SuggestionRequest, json: bool) -> anyhow::Result<String> {
    let query = request.to_query()?;
    let hits = catalog.results(&query);

    if json {
        return serde_json::to_string_pretty(&Suggestions::from(hits))
            .map(|mut s| {
                s.push('\n');
                s
            })
            .context("serializing suggestions");
    }
    if hits.is_empty() {
        return Ok(format!("No cities found matching: {}\n", query.text()));
    }

    let mut out = String::new();
    for h in hits {
        writeln!(out, "{:.1}  {} ({}, {})", h.score, h.name, h.latitude, h.longitude)?;
    }
    Ok(out)
}

/// Maps an error from [`render`] to the process exit status.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<ValidationError>().is_some() {
        EXIT_INVALID_INPUT
    } else {
        EXIT_FAILURE
    }
}
