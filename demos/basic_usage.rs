//! Basic usage example for city-suggest-rs
//!
//! This example demonstrates how to:
//! - Load the bundled city catalog
//! - Turn a raw request into a validated query
//! - Rank suggestions with and without a reference point

use city_suggest_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== City Suggest Basic Usage Example ===\n");

    println!("Loading bundled catalog...");
    let catalog = Catalog::load()?;
    let stats = catalog.stats();
    println!(
        "✓ {} cities loaded (population {}..={})\n",
        stats.cities, stats.min_population, stats.max_population
    );

    // Example 1: Prefix search, accents ignored
    println!("--- Example 1: 'Montré' ---");
    let query = SuggestionRequest::new("Montré").with_limit(5).to_query()?;
    for hit in catalog.results(&query) {
        println!("  {:.1}  {}", hit.score, hit.name);
    }
    println!();

    // Example 2: Same prefix, favouring cities near Toronto
    println!("--- Example 2: 'Lon' near Toronto ---");
    let query = SuggestionRequest::new("Lon")
        .with_coordinates("43.70011", "-79.4163")
        .with_limit(3)
        .to_query()?;
    for hit in catalog.results(&query) {
        println!("  {:.1}  {} ({}, {})", hit.score, hit.name, hit.latitude, hit.longitude);
    }
    println!();

    // Example 3: JSON envelope, as a web endpoint would answer
    println!("--- Example 3: JSON output ---");
    let query = SuggestionRequest::new("San").with_limit(2).to_query()?;
    let body = Suggestions::from(catalog.results(&query));
    println!(
        "{}",
        serde_json::to_string_pretty(&body).map_err(SuggestError::Json)?
    );

    Ok(())
}
