//! Error handling example for city-suggest-rs
//!
//! This example demonstrates request validation and catalog integrity checks.

use city_suggest_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== City Suggest Error Handling Example ===\n");

    // Example 1: Loading a catalog that does not exist
    println!("--- Example 1: Missing catalog file ---");
    match Catalog::load_from_path("no/such/cities.json") {
        Ok(_) => println!("  unexpectedly loaded"),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 2: Records the scorer cannot handle are refused up front
    println!("--- Example 2: Zero population ---");
    let bad = vec![
        City::new("Paris", "Paris", 2_000_000, 48.8566, 2.3522),
        City::new("Ghost Town", "Ghost Town", 0, 40.0, -100.0),
    ];
    match Catalog::new(bad) {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 3: Validation verdicts gate the lookup
    println!("--- Example 3: Invalid requests ---");
    let catalog = Catalog::load()?;
    let requests = [
        SuggestionRequest::new(""),
        SuggestionRequest::new("Lon").with_latitude("43.7"),
        SuggestionRequest::new("Lon").with_coordinates("north", "west"),
        SuggestionRequest::new("Lon").with_limit(3),
    ];
    for req in &requests {
        match req.to_query() {
            Ok(query) => println!("✓ {:?} -> {} hits", req.q, catalog.results(&query).len()),
            Err(e) => println!("✗ {:?} -> {e}", req.q),
        }
    }

    Ok(())
}
