//! suggest — command-line front end for suggest-core
//!
//! Usage examples
//! --------------
//!
//! - Suggestions by name
//!   $ suggest search mont
//!
//! - Favour cities near a point
//!   $ suggest search lond --latitude 43.70011 --longitude -79.4163 --limit 3
//!
//! - Use a GeoNames dump instead of the bundled sample
//!   $ suggest --input data/cities_canada-usa.tsv search qué --json
//!
//! - Pre-build a binary cache for fast startup
//!   $ suggest --input data/cities_canada-usa.tsv build data/cities.bin
//!
//! Logs go to stderr; `-v`/`-vv` or `RUST_LOG` raise the level.
use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use suggest_cli::args::{CliArgs, Commands};
use suggest_cli::search::{exit_status, render, EXIT_INVALID_INPUT};
use suggest_core::{Catalog, SuggestionRequest};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(input: Option<&std::path::Path>) -> anyhow::Result<Arc<Catalog>> {
    match input {
        Some(path) => Catalog::load_cached(path)
            .map(Arc::new)
            .with_context(|| format!("loading catalog from {}", path.display())),
        None => Catalog::load().context("loading bundled catalog"),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let catalog = load_catalog(args.input.as_deref())?;
    tracing::debug!(cities = catalog.len(), "catalog ready");

    match args.command {
        Commands::Search {
            query,
            latitude,
            longitude,
            limit,
            json,
        } => {
            let request = SuggestionRequest {
                q: Some(query),
                latitude: latitude.map(Into::into),
                longitude: longitude.map(Into::into),
                limit: Some(limit),
            };
            match render(&catalog, &request, json) {
                Ok(out) => print!("{out}"),
                Err(e) if exit_status(&e) == EXIT_INVALID_INPUT => {
                    eprintln!("error: {e}");
                    return Ok(ExitCode::from(EXIT_INVALID_INPUT));
                }
                Err(e) => return Err(e),
            }
        }

        Commands::Stats => {
            let stats = catalog.stats();
            println!("Catalog statistics:");
            println!("  Cities: {}", stats.cities);
            println!("  Smallest population: {}", stats.min_population);
            println!("  Largest population: {}", stats.max_population);
        }

        Commands::Build { output } => {
            catalog
                .save_as(&output)
                .with_context(|| format!("writing {}", output.display()))?;
            println!("Wrote {} cities to {}", catalog.len(), output.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}
