use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for suggest
#[derive(Debug, Parser)]
#[command(
    name = "suggest",
    version,
    about = "Rank cities against a partial name, optionally near a coordinate"
)]
pub struct CliArgs {
    /// Catalog to load: .json[.gz], .tsv[.gz] or a binary cache (default: bundled sample)
    #[arg(short = 'i', long = "input", env = "SUGGEST_CATALOG", global = true)]
    pub input: Option<PathBuf>,

    /// Log more (repeat for more detail); RUST_LOG overrides
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Suggest cities whose name starts with QUERY
    Search {
        /// Partial city name; accents are ignored
        query: String,

        /// Latitude of the point to favour (needs --longitude)
        #[arg(long, allow_hyphen_values = true)]
        latitude: Option<String>,

        /// Longitude of the point to favour (needs --latitude)
        #[arg(long, allow_hyphen_values = true)]
        longitude: Option<String>,

        /// Maximum number of suggestions
        #[arg(short = 'n', long, default_value_t = 10, allow_hyphen_values = true)]
        limit: i64,

        /// Print {"suggestions": [...]} instead of plain lines
        #[arg(long)]
        json: bool,
    },

    /// Show a summary of the catalog
    Stats,

    /// Write the loaded catalog as a binary cache
    Build {
        /// Output path
        output: PathBuf,
    },
}
