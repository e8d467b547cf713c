//! suggest-cli
//! ===========
//!
//! Command-line interface for the `suggest-core` city suggestion engine.
//!
//! The binary (`suggest`) is the primary deliverable; this library target
//! exposes the argument definitions so they can be tested.
//!
//! ```text
//! suggest search Mont --limit 5
//! suggest search Lond --latitude 43.70011 --longitude -79.4163 --json
//! suggest --input cities_canada-usa.tsv stats
//! suggest --input cities_canada-usa.tsv build cities.bin
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;
pub mod search;
