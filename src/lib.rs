//! city-suggest-rs
//!
//! Umbrella crate for the workspace; re-exports [`suggest_core`] so the demos
//! can `use city_suggest_rs::prelude::*`.

pub use suggest_core::*;
