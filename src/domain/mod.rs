//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `wire.rs` — Raw serde structs matching backend responses
//! - supporting types for that slice (e.g. the currency code set)

pub mod rates;
