//! Common utilities for the Woodstock markup writer.
//!
//! This crate provides shared infrastructure used by the markup crates:
//! - **Warning System** - deduplicated diagnostics routed through `tracing`
//! - **Charsets** - resolution of declared character-encoding labels

pub mod charset;
pub mod warning;
