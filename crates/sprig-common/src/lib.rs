//! Common utilities for the sprig selector engine.
//!
//! This crate provides shared infrastructure used by the other sprig crates:
//! - **Warning System** - deduplicated, colored diagnostics on stderr

pub mod warning;
