//! `propmap` library crate.
//!
//! Builds a taxonomy of dotted script-property paths: for every path segment,
//! the set of segments, literals or type tags seen right after it.
//!
//! The binary (`propmap`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the taxonomy can be reused by editor tooling directly

pub mod app;
pub mod cli;
pub mod complete;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
pub mod taxonomy;
