//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - ingest records (`EntryKind`, `Entry`, `PropertyDecl`)
//! - the core's unit of work (`Observation`)
//! - the finalized output (`Taxonomy`)
//! - run settings (`ExtractConfig`, `CompleteConfig`)

pub mod types;

pub use types::*;
