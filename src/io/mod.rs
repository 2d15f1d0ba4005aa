//! Input/output helpers.
//!
//! - script-properties XML ingest (`ingest`)
//! - taxonomy JSON export (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
