//! Export the finalized taxonomy to JSON.
//!
//! The file is meant for editor tooling and scripts, so values are plain
//! sorted lists rather than the quoted literal printed on stdout.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::Taxonomy;
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct TaxonomyFile<'a> {
    pub tool: &'static str,
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub key_count: usize,
    pub taxonomy: &'a Taxonomy,
}

impl<'a> TaxonomyFile<'a> {
    pub fn new(taxonomy: &'a Taxonomy, source: &Path) -> Self {
        Self {
            tool: "propmap",
            generated_at: Utc::now(),
            source: source.display().to_string(),
            key_count: taxonomy.key_count(),
            taxonomy,
        }
    }
}

/// Write the taxonomy as pretty-printed JSON.
pub fn write_taxonomy_json(path: &Path, taxonomy: &Taxonomy, source: &Path) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create export JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, &TaxonomyFile::new(taxonomy, source))
        .map_err(|e| AppError::input(format!("Failed to write export JSON: {e}")))?;

    tracing::info!(path = %path.display(), keys = taxonomy.key_count(), "wrote taxonomy export");
    Ok(())
}
