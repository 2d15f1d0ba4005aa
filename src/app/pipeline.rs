//! Shared "extract" pipeline used by every subcommand.
//!
//! ingest -> decompose each property -> accumulate -> seed -> finalize
//!
//! The subcommands then only deal with presentation (printing, export,
//! completion lookups).

use std::path::Path;

use crate::domain::{EntryKind, Taxonomy};
use crate::error::AppError;
use crate::io::ingest::{EntrySource, ScriptProperties, load_script_properties};
use crate::taxonomy::{RecordStats, TaxonomyAccumulator, decompose};

/// Counters collected while walking the entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub keywords: usize,
    pub datatypes: usize,
    pub properties: usize,
    pub observations: usize,
    pub records: RecordStats,
}

#[derive(Debug, Clone)]
pub struct Extraction {
    pub taxonomy: Taxonomy,
    pub stats: ExtractStats,
}

/// All computed outputs of a single run against a file.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub document: ScriptProperties,
    pub taxonomy: Taxonomy,
    pub stats: ExtractStats,
}

/// Load `input` and build its taxonomy.
///
/// Nothing is returned if the file cannot be read or parsed.
pub fn run_extract(input: &Path) -> Result<RunOutput, AppError> {
    let document = load_script_properties(input)?;
    let Extraction { taxonomy, stats } = extract_taxonomy(&document);
    Ok(RunOutput {
        document,
        taxonomy,
        stats,
    })
}

/// Build a taxonomy from any entry source. Never fails.
pub fn extract_taxonomy(source: &impl EntrySource) -> Extraction {
    let mut acc = TaxonomyAccumulator::new();
    let mut stats = ExtractStats::default();

    for kind in EntryKind::ALL {
        let entries = source.entries(kind);
        match kind {
            EntryKind::Keyword => stats.keywords = entries.len(),
            EntryKind::Datatype => stats.datatypes = entries.len(),
        }
        for entry in entries {
            for prop in &entry.properties {
                stats.properties += 1;
                for obs in decompose(&entry.name, &prop.path, prop.type_tag.as_deref()) {
                    stats.observations += 1;
                    acc.record_observation(&obs);
                }
            }
        }
    }

    acc.seed_boolean();
    stats.records = acc.stats();

    let taxonomy = acc.finalize();
    tracing::info!(
        keys = taxonomy.key_count(),
        observations = stats.observations,
        discarded = stats.records.discarded,
        "taxonomy built"
    );
    Extraction { taxonomy, stats }
}
