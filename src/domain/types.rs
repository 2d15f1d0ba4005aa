//! Shared domain types.
//!
//! These types are kept small and serializable so they can be:
//!
//! - produced by the ingest without any knowledge of the aggregation rules
//! - fed through the decomposer/accumulator in-memory
//! - exported to JSON or rendered as text

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default input file name, resolved against the working directory.
pub const DEFAULT_INPUT: &str = "scriptproperties.xml";

/// Which top-level declaration an entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Keyword,
    Datatype,
}

impl EntryKind {
    /// Ingest order: all keywords first, then all datatypes.
    pub const ALL: [EntryKind; 2] = [EntryKind::Keyword, EntryKind::Datatype];

    /// Element name used in the source document.
    pub fn tag_name(self) -> &'static str {
        match self {
            EntryKind::Keyword => "keyword",
            EntryKind::Datatype => "datatype",
        }
    }
}

/// One `property` declaration below an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDecl {
    /// Dotted path, e.g. `owner.sector.<index>`.
    pub path: String,
    /// Declared value kind, if the document gave one.
    pub type_tag: Option<String>,
}

impl PropertyDecl {
    pub fn new(path: impl Into<String>, type_tag: Option<&str>) -> Self {
        Self {
            path: path.into(),
            type_tag: type_tag.map(str::to_string),
        }
    }
}

/// A named keyword or datatype with the properties declared under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub kind: EntryKind,
    pub name: String,
    pub properties: Vec<PropertyDecl>,
}

/// "`key` was directly followed by `successor` in some declared path."
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Observation {
    pub key: String,
    pub successor: String,
}

impl Observation {
    pub fn new(key: impl Into<String>, successor: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            successor: successor.into(),
        }
    }
}

/// Finalized key -> successor-set mapping.
///
/// Keys and values iterate in sorted order, which is what the renderers rely
/// on for stable output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Taxonomy {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl Taxonomy {
    pub(crate) fn from_map(entries: BTreeMap<String, BTreeSet<String>>) -> Self {
        Self { entries }
    }

    pub fn key_count(&self) -> usize {
        self.entries.len()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn successors(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Settings for a single extraction run.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub input: PathBuf,
    pub export: Option<PathBuf>,
    pub summary: bool,
}

/// Settings for completion lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompleteConfig {
    /// Levels to walk below a matching key.
    pub max_depth: usize,
    /// Minimum length of the typed text before anything is offered.
    pub min_chars: usize,
}

impl Default for CompleteConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            min_chars: 0,
        }
    }
}
