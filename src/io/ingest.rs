//! Script-properties ingest.
//!
//! This module turns the XML document into plain `Entry` records and knows
//! nothing about how paths are aggregated.
//!
//! - entries are every `keyword` / `datatype` element, in document order
//! - properties are every `property` element at any depth under an entry
//! - nodes without a `name` are skipped and reported, never passed on

use std::fs;
use std::path::Path;

use roxmltree::{Document, Node, ParsingOptions};

use crate::domain::{Entry, EntryKind, PropertyDecl};
use crate::error::AppError;

/// Source of entries for the extraction pipeline.
pub trait EntrySource {
    /// All entries of `kind`, in document order.
    fn entries(&self, kind: EntryKind) -> &[Entry];
}

/// A node dropped during ingest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedNode {
    pub line: u32,
    pub element: String,
    pub message: String,
}

/// Parsed script-properties document.
#[derive(Debug, Clone, Default)]
pub struct ScriptProperties {
    pub keywords: Vec<Entry>,
    pub datatypes: Vec<Entry>,
    pub skipped: Vec<SkippedNode>,
}

impl EntrySource for ScriptProperties {
    fn entries(&self, kind: EntryKind) -> &[Entry] {
        match kind {
            EntryKind::Keyword => &self.keywords,
            EntryKind::Datatype => &self.datatypes,
        }
    }
}

impl ScriptProperties {
    pub fn property_count(&self) -> usize {
        self.keywords
            .iter()
            .chain(&self.datatypes)
            .map(|e| e.properties.len())
            .sum()
    }
}

/// Read and parse a script-properties file.
pub fn load_script_properties(path: &Path) -> Result<ScriptProperties, AppError> {
    let text = fs::read_to_string(path).map_err(|e| {
        AppError::input(format!("Failed to read '{}': {e}", path.display()))
    })?;
    parse_script_properties(&text)
        .map_err(|e| AppError::input(format!("{}: {}", path.display(), e.message())))
}

/// Parse a script-properties document held in memory.
pub fn parse_script_properties(text: &str) -> Result<ScriptProperties, AppError> {
    let opts = ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = Document::parse_with_options(text, opts)
        .map_err(|e| AppError::input(format!("Invalid XML: {e}")))?;

    let mut out = ScriptProperties::default();
    for kind in EntryKind::ALL {
        let mut entries = Vec::new();
        for node in doc
            .descendants()
            .filter(|n| n.is_element() && n.has_tag_name(kind.tag_name()))
        {
            if let Some(entry) = read_entry(&doc, node, kind, &mut out.skipped) {
                entries.push(entry);
            }
        }
        match kind {
            EntryKind::Keyword => out.keywords = entries,
            EntryKind::Datatype => out.datatypes = entries,
        }
    }

    tracing::debug!(
        keywords = out.keywords.len(),
        datatypes = out.datatypes.len(),
        properties = out.property_count(),
        skipped = out.skipped.len(),
        "parsed script properties"
    );
    Ok(out)
}

fn read_entry(doc: &Document, node: Node, kind: EntryKind, skipped: &mut Vec<SkippedNode>) -> Option<Entry> {
    let Some(name) = node.attribute("name") else {
        skip(doc, node, "missing `name` attribute; entry ignored", skipped);
        return None;
    };

    let mut properties = Vec::new();
    for prop in node
        .descendants()
        .filter(|n| n.is_element() && n.has_tag_name("property"))
    {
        match prop.attribute("name") {
            Some(path) => properties.push(PropertyDecl::new(path, prop.attribute("type"))),
            None => skip(doc, prop, &format!("missing `name` attribute under {} '{name}'", kind.tag_name()), skipped),
        }
    }

    tracing::debug!(kind = kind.tag_name(), name, properties = properties.len(), "read entry");
    Some(Entry {
        kind,
        name: name.to_string(),
        properties,
    })
}

fn skip(doc: &Document, node: Node, message: &str, skipped: &mut Vec<SkippedNode>) {
    let line = doc.text_pos_at(node.range().start).row;
    let element = node.tag_name().name().to_string();
    tracing::warn!(line, element = %element, "{message}");
    skipped.push(SkippedNode {
        line,
        element,
        message: message.to_string(),
    });
}
