//! Formatted terminal output.
//!
//! Formatting lives here so the extraction code stays free of presentation
//! concerns and output changes stay localized.

use std::path::Path;

use crate::app::pipeline::ExtractStats;
use crate::domain::Taxonomy;
use crate::io::ingest::SkippedNode;

/// Render the taxonomy as the key count followed by a braced literal:
///
/// ```text
/// 2
/// {
/// 'boolean': ['false', 'true'] ,
/// 'ship': ['owner'] ,
/// }
/// ```
pub fn format_taxonomy_literal(taxonomy: &Taxonomy) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", taxonomy.key_count()));
    out.push_str("{\n");
    for (key, values) in taxonomy.iter() {
        let items: Vec<String> = values.iter().map(|v| quote(v)).collect();
        out.push_str(&format!("{}: [{}] ,\n", quote(key), items.join(", ")));
    }
    out.push('}');
    out
}

/// Format the ingest/extraction summary printed by `dump --summary`.
pub fn format_run_summary(input: &Path, stats: &ExtractStats, skipped: &[SkippedNode], key_count: usize) -> String {
    let mut out = String::new();

    out.push_str("=== propmap - script property taxonomy ===\n");
    out.push_str(&format!("Input: {}\n", input.display()));
    out.push_str(&format!(
        "Entries: keywords={} datatypes={} | properties={}\n",
        stats.keywords, stats.datatypes, stats.properties
    ));

    out.push_str(&format!("Skipped nodes: {}\n", skipped.len()));
    for node in skipped {
        out.push_str(&format!("  line {:>5} <{}> {}\n", node.line, node.element, node.message));
    }

    out.push_str(&format!(
        "Observations: emitted={} | inserted={} duplicate={} discarded={}\n",
        stats.observations, stats.records.inserted, stats.records.duplicates, stats.records.discarded
    ));
    out.push_str(&format!("Keys: {key_count}\n"));

    out
}

/// One candidate per line.
pub fn format_completions(candidates: &[String]) -> String {
    candidates.join("\n")
}

fn quote(token: &str) -> String {
    let mut out = String::with_capacity(token.len() + 2);
    out.push('\'');
    for ch in token.chars() {
        if ch == '\'' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{RecordStats, TaxonomyAccumulator};

    #[test]
    fn literal_lists_sorted_keys_and_values() {
        let mut acc = TaxonomyAccumulator::new();
        acc.record("ship", "owner");
        acc.record("ship", "hull");
        acc.record("name", "string");
        acc.seed_boolean();
        let text = format_taxonomy_literal(&acc.finalize());

        let expected = "3\n{\n'boolean': ['false', 'true'] ,\n'name': [''] ,\n'ship': ['hull', 'owner'] ,\n}";
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_key_renders_as_empty_quotes() {
        let mut acc = TaxonomyAccumulator::new();
        acc.record("", "b");
        let text = format_taxonomy_literal(&acc.finalize());
        assert!(text.contains("'': ['b'] ,"));
    }

    #[test]
    fn quotes_are_escaped() {
        assert_eq!(quote("it's"), r"'it\'s'");
        assert_eq!(quote(r"a\b"), r"'a\\b'");
    }

    #[test]
    fn summary_lists_skipped_nodes() {
        let stats = ExtractStats {
            keywords: 2,
            datatypes: 1,
            properties: 5,
            observations: 9,
            records: RecordStats {
                inserted: 6,
                duplicates: 2,
                discarded: 1,
            },
        };
        let skipped = vec![SkippedNode {
            line: 12,
            element: "keyword".to_string(),
            message: "missing `name` attribute; entry ignored".to_string(),
        }];
        let text = format_run_summary(Path::new("scriptproperties.xml"), &stats, &skipped, 4);
        assert!(text.contains("keywords=2 datatypes=1 | properties=5"));
        assert!(text.contains("Skipped nodes: 1"));
        assert!(text.contains("line    12 <keyword>"));
        assert!(text.contains("discarded=1"));
        assert!(text.ends_with("Keys: 4\n"));
    }
}
