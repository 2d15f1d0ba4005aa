//! Dotted-path completion over a finalized taxonomy.
//!
//! Given the text typed so far, we take the trailing fragment (after the last
//! `.`, space or tab), find every key containing it, and walk successors from
//! each match:
//!
//! ```text
//! "ship.own" -> fragment "own" -> key "owner"
//!   owner, owner.name, owner.sector, owner.sector.<successors of sector>, ...
//! ```

use std::collections::BTreeSet;

use crate::domain::{CompleteConfig, Taxonomy};

/// Trailing fragment of `typed` that completion works on.
pub fn completion_fragment(typed: &str) -> &str {
    let begin = typed
        .rfind('.')
        .or_else(|| typed.rfind(' '))
        .or_else(|| typed.rfind('\t'));
    match begin {
        Some(idx) => &typed[idx + 1..],
        None => typed,
    }
}

/// Sorted, deduplicated candidates for `typed`.
pub fn complete(taxonomy: &Taxonomy, typed: &str, config: &CompleteConfig) -> Vec<String> {
    if typed.chars().count() < config.min_chars {
        return Vec::new();
    }

    let fragment = completion_fragment(typed);
    let mut out = BTreeSet::new();
    for key in taxonomy.keys().filter(|k| k.contains(fragment)) {
        walk(taxonomy, key, key.to_string(), 0, config.max_depth, &mut out);
    }
    out.into_iter().collect()
}

fn walk(taxonomy: &Taxonomy, key: &str, prefix: String, depth: usize, max_depth: usize, out: &mut BTreeSet<String>) {
    if depth >= max_depth {
        if !prefix.is_empty() {
            out.insert(prefix);
        }
        return;
    }

    if let Some(successors) = taxonomy.successors(key) {
        for next in successors.iter().filter(|s| !s.is_empty()) {
            let candidate = if prefix.is_empty() {
                next.clone()
            } else {
                format!("{prefix}.{next}")
            };
            walk(taxonomy, next, candidate, depth + 1, max_depth, out);
        }
    }

    if !prefix.is_empty() {
        out.insert(prefix);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::TaxonomyAccumulator;

    fn sample() -> Taxonomy {
        let mut acc = TaxonomyAccumulator::new();
        for (k, v) in [
            ("ship", "owner"),
            ("owner", "name"),
            ("owner", "sector"),
            ("sector", "zone"),
            ("zone", "cluster"),
            ("name", "string"),
            ("", "idx"),
        ] {
            acc.record(k, v);
        }
        acc.finalize()
    }

    #[test]
    fn fragment_prefers_dot_then_space_then_tab() {
        assert_eq!(completion_fragment("a.b c.own"), "own");
        assert_eq!(completion_fragment("foo own"), "own");
        assert_eq!(completion_fragment("foo\town"), "own");
        assert_eq!(completion_fragment("own"), "own");
        assert_eq!(completion_fragment("ship."), "");
    }

    #[test]
    fn walks_successors_up_to_depth() {
        let got = complete(&sample(), "ship.own", &CompleteConfig::default());
        assert_eq!(
            got,
            vec![
                "owner",
                "owner.name",
                "owner.sector",
                "owner.sector.zone",
                "owner.sector.zone.cluster",
            ]
        );
    }

    #[test]
    fn depth_limit_stops_the_walk() {
        let config = CompleteConfig {
            max_depth: 1,
            ..CompleteConfig::default()
        };
        let got = complete(&sample(), "sect", &config);
        assert_eq!(got, vec!["sector", "sector.zone"]);
    }

    #[test]
    fn empty_key_is_never_a_candidate() {
        // A trailing dot matches every key, the empty one included.
        let got = complete(&sample(), "ship.", &CompleteConfig::default());
        assert!(got.iter().all(|c| !c.is_empty()));
        assert!(got.contains(&"idx".to_string()));
    }

    #[test]
    fn short_input_yields_nothing() {
        let config = CompleteConfig {
            min_chars: 4,
            ..CompleteConfig::default()
        };
        assert!(complete(&sample(), "own", &config).is_empty());
        assert!(!complete(&sample(), "owne", &config).is_empty());
    }
}
