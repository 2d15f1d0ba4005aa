//! Dotted-path decomposition.
//!
//! A declared path such as `owner.sector.<index>.name` is turned into a chain
//! of "key -> successor" observations, starting from the entry that declared
//! it:
//!
//! ```text
//! Ship.owner, owner.sector, sector."" (wildcard), "".name
//! ```
//!
//! Marker detection is plain substring matching on each segment. Unbalanced
//! markers are classified by whatever characters they happen to contain.

use crate::domain::Observation;

/// Raw placeholder syntax stripped from every key and value.
const STRIP_OPEN: &str = "{$";
const STRIP_CLOSE: char = '}';

/// How a single path segment affects the running key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// `<index>`-style slot: terminates the chain and resets the running key.
    Wildcard,
    /// `${var}`-style slot: kept as an opaque key.
    Placeholder,
    Plain,
}

/// Classify a segment. Wildcards win over placeholders.
pub fn classify(segment: &str) -> SegmentKind {
    if segment.contains('<') || segment.contains('>') {
        SegmentKind::Wildcard
    } else if segment.contains("${") || segment.contains('}') {
        SegmentKind::Placeholder
    } else {
        SegmentKind::Plain
    }
}

/// Strip `{$` and `}` from `raw`.
///
/// Runs to a fixpoint so that `clean(clean(s)) == clean(s)` holds even for
/// nested input like `{{$$`.
pub fn clean(raw: &str) -> String {
    let mut out: String = raw.chars().filter(|&c| c != STRIP_CLOSE).collect();
    while out.contains(STRIP_OPEN) {
        out = out.replace(STRIP_OPEN, "");
    }
    out
}

/// Decompose one property declaration of `entry_name`.
///
/// An empty path yields no observations, type tag or not. Otherwise a type
/// tag is attached to the last segment of the path, even when that segment
/// is a wildcard that reset the running key.
pub fn decompose(entry_name: &str, dotted_path: &str, type_tag: Option<&str>) -> Vec<Observation> {
    if dotted_path.is_empty() {
        return Vec::new();
    }

    let segments: Vec<String> = dotted_path.split('.').map(clean).collect();
    let mut out = Vec::with_capacity(segments.len() + 1);
    let mut current = clean(entry_name);

    for (raw, segment) in dotted_path.split('.').zip(&segments) {
        match classify(raw) {
            SegmentKind::Wildcard => {
                out.push(Observation::new(current, ""));
                current = String::new();
            }
            // Same effect as `Plain` today; kept apart so the two slot styles
            // can diverge without touching the plain-segment path.
            SegmentKind::Placeholder => {
                out.push(Observation::new(current, segment.clone()));
                current = segment.clone();
            }
            SegmentKind::Plain => {
                out.push(Observation::new(current, segment.clone()));
                current = segment.clone();
            }
        }
    }

    if let (Some(tag), Some(last)) = (type_tag, segments.last()) {
        out.push(Observation::new(last.clone(), clean(tag)));
    }

    out
}
