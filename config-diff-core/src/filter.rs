//! Key-level comparison gating.

/// Key substrings that never participate in comparison, regardless of caller
/// configuration. Certificate bodies and embedded images are bulky, opaque,
/// and routinely differ between otherwise identical devices.
const REDACTED_SUBSTRINGS: &[&str] = &["image-base64", "vpn certificate"];

/// Decides whether a key participates in comparison.
///
/// Pure predicate consulted by the differ; neither tree is ever mutated.
/// Matching is substring, case-sensitive, against the key token only.
#[derive(Debug, Clone, Default)]
pub struct KeyFilter {
    ignore_substrings: Vec<String>,
}

impl KeyFilter {
    /// Build a filter from caller-supplied ignore substrings.
    pub fn new<I, S>(ignore_substrings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignore_substrings: ignore_substrings.into_iter().map(Into::into).collect(),
        }
    }

    /// Return true when the key should be compared.
    pub fn should_compare(&self, key: &str) -> bool {
        if REDACTED_SUBSTRINGS.iter().any(|s| key.contains(s)) {
            return false;
        }
        !self
            .ignore_substrings
            .iter()
            .any(|s| key.contains(s.as_str()))
    }
}
