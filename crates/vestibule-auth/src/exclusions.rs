//! Path exemption guard for the authentication layer.
//!
//! Exclusion entries come from static configuration at process start and are
//! never mutated afterwards. Matching is fail-closed: an empty list or an
//! empty path always requires authentication.

use thiserror::Error;

/// Marker that turns a configured entry into a prefix pattern.
const WILDCARD: char = '*';

/// Errors produced while parsing configured exclusion entries.
///
/// These are the only fatal errors in the crate; they surface at startup and
/// never on a request path.
#[derive(Debug, Error)]
pub enum ExclusionError {
    /// Entry was empty after trimming.
    #[error("empty exclusion entry")]
    Empty,
    /// Entry did not start with `/`.
    #[error("exclusion entry '{entry}' must start with '/'")]
    NotRooted {
        /// Offending entry text.
        entry: String,
    },
    /// Wildcard marker appeared anywhere but the final position.
    #[error("exclusion entry '{entry}' may only carry '*' as its final character")]
    WildcardPosition {
        /// Offending entry text.
        entry: String,
    },
}

/// A single validated exclusion pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionEntry {
    /// Matches on slash-normalised equality. Stored pre-normalised.
    Exact(String),
    /// Matches any path starting with the stored prefix. The prefix is the
    /// raw configured text with the wildcard marker stripped.
    Prefix(String),
}

impl ExclusionEntry {
    /// Parse one configured pattern, validating the wildcard position.
    ///
    /// # Errors
    ///
    /// Returns an error when the entry is empty, not rooted at `/`, or uses
    /// the wildcard marker anywhere but the final position.
    pub fn parse(raw: &str) -> Result<Self, ExclusionError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ExclusionError::Empty);
        }
        if !raw.starts_with('/') {
            return Err(ExclusionError::NotRooted {
                entry: raw.to_string(),
            });
        }
        match raw.find(WILDCARD) {
            None => Ok(Self::Exact(normalize(raw))),
            Some(index) if index == raw.len() - 1 => {
                Ok(Self::Prefix(raw[..index].to_string()))
            }
            Some(_) => Err(ExclusionError::WildcardPosition {
                entry: raw.to_string(),
            }),
        }
    }

    fn matches(&self, path: &str) -> bool {
        match self {
            // Exact entries compare on the normalised form, so a trailing
            // slash on either side is irrelevant.
            Self::Exact(entry) => normalize(path) == *entry,
            // Prefix entries compare against the raw path, before any
            // trailing-slash normalisation.
            Self::Prefix(prefix) => path.starts_with(prefix.as_str()),
        }
    }
}

/// Unordered set of exclusion patterns exempt from authentication.
#[derive(Debug, Clone, Default)]
pub struct ExclusionList {
    entries: Vec<ExclusionEntry>,
}

impl ExclusionList {
    /// Parse an ordered sequence of configured patterns.
    ///
    /// Order carries no meaning for matching; any entry exempts.
    ///
    /// # Errors
    ///
    /// Returns the first [`ExclusionError`] encountered; a malformed entry is
    /// a startup-fatal configuration error.
    pub fn parse<'a, I>(raw_entries: I) -> Result<Self, ExclusionError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let entries = raw_entries
            .into_iter()
            .map(ExclusionEntry::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    /// Build a list from entries that were validated individually.
    #[must_use]
    pub fn from_entries(entries: Vec<ExclusionEntry>) -> Self {
        Self { entries }
    }

    /// Whether the list holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the given request path requires authentication.
    ///
    /// Fail-closed: an empty list or an empty path requires auth. A pure
    /// function of its inputs with no error paths.
    #[must_use]
    pub fn requires_auth(&self, path: &str) -> bool {
        if self.entries.is_empty() || path.is_empty() {
            return true;
        }
        !self.entries.iter().any(|entry| entry.matches(path))
    }
}

/// Treat a path as if terminated by exactly one trailing `/`.
fn normalize(path: &str) -> String {
    let mut normalized = path.trim_end_matches('/').to_string();
    normalized.push('/');
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(entries: &[&str]) -> ExclusionList {
        ExclusionList::parse(entries.iter().copied()).expect("entries should parse")
    }

    #[test]
    fn empty_list_requires_auth_for_every_path() {
        let exclusions = ExclusionList::default();
        assert!(exclusions.requires_auth("/api/v1/status"));
        assert!(exclusions.requires_auth("/"));
        assert!(exclusions.requires_auth(""));
    }

    #[test]
    fn empty_path_requires_auth_even_with_entries() {
        let exclusions = list(&["/api/v1/status"]);
        assert!(exclusions.requires_auth(""));
    }

    #[test]
    fn exact_entry_matches_with_and_without_trailing_slash() {
        let exclusions = list(&["/api/v1/status/"]);
        assert!(!exclusions.requires_auth("/api/v1/status"));
        assert!(!exclusions.requires_auth("/api/v1/status/"));
        assert!(exclusions.requires_auth("/api/v1/stats"));
    }

    #[test]
    fn exact_entry_without_trailing_slash_matches_slashed_path() {
        let exclusions = list(&["/api/v1/status"]);
        assert!(!exclusions.requires_auth("/api/v1/status/"));
    }

    #[test]
    fn prefix_entry_exempts_everything_under_it() {
        let exclusions = list(&["/admin/*"]);
        assert!(!exclusions.requires_auth("/admin/metrics"));
        assert!(!exclusions.requires_auth("/admin/metrics/hourly"));
        assert!(!exclusions.requires_auth("/admin/"));
    }

    #[test]
    fn prefix_entry_rejects_deceptively_similar_paths() {
        let exclusions = list(&["/admin/*"]);
        assert!(exclusions.requires_auth("/adminX"));
        assert!(exclusions.requires_auth("/admin"));
    }

    #[test]
    fn any_match_exempts_regardless_of_order() {
        let forward = list(&["/api/v1/status", "/admin/*"]);
        let reverse = list(&["/admin/*", "/api/v1/status"]);
        for path in ["/api/v1/status", "/admin/tasks"] {
            assert_eq!(forward.requires_auth(path), reverse.requires_auth(path));
            assert!(!forward.requires_auth(path));
        }
    }

    #[test]
    fn repeated_calls_yield_identical_answers() {
        let exclusions = list(&["/api/v1/status"]);
        let first = exclusions.requires_auth("/api/v1/status");
        let second = exclusions.requires_auth("/api/v1/status");
        assert_eq!(first, second);
    }

    #[test]
    fn from_entries_matches_like_a_parsed_list() {
        let entries = ["/api/v1/status", "/admin/*"]
            .iter()
            .map(|entry| ExclusionEntry::parse(entry).expect("entry should parse"))
            .collect();
        let exclusions = ExclusionList::from_entries(entries);
        assert!(!exclusions.requires_auth("/api/v1/status/"));
        assert!(!exclusions.requires_auth("/admin/tasks"));
        assert!(exclusions.requires_auth("/api/v1/users"));
    }

    #[test]
    fn parse_rejects_empty_entry() {
        let err = ExclusionEntry::parse("  ").unwrap_err();
        assert!(matches!(err, ExclusionError::Empty));
    }

    #[test]
    fn parse_rejects_unrooted_entry() {
        let err = ExclusionEntry::parse("api/v1/status").unwrap_err();
        assert!(matches!(err, ExclusionError::NotRooted { .. }));
    }

    #[test]
    fn parse_rejects_interior_wildcard() {
        let err = ExclusionEntry::parse("/api/*/status").unwrap_err();
        assert!(matches!(err, ExclusionError::WildcardPosition { .. }));
    }

    #[test]
    fn parse_accepts_trailing_wildcard() {
        let entry = ExclusionEntry::parse("/admin/*").expect("wildcard entry should parse");
        assert_eq!(entry, ExclusionEntry::Prefix("/admin/".to_string()));
    }
}
