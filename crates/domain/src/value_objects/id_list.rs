//! Identifier lists: one delimited string or a sequence of ids

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest number of identifiers most bus parameters accept
pub const MAX_IDENTIFIERS: usize = 10;

/// One or more identifiers as supplied by the caller
///
/// Callers may pass either a comma-delimited string (`"20,X20"`) or a
/// sequence (`["20", "X20"]`). Cardinality checks count list items or
/// comma-separated segments; the query parameter is always the joined form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdList {
    /// Comma-delimited string, kept verbatim
    Delimited(String),
    /// Individual identifiers
    List(Vec<String>),
}

impl IdList {
    /// Number of identifiers
    ///
    /// A delimited string counts its comma-separated segments, so `""`
    /// counts as one (empty) segment.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::Delimited(text) => text.split(',').count(),
            Self::List(ids) => ids.len(),
        }
    }

    /// Comma-joined query parameter value
    #[must_use]
    pub fn joined(&self) -> String {
        match self {
            Self::Delimited(text) => text.clone(),
            Self::List(ids) => ids.join(","),
        }
    }

    /// True if no identifier text was supplied at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Delimited(text) => text.is_empty(),
            Self::List(ids) => ids.is_empty(),
        }
    }

    /// True if exactly one identifier was supplied
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.count() == 1
    }
}

impl From<&str> for IdList {
    fn from(value: &str) -> Self {
        Self::Delimited(value.to_string())
    }
}

impl From<String> for IdList {
    fn from(value: String) -> Self {
        Self::Delimited(value)
    }
}

impl From<&String> for IdList {
    fn from(value: &String) -> Self {
        Self::Delimited(value.clone())
    }
}

impl From<Vec<String>> for IdList {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for IdList {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for IdList {
    fn from(value: &[&str]) -> Self {
        Self::List(value.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for IdList {
    fn from(value: [&str; N]) -> Self {
        Self::List(value.iter().map(|s| (*s).to_string()).collect())
    }
}

impl fmt::Display for IdList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimited_counts_segments() {
        let ids = IdList::from("1,2,3");
        assert_eq!(ids.count(), 3);
        assert_eq!(ids.joined(), "1,2,3");
    }

    #[test]
    fn list_counts_items_and_joins() {
        let ids = IdList::from(vec!["20", "X20"]);
        assert_eq!(ids.count(), 2);
        assert_eq!(ids.joined(), "20,X20");
    }

    #[test]
    fn single_identifier() {
        assert!(IdList::from("20").is_single());
        assert!(IdList::from(["20"]).is_single());
        assert!(!IdList::from("20,21").is_single());
    }

    #[test]
    fn emptiness() {
        assert!(IdList::from("").is_empty());
        assert!(IdList::from(Vec::<String>::new()).is_empty());
        assert!(!IdList::from("9").is_empty());
    }

    #[test]
    fn deserializes_both_shapes() {
        let a: IdList = serde_json::from_str("\"1,2\"").unwrap();
        let b: IdList = serde_json::from_str("[\"1\",\"2\"]").unwrap();
        assert_eq!(a.joined(), b.joined());
    }
}
