// SPDX-License-Identifier: MIT OR Apache-2.0

//! The set of override tags active during a load.
//!
//! A key written as `name<staging>` only takes effect when `staging` is in the
//! active set, in which case it is stored as plain `name`.

use std::collections::HashSet;

/// Caller-supplied identifiers that select override-qualified entries.
///
/// The set is consulted while parsing and is not retained by the loaded store.
///
/// # Examples
///
/// ```
/// use inicfg::domain::OverrideTags;
///
/// let tags: OverrideTags = ["staging", "eu"].into_iter().collect();
/// assert!(tags.contains("staging"));
/// assert!(!tags.contains("prod"));
/// assert!(OverrideTags::none().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverrideTags(HashSet<String>);

impl OverrideTags {
    /// Creates an empty set; no override-qualified entry will be selected.
    pub fn none() -> Self {
        Self::default()
    }

    /// Adds a tag to the set.
    pub fn insert(&mut self, tag: impl Into<String>) {
        self.0.insert(tag.into());
    }

    /// Returns true if the tag is active.
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    /// Returns the number of active tags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no tag is active.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the active tags in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for OverrideTags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        OverrideTags(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for OverrideTags {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_empty() {
        let tags = OverrideTags::none();
        assert!(tags.is_empty());
        assert_eq!(tags.len(), 0);
        assert!(!tags.contains(""));
    }

    #[test]
    fn test_collect_from_strs() {
        let tags: OverrideTags = vec!["itscript", "staging"].into_iter().collect();
        assert_eq!(tags.len(), 2);
        assert!(tags.contains("itscript"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let tags: OverrideTags = ["a", "a", "b"].into_iter().collect();
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_case_sensitive() {
        let tags: OverrideTags = ["Staging"].into_iter().collect();
        assert!(!tags.contains("staging"));
    }

    #[test]
    fn test_insert_and_extend() {
        let mut tags = OverrideTags::none();
        tags.insert("a");
        tags.extend(vec!["b".to_string()]);

        let mut all: Vec<&str> = tags.iter().collect();
        all.sort();
        assert_eq!(all, vec!["a", "b"]);
    }
}
