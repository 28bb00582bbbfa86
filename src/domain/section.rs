// SPDX-License-Identifier: MIT OR Apache-2.0

//! A named group of key/value entries.

use crate::domain::ConfigValue;
use std::collections::BTreeMap;
use std::fmt;

/// A section of a loaded configuration file.
///
/// Entries are stored as raw, override-resolved strings; coercion into a
/// [`ConfigValue`] happens on every read. A section is only filled in while
/// loading and is read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: BTreeMap<String, String>,
}

impl Section {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Stores an entry, replacing any earlier value for the same key.
    pub(crate) fn insert(&mut self, key: String, raw_value: String) -> Option<String> {
        self.entries.insert(key, raw_value)
    }

    /// Returns the section name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the coerced value for a key.
    pub fn get(&self, key: &str) -> Option<ConfigValue> {
        self.get_raw(key).map(ConfigValue::from_raw)
    }

    /// Returns the stored raw string for a key.
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns true if the key exists in this section.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over the keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over `(key, raw value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the section has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the entries as a debug-style map, e.g. `{"params": "a,b,c"}`.
    ///
    /// This is the text returned by a bare section lookup. It is meant for
    /// display; use [`Section::iter`] for structured access.
    pub fn dump(&self) -> String {
        format!("{:?}", self.entries)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.name, self.dump())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http() -> Section {
        let mut section = Section::new("http");
        section.insert("params".to_string(), "a,b,c".to_string());
        section
    }

    #[test]
    fn test_new_section_is_empty() {
        let section = Section::new("ftp");
        assert_eq!(section.name(), "ftp");
        assert!(section.is_empty());
        assert_eq!(section.dump(), "{}");
    }

    #[test]
    fn test_insert_last_write_wins() {
        let mut section = Section::new("ftp");
        assert_eq!(section.insert("name".to_string(), "bob".to_string()), None);
        assert_eq!(
            section.insert("name".to_string(), "alice".to_string()),
            Some("bob".to_string())
        );
        assert_eq!(section.get_raw("name"), Some("alice"));
        assert_eq!(section.len(), 1);
    }

    #[test]
    fn test_get_coerces() {
        let section = http();
        assert_eq!(
            section.get("params"),
            Some(ConfigValue::Array(vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string()
            ]))
        );
        assert_eq!(section.get("missing"), None);
        assert!(section.contains_key("params"));
    }

    #[test]
    fn test_dump() {
        assert_eq!(http().dump(), r#"{"params": "a,b,c"}"#);
    }

    #[test]
    fn test_dump_sorted() {
        let mut section = Section::new("ftp");
        section.insert("lastname".to_string(), "smith".to_string());
        section.insert("enabled".to_string(), "true".to_string());
        assert_eq!(
            section.dump(),
            r#"{"enabled": "true", "lastname": "smith"}"#
        );
        assert_eq!(section.keys().collect::<Vec<_>>(), vec!["enabled", "lastname"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(http().to_string(), r#"[http] {"params": "a,b,c"}"#);
    }
}
