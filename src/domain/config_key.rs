// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype for type-safe key handling.
//!
//! This module provides the `ConfigKey` type, a newtype wrapper around `String`
//! holding a dotted lookup path such as `ftp.name`, and `KeyPath`, the
//! classification of such a path into a section lookup or an entry lookup.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Separator between the section and key components of a lookup path.
pub const PATH_SEPARATOR: char = '.';

/// The shape of a dotted lookup path.
///
/// # Examples
///
/// ```
/// use inicfg::domain::config_key::{ConfigKey, KeyPath};
///
/// assert_eq!(
///     ConfigKey::from("ftp.name").path(),
///     KeyPath::Entry { section: "ftp", key: "name" }
/// );
/// assert_eq!(ConfigKey::from("http").path(), KeyPath::Section("http"));
/// assert_eq!(ConfigKey::from("a.b.c").path(), KeyPath::Unsupported);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyPath<'a> {
    /// A single non-empty component naming a whole section.
    Section(&'a str),
    /// Two non-empty components naming a key within a section.
    Entry {
        /// The section name
        section: &'a str,
        /// The key within the section
        key: &'a str,
    },
    /// Empty paths, empty components, or more than two components.
    Unsupported,
}

/// A type-safe wrapper for configuration keys.
///
/// `ConfigKey` wraps a `String` holding a lookup path. It does not validate the
/// path on construction; malformed paths classify as [`KeyPath::Unsupported`]
/// and simply find nothing.
///
/// # Examples
///
/// ```
/// use inicfg::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("common.path");
/// let key2 = ConfigKey::from("common.paid_users_size_limit".to_string());
///
/// assert_eq!(key.as_str(), "common.path");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Creates the `section.key` path for an entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::for_entry("ftp", "lastname");
    /// assert_eq!(key.as_str(), "ftp.lastname");
    /// ```
    pub fn for_entry(section: &str, key: &str) -> Self {
        ConfigKey(format!("{}{}{}", section, PATH_SEPARATOR, key))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Classifies this key as a section path, an entry path, or neither.
    pub fn path(&self) -> KeyPath<'_> {
        let mut parts = self.0.split(PATH_SEPARATOR);
        let first = parts.next().unwrap_or_default();
        let second = parts.next();

        if parts.next().is_some() || first.is_empty() {
            return KeyPath::Unsupported;
        }

        match second {
            None => KeyPath::Section(first),
            Some("") => KeyPath::Unsupported,
            Some(key) => KeyPath::Entry {
                section: first,
                key,
            },
        }
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Hash for ConfigKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
