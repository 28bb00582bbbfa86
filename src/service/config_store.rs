// SPDX-License-Identifier: MIT OR Apache-2.0

//! The loaded, queryable configuration store.
//!
//! A `ConfigStore` can only be produced by loading: through [`ConfigStore::load`],
//! [`ConfigStoreBuilder::load`], or one of the in-memory constructors. It has no
//! mutation API, so once built it can be shared freely between threads.

use crate::adapters::{IniFileAdapter, IniParser};
use crate::domain::{ConfigError, ConfigKey, ConfigValue, KeyPath, OverrideTags, Result, Section};
use crate::ports::{ConfigParser, ConfigSource, SectionMap};
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// An immutable, sectioned configuration.
///
/// # Examples
///
/// ```rust
/// use inicfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let content = "[ftp]\nname = “bob”\nname<itscript> = “alice”\n[http]\nparams = a,b,c\n";
/// let store = ConfigStore::parse_str(content, ["itscript"])?;
///
/// assert_eq!(store.get("ftp.name"), Some(ConfigValue::from("“alice”")));
/// assert_eq!(store.get("http.params").unwrap().as_array().unwrap().len(), 3);
/// assert_eq!(store.get("http"), Some(ConfigValue::from(r#"{"params": "a,b,c"}"#)));
/// assert_eq!(store.get("ftp.missing"), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigStore {
    /// Sections keyed by name
    sections: SectionMap,
    /// File the store was loaded from, if any
    origin: Option<PathBuf>,
}

impl ConfigStore {
    pub(crate) fn from_sections(sections: SectionMap, origin: Option<PathBuf>) -> Self {
        Self { sections, origin }
    }

    /// Loads an INI file, resolving override-qualified keys against `overrides`.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::InvalidArgument`] - `path` is empty
    /// * [`ConfigError::IoError`] - the file cannot be opened or read
    /// * [`ConfigError::InvalidConfig`] - an entry appears before any section
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use inicfg::service::ConfigStore;
    ///
    /// let store = ConfigStore::load("/etc/myapp/config.ini", ["staging"]).unwrap();
    /// let defaults = ConfigStore::load("/etc/myapp/config.ini", Vec::<String>::new()).unwrap();
    /// ```
    pub fn load<P, I, S>(path: P, overrides: I) -> Result<Self>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let overrides: OverrideTags = overrides.into_iter().collect();
        IniFileAdapter::from_file(path)?.load(&overrides)
    }

    /// Parses configuration read line by line from `reader`.
    pub fn from_reader<R, I, S>(mut reader: R, overrides: I) -> Result<Self>
    where
        R: BufRead,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let overrides: OverrideTags = overrides.into_iter().collect();
        let sections = IniParser::new().parse_reader(&mut reader, &overrides)?;
        Ok(Self::from_sections(sections, None))
    }

    /// Parses configuration held in memory.
    pub fn parse_str<I, S>(content: &str, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_reader(content.as_bytes(), overrides)
    }

    /// Creates a new builder.
    pub fn builder() -> ConfigStoreBuilder {
        ConfigStoreBuilder::new()
    }

    /// Looks up a dotted path.
    ///
    /// * `section.key` yields the coerced value of the entry.
    /// * `section` yields a debug-style text rendering of the whole section, see
    ///   [`Section::dump`]. Prefer [`ConfigStore::section`] for structured access.
    /// * Anything else, and anything not found, yields `None`.
    pub fn get(&self, path: &str) -> Option<ConfigValue> {
        match ConfigKey::from(path).path() {
            KeyPath::Entry { section, key } => self.sections.get(section)?.get(key),
            KeyPath::Section(name) => self
                .sections
                .get(name)
                .map(|section| ConfigValue::Text(section.dump())),
            KeyPath::Unsupported => None,
        }
    }

    /// Returns the stored raw string for a `section.key` path without coercion.
    pub fn get_raw(&self, path: &str) -> Option<&str> {
        match ConfigKey::from(path).path() {
            KeyPath::Entry { section, key } => self.sections.get(section)?.get_raw(key),
            _ => None,
        }
    }

    /// Returns true if the path resolves to a value.
    pub fn has(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Looks up a dotted path, falling back to `default` as text.
    pub fn get_or_default(&self, path: &str, default: &str) -> ConfigValue {
        self.get(path).unwrap_or_else(|| ConfigValue::from(default))
    }

    /// Returns a section by name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Iterates over all sections in no particular order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// Returns the section names, sorted.
    pub fn section_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sections.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Returns the total number of entries across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.values().map(Section::len).sum()
    }

    /// Returns the file this store was loaded from, if it came from a file.
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }
}

impl ConfigSource for ConfigStore {
    fn name(&self) -> &str {
        "ini-file"
    }

    fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
        ConfigStore::get(self, key.as_str())
    }

    fn all_keys(&self) -> Vec<ConfigKey> {
        let mut keys: Vec<ConfigKey> = self
            .sections
            .values()
            .flat_map(|section| {
                section
                    .keys()
                    .map(move |key| ConfigKey::for_entry(section.name(), key))
            })
            .collect();
        keys.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        keys
    }
}

/// Builder for loading a [`ConfigStore`].
///
/// # Examples
///
/// ```rust,no_run
/// use inicfg::service::ConfigStore;
///
/// # fn main() -> inicfg::domain::Result<()> {
/// let store = ConfigStore::builder()
///     .with_file("/etc/myapp/config.ini")
///     .with_override("staging")
///     .load()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ConfigStoreBuilder {
    file: Option<PathBuf>,
    overrides: OverrideTags,
}

impl ConfigStoreBuilder {
    /// Creates a new builder with no file and no active overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the file to load.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Loads `config.ini` from the default OS-appropriate configuration directory.
    pub fn with_default_location(self, app_name: &str, qualifier: &str) -> Result<Self> {
        let adapter = IniFileAdapter::from_default_location(app_name, qualifier)?;
        Ok(self.with_file(adapter.file_path()))
    }

    /// Loads a custom file name from the default OS-appropriate configuration directory.
    pub fn with_filename(self, app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let adapter = IniFileAdapter::with_filename(app_name, qualifier, filename)?;
        Ok(self.with_file(adapter.file_path()))
    }

    /// Activates an override tag.
    pub fn with_override(mut self, tag: impl Into<String>) -> Self {
        self.overrides.insert(tag);
        self
    }

    /// Activates several override tags.
    pub fn with_overrides<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.overrides.extend(tags);
        self
    }

    /// Loads the configured file.
    pub fn load(self) -> Result<ConfigStore> {
        let file = self.file.ok_or_else(|| ConfigError::InvalidArgument {
            message: "No configuration file given".to_string(),
        })?;
        IniFileAdapter::from_file(file)?.load(&self.overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
[common]
path = /var/data
paid_users_size_limit = 100
[ftp]
name = “bob”
name<itscript> = “alice”
lastname = smith
enabled = true
path<itscript> = /ftp/alt
[http]
params = a,b,c
";

    fn sample(overrides: &[&str]) -> ConfigStore {
        ConfigStore::parse_str(SAMPLE, overrides.iter().copied()).unwrap()
    }

    #[test]
    fn test_get_entry() {
        let store = sample(&["itscript"]);
        assert_eq!(store.get("common.path"), Some(ConfigValue::from("/var/data")));
        assert_eq!(store.get("ftp.name"), Some(ConfigValue::from("“alice”")));
        assert_eq!(store.get("ftp.path"), Some(ConfigValue::from("/ftp/alt")));
    }

    #[test]
    fn test_get_without_overrides() {
        let store = sample(&[]);
        assert_eq!(store.get("ftp.name"), Some(ConfigValue::from("“bob”")));
        assert_eq!(store.get("ftp.path"), None);
    }

    #[test]
    fn test_get_array() {
        let store = sample(&[]);
        assert_eq!(
            store.get("http.params"),
            Some(ConfigValue::Array(vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string()
            ]))
        );
    }

    #[test]
    fn test_get_array_trailing_separators() {
        let store = ConfigStore::parse_str("[s]\nv = a,b,\nw = ,\nx = a,,,\n", Vec::<String>::new())
            .unwrap();
        assert_eq!(
            store.get("s.v"),
            Some(ConfigValue::Array(vec!["a".to_string(), "b".to_string()]))
        );
        assert_eq!(store.get("s.w"), Some(ConfigValue::Array(Vec::new())));
        assert_eq!(store.get("s.x"), Some(ConfigValue::Array(vec!["a".to_string()])));
        assert_eq!(store.get_raw("s.v"), Some("a,b,"));
    }

    #[test]
    fn test_get_section_dump() {
        let store = sample(&[]);
        assert_eq!(
            store.get("http"),
            Some(ConfigValue::from(r#"{"params": "a,b,c"}"#))
        );
        assert_eq!(store.get("nope"), None);
    }

    #[test]
    fn test_get_missing_paths() {
        let store = sample(&[]);
        for path in ["nope.key", "ftp.nope", "", "a.b.c", ".name", "ftp.", "ftp.name.", "ftp.name.x"] {
            assert_eq!(store.get(path), None, "path {:?}", path);
        }
    }

    #[test]
    fn test_get_raw() {
        let store = sample(&[]);
        assert_eq!(store.get_raw("http.params"), Some("a,b,c"));
        assert_eq!(store.get_raw("http"), None);
    }

    #[test]
    fn test_typed_access() {
        let store = sample(&[]);
        let limit = store.get("common.paid_users_size_limit").unwrap();
        assert_eq!(limit.as_u32("common.paid_users_size_limit").unwrap(), 100);
        assert!(store.get("ftp.enabled").unwrap().as_bool("ftp.enabled").unwrap());
    }

    #[test]
    fn test_has_and_default() {
        let store = sample(&[]);
        assert!(store.has("ftp.lastname"));
        assert!(store.has("ftp"));
        assert!(!store.has("ftp.middlename"));
        assert_eq!(store.get_or_default("ftp.port", "21"), ConfigValue::from("21"));
    }

    #[test]
    fn test_sections() {
        let store = sample(&[]);
        assert_eq!(store.section_names(), vec!["common", "ftp", "http"]);
        assert_eq!(store.section_count(), 3);
        assert_eq!(store.sections().count(), 3);
        assert_eq!(store.section("ftp").unwrap().get_raw("lastname"), Some("smith"));
        assert!(store.section("smtp").is_none());
    }

    #[test]
    fn test_entry_count() {
        assert_eq!(sample(&[]).entry_count(), 6);
        assert_eq!(sample(&["itscript"]).entry_count(), 7);
    }

    #[test]
    fn test_origin_in_memory() {
        assert!(sample(&[]).origin().is_none());
    }

    #[test]
    fn test_config_source_impl() {
        let store = sample(&["itscript"]);
        let source: &dyn ConfigSource = &store;
        assert_eq!(source.name(), "ini-file");
        assert_eq!(
            source.get(&ConfigKey::from("ftp.lastname")),
            Some(ConfigValue::from("smith"))
        );

        let keys = source.all_keys();
        assert_eq!(keys.len(), 7);
        assert_eq!(keys[0], ConfigKey::from("common.paid_users_size_limit"));
        assert!(keys.contains(&ConfigKey::from("ftp.path")));
    }

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConfigStore>();
    }

    #[test]
    fn test_builder_without_file() {
        let err = ConfigStore::builder().with_override("x").load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidArgument { .. }));
    }

    #[test]
    fn test_builder_empty_file() {
        let err = ConfigStoreBuilder::new().with_file("").load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidArgument { .. }));
    }

    #[test]
    fn test_load_empty_path() {
        let err = ConfigStore::load("", Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidArgument { .. }));
    }
}
