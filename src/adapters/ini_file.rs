// SPDX-License-Identifier: MIT OR Apache-2.0

//! INI file configuration adapter.
//!
//! This module provides the parser for the sectioned `key = value` format and an
//! adapter that opens INI files, either from an explicit path or from the
//! OS-appropriate configuration directory.
//!
//! # Format
//!
//! ```text
//! ; comment
//! [ftp]
//! name = “bob”
//! name<staging> = “alice”
//! hosts = a.example.com,b.example.com
//! ```
//!
//! Every line is classified on its own: comments and empty lines are skipped, a
//! bracketed line opens (or re-opens) a section, and anything else is an entry.
//! Entry lines without `=` are dropped. An entry before the first section header
//! is an error.

use crate::domain::{ConfigError, OverrideTags, Result, Section};
use crate::ports::{ConfigParser, SectionMap};
use crate::service::ConfigStore;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

static COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?-u:\s)*;.*$").expect("valid comment regex"));
static SECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?-u:\s)*\[([^\]]*)\](?-u:\s)*$").expect("valid section regex")
});
static ENTRY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?-u:\s)*([^=]*)=(.*)$").expect("valid entry regex"));
static OVERRIDE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?-u:\s)*(.*)<(.*)>(?-u:\s)*$").expect("valid override regex")
});

/// File name used when loading from the default location.
const DEFAULT_FILE_NAME: &str = "config.ini";

/// What a single physical line contributes to the configuration.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    /// Comment or empty line.
    Skip,
    /// Section header with its trimmed name.
    Header(&'a str),
    /// `key = value` with both sides trimmed; the key may carry an override tag.
    Entry { key: &'a str, value: &'a str },
    /// An entry line without `=`.
    Malformed,
}

/// Trims ASCII control characters and spaces; other Unicode whitespace is content.
fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

fn group<'a>(caps: &regex::Captures<'a>, index: usize) -> &'a str {
    trim(caps.get(index).map_or("", |m| m.as_str()))
}

fn classify(line: &str) -> Line<'_> {
    if line.is_empty() || COMMENT_RE.is_match(line) {
        return Line::Skip;
    }
    if let Some(caps) = SECTION_RE.captures(line) {
        return Line::Header(group(&caps, 1));
    }
    match ENTRY_RE.captures(line) {
        Some(caps) => Line::Entry {
            key: group(&caps, 1),
            value: group(&caps, 2),
        },
        None => Line::Malformed,
    }
}

/// Resolves an override-qualified key against the active tags.
///
/// Returns the key to store under, or `None` if the entry belongs to an
/// inactive override.
fn resolve_key<'a>(key: &'a str, overrides: &OverrideTags) -> Option<&'a str> {
    let Some(caps) = OVERRIDE_RE.captures(key) else {
        return Some(key);
    };

    let base = group(&caps, 1);
    let tag = group(&caps, 2);
    if overrides.contains(tag) {
        tracing::trace!("Selected override '{}' for key '{}'", tag, base);
        Some(base)
    } else {
        tracing::debug!("Dropping key '{}': override '{}' is not active", key, tag);
        None
    }
}

/// Parser for the INI-like configuration format.
///
/// # Examples
///
/// ```rust
/// use inicfg::adapters::IniParser;
/// use inicfg::domain::OverrideTags;
/// use inicfg::ports::ConfigParser;
///
/// let parser = IniParser::new();
/// let content = "[ftp]\nname = bob\nname<staging> = alice\n";
///
/// let staging: OverrideTags = ["staging"].into_iter().collect();
/// let sections = parser.parse(content, &staging).unwrap();
/// assert_eq!(sections["ftp"].get_raw("name"), Some("alice"));
///
/// let sections = parser.parse(content, &OverrideTags::none()).unwrap();
/// assert_eq!(sections["ftp"].get_raw("name"), Some("bob"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IniParser;

impl IniParser {
    /// Creates a new INI parser.
    pub fn new() -> Self {
        IniParser
    }
}

impl ConfigParser for IniParser {
    fn parse_reader(
        &self,
        reader: &mut dyn BufRead,
        overrides: &OverrideTags,
    ) -> Result<SectionMap> {
        let mut sections = SectionMap::new();
        let mut current: Option<String> = None;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;

            let (key, value) = match classify(&line) {
                Line::Skip => continue,
                Line::Header(name) => {
                    tracing::trace!("Section '{}' at line {}", name, line_number);
                    sections
                        .entry(name.to_string())
                        .or_insert_with(|| Section::new(name));
                    current = Some(name.to_string());
                    continue;
                }
                Line::Entry { key, value } => (key, value),
                Line::Malformed => {
                    if current.is_none() {
                        return Err(ConfigError::no_section(line_number, &line));
                    }
                    tracing::trace!("Ignoring malformed line {}: {}", line_number, line);
                    continue;
                }
            };

            let Some(section_name) = current.as_deref() else {
                return Err(ConfigError::no_section(line_number, &line));
            };

            if let Some(key) = resolve_key(key, overrides) {
                sections
                    .entry(section_name.to_string())
                    .or_insert_with(|| Section::new(section_name))
                    .insert(key.to_string(), value.to_string());
            }
        }

        Ok(sections)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["ini", "cfg", "conf", "txt"]
    }
}

/// Configuration adapter for INI files.
///
/// The adapter only remembers where the file lives; the file is opened when
/// [`IniFileAdapter::load`] runs and closed again before it returns, on success
/// and on error alike.
///
/// # Examples
///
/// ```rust,no_run
/// use inicfg::adapters::IniFileAdapter;
/// use inicfg::domain::OverrideTags;
///
/// // Load from a specific file
/// let store = IniFileAdapter::from_file("/etc/myapp/config.ini")
///     .unwrap()
///     .load(&OverrideTags::none())
///     .unwrap();
///
/// // Load from default OS location
/// let adapter = IniFileAdapter::from_default_location("myapp", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct IniFileAdapter {
    /// Path to the INI file
    file_path: PathBuf,
    /// INI parser
    parser: IniParser,
}

impl IniFileAdapter {
    /// Creates a new INI file adapter for a specific file path.
    ///
    /// Fails with [`ConfigError::InvalidArgument`] if the path is empty. The file
    /// itself is not touched until [`IniFileAdapter::load`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();
        if file_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidArgument {
                message: "Invalid filename".to_string(),
            });
        }

        Ok(Self {
            file_path,
            parser: IniParser::new(),
        })
    }

    /// Creates a new INI file adapter for `config.ini` in the default OS-appropriate
    /// configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, DEFAULT_FILE_NAME)
    }

    /// Creates a new INI file adapter with a custom file name in the default location.
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
            ConfigError::InvalidArgument {
                message: "Failed to determine project directories".to_string(),
            }
        })?;

        Self::from_file(proj_dirs.config_dir().join(filename))
    }

    /// Returns the path to the configuration file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Reads and parses the file, producing an immutable store.
    ///
    /// I/O failures are returned as [`ConfigError::IoError`] with the original
    /// error; an entry before the first section fails with
    /// [`ConfigError::InvalidConfig`].
    pub fn load(&self, overrides: &OverrideTags) -> Result<ConfigStore> {
        tracing::debug!(
            "Loading configuration from {} with {} active override(s)",
            self.file_path.display(),
            overrides.len()
        );

        let file = File::open(&self.file_path)?;
        let mut reader = BufReader::new(file);
        let sections = self.parser.parse_reader(&mut reader, overrides)?;

        let store = ConfigStore::from_sections(sections, Some(self.file_path.clone()));
        tracing::debug!(
            "Loaded {} section(s) with {} entry(ies) from {}",
            store.section_count(),
            store.entry_count(),
            self.file_path.display()
        );
        Ok(store)
    }
}
