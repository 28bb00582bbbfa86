// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which provides an interface for
//! turning line-oriented configuration text into sections of raw entries.

use crate::domain::{OverrideTags, Result, Section};
use std::collections::HashMap;
use std::io::BufRead;

/// Parsed sections keyed by section name.
pub type SectionMap = HashMap<String, Section>;

/// A trait for parsing configuration files.
///
/// Parsers read their input once, front to back, and resolve override-qualified
/// keys against the active tags as they go. The returned sections hold only the
/// surviving, override-resolved raw values.
///
/// # Examples
///
/// ```rust
/// use inicfg::ports::{ConfigParser, SectionMap};
/// use inicfg::domain::{OverrideTags, Result};
/// use std::io::BufRead;
///
/// struct EmptyParser;
///
/// impl ConfigParser for EmptyParser {
///     fn parse_reader(&self, _reader: &mut dyn BufRead, _overrides: &OverrideTags) -> Result<SectionMap> {
///         Ok(SectionMap::new())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["empty"]
///     }
/// }
///
/// let sections = EmptyParser.parse("[a]\nk = v", &OverrideTags::none()).unwrap();
/// assert!(sections.is_empty());
/// ```
pub trait ConfigParser {
    /// Parses configuration read line by line from `reader`.
    ///
    /// # Returns
    ///
    /// * `Ok(SectionMap)` - The parsed sections
    /// * `Err(ConfigError)` - Reading failed or the content is invalid
    fn parse_reader(&self, reader: &mut dyn BufRead, overrides: &OverrideTags)
        -> Result<SectionMap>;

    /// Parses configuration held in memory.
    fn parse(&self, content: &str, overrides: &OverrideTags) -> Result<SectionMap> {
        self.parse_reader(&mut content.as_bytes(), overrides)
    }

    /// Returns the file extensions this parser supports, without the leading dot.
    fn supported_extensions(&self) -> &[&str];
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LineCountParser;

    impl ConfigParser for LineCountParser {
        fn parse_reader(
            &self,
            reader: &mut dyn BufRead,
            _overrides: &OverrideTags,
        ) -> Result<SectionMap> {
            let mut section = Section::new("lines");
            for (i, line) in reader.lines().enumerate() {
                section.insert(i.to_string(), line?);
            }
            let mut sections = SectionMap::new();
            sections.insert("lines".to_string(), section);
            Ok(sections)
        }

        fn supported_extensions(&self) -> &[&str] {
            &["txt"]
        }
    }

    #[test]
    fn test_parse_delegates_to_reader() {
        let sections = LineCountParser
            .parse("first\nsecond", &OverrideTags::none())
            .unwrap();
        let lines = &sections["lines"];
        assert_eq!(lines.len(), 2);
        assert_eq!(lines.get_raw("1"), Some("second"));
    }

    #[test]
    fn test_supported_extensions() {
        assert_eq!(LineCountParser.supported_extensions(), &["txt"]);
    }
}
