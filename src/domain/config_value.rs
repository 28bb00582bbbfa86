// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type with type-safe conversions.
//!
//! This module provides the `ConfigValue` type, the result of coercing a raw
//! stored string at lookup time. A raw value becomes either text or an array of
//! comma-separated parts; text values additionally offer typed conversions.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opening glyph of a quoted string value (U+201C LEFT DOUBLE QUOTATION MARK).
pub const OPEN_QUOTE: char = '\u{201C}';

/// Closing glyph of a quoted string value (U+201D RIGHT DOUBLE QUOTATION MARK).
pub const CLOSE_QUOTE: char = '\u{201D}';

/// Separator between the elements of an array value.
pub const ARRAY_SEPARATOR: char = ',';

/// A configuration value as seen by callers.
///
/// Values are stored raw and coerced on every read by [`ConfigValue::from_raw`]:
///
/// 1. An empty raw value stays empty text.
/// 2. A value wrapped in `“` and `”` is text, quotes retained, even if it
///    contains commas.
/// 3. Any other value containing `,` is split into an array. Elements are not
///    trimmed; trailing empty elements are dropped, so `a,b,` has two elements.
/// 4. Everything else is plain text.
///
/// # Examples
///
/// ```
/// use inicfg::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::from_raw("a,b,c");
/// assert_eq!(value.as_array(), Some(&["a".to_string(), "b".to_string(), "c".to_string()][..]));
///
/// let value = ConfigValue::from_raw("“hello, world”");
/// assert_eq!(value.as_text(), Some("“hello, world”"));
///
/// let value = ConfigValue::from_raw("42");
/// assert_eq!(value.as_i32("common.limit").unwrap(), 42);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A plain or quoted string.
    Text(String),
    /// The comma-separated parts of an unquoted value, in file order.
    Array(Vec<String>),
}

/// Returns true if the raw value is wrapped in the designated quote glyphs.
fn is_quoted(raw: &str) -> bool {
    !raw.is_empty() && raw.starts_with(OPEN_QUOTE) && raw.ends_with(CLOSE_QUOTE)
}

impl ConfigValue {
    /// Coerces a raw stored string into a value.
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() || is_quoted(raw) || !raw.contains(ARRAY_SEPARATOR) {
            ConfigValue::Text(raw.to_string())
        } else {
            let mut items: Vec<String> = raw.split(ARRAY_SEPARATOR).map(str::to_string).collect();
            while items.last().is_some_and(String::is_empty) {
                items.pop();
            }
            ConfigValue::Array(items)
        }
    }

    /// Returns the text, or `None` for an array value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(s) => Some(s),
            ConfigValue::Array(_) => None,
        }
    }

    /// Returns the array elements, or `None` for a text value.
    pub fn as_array(&self) -> Option<&[String]> {
        match self {
            ConfigValue::Text(_) => None,
            ConfigValue::Array(items) => Some(items),
        }
    }

    /// Returns true if this is text wrapped in the designated quote glyphs.
    pub fn is_quoted(&self) -> bool {
        self.as_text().is_some_and(is_quoted)
    }

    /// Returns quoted text with its quote glyphs removed.
    ///
    /// Unquoted text is returned as is; arrays yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::config_value::ConfigValue;
    ///
    /// assert_eq!(ConfigValue::from_raw("“alice”").unquoted(), Some("alice"));
    /// assert_eq!(ConfigValue::from_raw("smith").unquoted(), Some("smith"));
    /// ```
    pub fn unquoted(&self) -> Option<&str> {
        let text = self.as_text()?;
        if is_quoted(text) {
            Some(&text[OPEN_QUOTE.len_utf8()..text.len() - CLOSE_QUOTE.len_utf8()])
        } else {
            Some(text)
        }
    }

    /// Returns the text for typed conversion or a conversion error for arrays.
    fn scalar(&self, key: &str, target_type: &str) -> Result<&str> {
        self.as_text()
            .ok_or_else(|| ConfigError::array_not_scalar(key.to_string(), target_type))
    }

    /// Converts the value to a boolean.
    ///
    /// Recognizes the following values (case-insensitive):
    /// - `true`: "true", "yes", "1", "on"
    /// - `false`: "false", "no", "0", "off"
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from_raw("true");
    /// assert_eq!(value.as_bool("ftp.enabled").unwrap(), true);
    /// ```
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        let text = self.scalar(key, "boolean")?;
        match text.to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(true),
            "false" | "no" | "0" | "off" => Ok(false),
            _ => text
                .parse::<bool>()
                .map_err(|e| ConfigError::from_parse_bool_error(key.to_string(), e)),
        }
    }

    /// Converts the value to an `i32`.
    pub fn as_i32(&self, key: &str) -> Result<i32> {
        self.scalar(key, "integer")?
            .parse::<i32>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to an `i64`.
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        self.scalar(key, "integer")?
            .parse::<i64>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to a `u32`.
    pub fn as_u32(&self, key: &str) -> Result<u32> {
        self.scalar(key, "integer")?
            .parse::<u32>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to a `u64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from_raw("100");
    /// assert_eq!(value.as_u64("common.paid_users_size_limit").unwrap(), 100);
    /// ```
    pub fn as_u64(&self, key: &str) -> Result<u64> {
        self.scalar(key, "integer")?
            .parse::<u64>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to an `f64`.
    pub fn as_f64(&self, key: &str) -> Result<f64> {
        self.scalar(key, "float")?
            .parse::<f64>()
            .map_err(|e| ConfigError::from_parse_float_error(key.to_string(), e))
    }

    /// Parses the value into any type that implements `FromStr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::config_value::ConfigValue;
    /// use std::net::IpAddr;
    ///
    /// let value = ConfigValue::from_raw("127.0.0.1");
    /// let ip: IpAddr = value.parse("ftp.host").unwrap();
    /// assert_eq!(ip.to_string(), "127.0.0.1");
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let target_type = std::any::type_name::<T>();
        self.scalar(key, target_type)?
            .parse::<T>()
            .map_err(|e| ConfigError::TypeConversionError {
                key: key.to_string(),
                target_type: target_type.to_string(),
                source: Box::new(e),
            })
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Text(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Text(s.to_string())
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(items: Vec<String>) -> Self {
        ConfigValue::Array(items)
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Text(s) => write!(f, "{}", s),
            ConfigValue::Array(items) => write!(f, "{}", items.join(",")),
        }
    }
}
