// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source trait definition.
//!
//! This module defines the `ConfigSource` trait, the read-only query interface
//! of a loaded configuration. Lookups never fail: an unknown section, an unknown
//! key or a malformed path all yield `None`.

use crate::domain::{ConfigKey, ConfigValue};

/// A trait for loaded configuration sources.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`. Loaded configuration is immutable, so
/// a source can be shared across threads without locking.
///
/// # Examples
///
/// ```rust
/// use inicfg::ports::ConfigSource;
/// use inicfg::domain::{ConfigKey, ConfigValue};
///
/// struct Fixed;
///
/// impl ConfigSource for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
///         (key.as_str() == "app.name").then(|| ConfigValue::from("demo"))
///     }
///
///     fn all_keys(&self) -> Vec<ConfigKey> {
///         vec![ConfigKey::from("app.name")]
///     }
/// }
///
/// let source = Fixed;
/// assert!(source.has(&ConfigKey::from("app.name")));
/// assert_eq!(source.get_or_default(&ConfigKey::from("app.port"), "80").as_text(), Some("80"));
/// ```
pub trait ConfigSource: Send + Sync {
    /// Returns the name of this configuration source, used for logging.
    fn name(&self) -> &str;

    /// Retrieves the coerced value for the given key, if present.
    fn get(&self, key: &ConfigKey) -> Option<ConfigValue>;

    /// Returns every `section.key` path available in this source.
    fn all_keys(&self) -> Vec<ConfigKey>;

    /// Returns true if the key resolves to a value.
    fn has(&self, key: &ConfigKey) -> bool {
        self.get(key).is_some()
    }

    /// Retrieves a value or falls back to `default` as text.
    fn get_or_default(&self, key: &ConfigKey, default: &str) -> ConfigValue {
        self.get(key).unwrap_or_else(|| ConfigValue::from(default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MockSource {
        values: HashMap<String, String>,
    }

    impl MockSource {
        fn new() -> Self {
            Self {
                values: HashMap::new(),
            }
        }

        fn with_value(mut self, key: &str, value: &str) -> Self {
            self.values.insert(key.to_string(), value.to_string());
            self
        }
    }

    impl ConfigSource for MockSource {
        fn name(&self) -> &str {
            "mock"
        }

        fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
            self.values
                .get(key.as_str())
                .map(|v| ConfigValue::from_raw(v))
        }

        fn all_keys(&self) -> Vec<ConfigKey> {
            self.values.keys().map(|k| ConfigKey::from(k.as_str())).collect()
        }
    }

    #[test]
    fn test_has() {
        let source = MockSource::new().with_value("ftp.name", "bob");
        assert!(source.has(&ConfigKey::from("ftp.name")));
        assert!(!source.has(&ConfigKey::from("ftp.other")));
    }

    #[test]
    fn test_get_or_default() {
        let source = MockSource::new().with_value("http.params", "a,b");
        assert!(source
            .get_or_default(&ConfigKey::from("http.params"), "x")
            .as_array()
            .is_some());
        assert_eq!(
            source.get_or_default(&ConfigKey::from("http.port"), "8080"),
            ConfigValue::from("8080")
        );
    }

    #[test]
    fn test_trait_object() {
        let source: Box<dyn ConfigSource> = Box::new(MockSource::new().with_value("a.b", "c"));
        assert_eq!(source.name(), "mock");
        assert_eq!(source.all_keys(), vec![ConfigKey::from("a.b")]);
    }
}
