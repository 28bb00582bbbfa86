// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture INI configuration crate.
//!
//! This crate loads a sectioned `key = value` configuration file into an
//! immutable, queryable store. One file can carry environment- or
//! feature-specific values through override-qualified keys, which are resolved
//! once at load time against a caller-supplied set of active tags.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigKey`, `ConfigValue`, `Section`, `OverrideTags`, errors)
//! - **Ports**: Trait definitions that define interfaces (`ConfigParser`, `ConfigSource`)
//! - **Adapters**: The INI parser and file adapter
//! - **Service**: The loaded `ConfigStore` and its builder
//!
//! # File Format
//!
//! ```text
//! ; comments start with a semicolon
//! [common]
//! path = /var/data
//!
//! [ftp]
//! name = “bob”
//! name<staging> = “alice”
//! hosts = a.example.com,b.example.com
//! ```
//!
//! - `[name]` opens a section; repeating a header adds to the same section.
//! - `key<tag> = value` only applies when `tag` is active, and is then stored as
//!   `key`. Later lines win over earlier ones.
//! - Values wrapped in `“` and `”` are strings (quotes kept); other values
//!   containing `,` read as arrays.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use inicfg::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let config = inicfg::load("/etc/myapp/config.ini", ["staging"])?;
//!
//! if let Some(name) = config.get("ftp.name") {
//!     println!("ftp user: {}", name);
//! }
//! let hosts = config.get("ftp.hosts").and_then(|v| v.as_array().map(<[String]>::to_vec));
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

use std::path::Path;

/// Loads an INI file with the given override tags active.
///
/// This is a shorthand for [`service::ConfigStore::load`].
///
/// # Errors
///
/// * [`domain::ConfigError::InvalidArgument`] - `path` is empty
/// * [`domain::ConfigError::IoError`] - the file cannot be opened or read
/// * [`domain::ConfigError::InvalidConfig`] - an entry appears before any section
pub fn load<P, I, S>(path: P, overrides: I) -> domain::Result<service::ConfigStore>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    service::ConfigStore::load(path, overrides)
}

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{IniFileAdapter, IniParser};
    pub use crate::domain::{
        ConfigError, ConfigKey, ConfigValue, OverrideTags, Result, Section,
    };
    pub use crate::ports::{ConfigParser, ConfigSource};
    pub use crate::service::{ConfigStore, ConfigStoreBuilder};
}
