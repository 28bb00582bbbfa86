// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the core domain types of the configuration crate. It is
//! independent of any file or I/O concerns and defines the fundamental concepts
//! used throughout the library.

pub mod config_key;
pub mod config_value;
pub mod errors;
pub mod override_tags;
pub mod section;

// Re-export commonly used types
pub use config_key::{ConfigKey, KeyPath};
pub use config_value::ConfigValue;
pub use errors::{ConfigError, Result};
pub use override_tags::OverrideTags;
pub use section::Section;
