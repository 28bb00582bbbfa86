// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur while loading an INI file
//! or converting its values. All errors use `thiserror` for proper error handling
//! and conversion.

use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// Loading either succeeds completely or fails with one of these errors; no
/// partially built store is ever returned. Lookups never fail, they return
/// `None` instead. The enum is marked as `#[non_exhaustive]` to allow for
/// future additions without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use inicfg::domain::errors::ConfigError;
///
/// fn open_config(path: &str) -> Result<(), ConfigError> {
///     if path.is_empty() {
///         return Err(ConfigError::InvalidArgument {
///             message: "Invalid filename".to_string(),
///         });
///     }
///     Ok(())
/// }
///
/// assert!(open_config("").is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// An argument passed to a load operation was unusable.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// The error message
        message: String,
    },

    /// The configuration file contents violate the file format.
    #[error("Invalid configuration at line {line_number}: {message}: {line}")]
    InvalidConfig {
        /// 1-based line number of the offending line
        line_number: usize,
        /// The offending line, verbatim
        line: String,
        /// The error message
        message: String,
    },

    /// Failed to convert a configuration value to the requested type.
    #[error(
        "Failed to convert configuration value for key '{key}' to type {target_type}: {source}"
    )]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates the error reported for an entry that appears before any section header.
    pub fn no_section(line_number: usize, line: &str) -> Self {
        ConfigError::InvalidConfig {
            line_number,
            line: line.to_string(),
            message: "no section for entry".to_string(),
        }
    }

    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseFloatError.
    pub fn from_parse_float_error(key: String, err: ParseFloatError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "float".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseBoolError.
    pub fn from_parse_bool_error(key: String, err: ParseBoolError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "boolean".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError for an array value read as a scalar.
    pub fn array_not_scalar(key: String, target_type: &str) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: target_type.to_string(),
            source: "value is an array".into(),
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
