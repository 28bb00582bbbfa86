// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the loaded configuration store.
//!
//! `ConfigStore` is the main interface for accessing configuration values once a
//! file has been loaded.

pub mod config_store;

// Re-export commonly used types
pub use config_store::{ConfigStore, ConfigStoreBuilder};
