// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that define the interfaces
//! between the domain and the concrete file adapters.

pub mod parser;
pub mod source;

// Re-export commonly used types
pub use parser::{ConfigParser, SectionMap};
pub use source::ConfigSource;
