// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing configuration file implementations.
//!
//! This module contains concrete implementations of the parser port defined in
//! the ports layer, together with the adapter that opens configuration files.

pub mod ini_file;

pub use ini_file::{IniFileAdapter, IniParser};
