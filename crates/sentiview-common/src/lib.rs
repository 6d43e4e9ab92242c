//! # SentiView Common
//!
//! Shared types, errors, logging and text utilities for SentiView.
//!
//! This crate provides the foundational types used across all other crates in
//! the SentiView workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

#[allow(missing_docs)]
pub mod error;
pub mod logging;
pub mod text;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{Result, SentiViewError};
pub use logging::{init_logging, LoggingConfig};
pub use text::{split_lines, truncate_chars};
pub use types::*;
