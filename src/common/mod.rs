//! Common utilities and shared functionality.
//!
//! Helpers used across the tracker and the seeder: query string parsing,
//! hex formatting of 20 byte identifiers, timestamps and logging setup.
//!
//! # Example
//!
//! ```rust,ignore
//! use torrust_seedtracker::common::common::parse_query;
//!
//! let params = parse_query(Some(String::from("info_hash=%ab%cd&port=6881")));
//! ```

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
