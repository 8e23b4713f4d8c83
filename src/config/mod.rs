//! Configuration management module.
//!
//! Loads, validates and generates the `config.toml` file.
//!
//! # Configuration Structure
//!
//! - **tracker_config**: announce interval handed out to peers
//! - **database**: persistence engine (`memory` or `sqlite3`) and its path
//! - **http_server**: HTTP tracker instances
//! - **seeder**: the built-in seeding peer
//! - **torrent**: defaults used when creating torrent files
//!
//! # Example
//!
//! ```rust,ignore
//! use torrust_seedtracker::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file(false)?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
