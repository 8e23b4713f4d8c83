//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Database connection configuration.
pub mod database_config;

/// HTTP server configuration.
pub mod http_trackers_config;

/// Seeding peer configuration.
pub mod seeder_config;

/// Torrent file creation defaults.
pub mod torrent_config;

/// Core tracker settings.
pub mod tracker_config;
