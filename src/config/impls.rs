/// Loading, saving and validation of the root configuration.
pub mod configuration;

/// Section defaults.
pub mod http_trackers_config;

/// Seeder defaults and derived values.
pub mod seeder_config;
