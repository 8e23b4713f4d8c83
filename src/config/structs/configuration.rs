use serde::{Deserialize, Serialize};
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::seeder_config::SeederConfig;
use crate::config::structs::torrent_config::TorrentConfig;
use crate::config::structs::tracker_config::TrackerConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub tracker_config: TrackerConfig,
    pub database: DatabaseConfig,
    pub http_server: Vec<HttpTrackersConfig>,
    pub seeder: SeederConfig,
    pub torrent: TorrentConfig,
}
