use std::time::Duration;
use crate::config::structs::seeder_config::SeederConfig;

impl Default for SeederConfig {
    fn default() -> Self {
        SeederConfig {
            enabled: false,
            external_address: String::from("127.0.0.1"),
            internal_address: String::from("0.0.0.0"),
            port: 6881,
            peer_workers: 5,
            seeders_stop_seeding: 0,
            connections_per_worker: 20,
            announce_interval: 30,
            announces_per_worker: 20,
            read_timeout: None,
        }
    }
}

impl SeederConfig {
    pub fn read_timeout_duration(&self) -> Option<Duration> {
        self.read_timeout.filter(|seconds| *seconds > 0).map(Duration::from_secs)
    }
}
