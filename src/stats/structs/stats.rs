use serde::{Deserialize, Serialize};

/// Point in time copy of all counters.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub tcp4_announces_handled: i64,
    pub tcp6_announces_handled: i64,
    pub http_failure: i64,
    pub http_not_found: i64,
    pub torrents_created: i64,
    pub seeder_connections_handled: i64,
    pub seeder_connections_closed: i64,
    pub seeder_bytes_sent: i64,
    pub seeder_bytes_received: i64,
    pub seeder_data_sent: i64,
    pub seeder_announces: i64,
    pub worker_restarts: i64,
}
