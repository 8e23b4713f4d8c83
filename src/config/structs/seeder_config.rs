use serde::{Deserialize, Serialize};

/// Settings of the built-in seeding peer.
///
/// `external_address` is what gets announced to the tracker, `internal_address`
/// is where the listener binds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SeederConfig {
    pub enabled: bool,
    pub external_address: String,
    pub internal_address: String,
    pub port: u16,
    pub peer_workers: usize,
    /// Stop serving a torrent once this many other seeders are known. 0 never stops.
    pub seeders_stop_seeding: u64,
    pub connections_per_worker: u64,
    pub announce_interval: u64,
    pub announces_per_worker: u64,
    /// Seconds a connection may stay silent before it gets closed.
    pub read_timeout: Option<u64>,
}
