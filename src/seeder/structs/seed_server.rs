use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use crate::seeder::structs::seed_peer::SeedPeer;

pub struct SeedServer {
    pub(crate) seed_peer: Arc<SeedPeer>,
    pub(crate) shutdown: watch::Receiver<bool>,
    pub(crate) external_ip: IpAddr,
    pub(crate) port: u16,
    pub(crate) announce_interval: Duration,
    /// Announce rounds one worker runs before it retires.
    pub(crate) announces_per_worker: u64,
}
