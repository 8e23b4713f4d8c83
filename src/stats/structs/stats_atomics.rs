use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub tcp4_announces_handled: AtomicI64,
    pub tcp6_announces_handled: AtomicI64,
    pub http_failure: AtomicI64,
    pub http_not_found: AtomicI64,
    pub torrents_created: AtomicI64,
    pub seeder_connections_handled: AtomicI64,
    pub seeder_connections_closed: AtomicI64,
    pub seeder_bytes_sent: AtomicI64,
    pub seeder_bytes_received: AtomicI64,
    pub seeder_data_sent: AtomicI64,
    pub seeder_announces: AtomicI64,
    pub worker_restarts: AtomicI64,
}
