use std::sync::Arc;
use tokio::net::TcpListener;
use crate::seeder::structs::peer_context::PeerContext;

pub struct SeedPeer {
    pub(crate) listener: Arc<TcpListener>,
    pub(crate) context: Arc<PeerContext>,
    pub(crate) workers: usize,
    /// Connections one worker serves before it retires.
    pub(crate) connections_per_worker: u64,
}
