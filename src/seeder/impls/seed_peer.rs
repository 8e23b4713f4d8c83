use std::net::SocketAddr;
use std::sync::Arc;
use async_trait::async_trait;
use log::{debug, error, info};
use tokio::net::TcpListener;
use crate::seeder::structs::peer_connection::PeerConnection;
use crate::seeder::structs::peer_context::PeerContext;
use crate::seeder::structs::seed_peer::SeedPeer;
use crate::stats::enums::stats_event::StatsEvent;
use crate::supervisor::traits::concurrent_unit::ConcurrentUnit;

const LOG_PREFIX: &str = "[SEEDER]";

impl SeedPeer {
    pub fn new(listener: Arc<TcpListener>, context: Arc<PeerContext>, workers: usize, connections_per_worker: u64) -> SeedPeer
    {
        SeedPeer {
            listener,
            context,
            workers,
            connections_per_worker,
        }
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr>
    {
        self.listener.local_addr()
    }

    pub fn context(&self) -> Arc<PeerContext>
    {
        self.context.clone()
    }
}

#[async_trait]
impl ConcurrentUnit for SeedPeer {
    fn name(&self) -> &'static str
    {
        "SeedPeer"
    }

    fn desired_worker_count(&self) -> usize
    {
        self.workers
    }

    fn is_guarded(&self) -> bool
    {
        true
    }

    async fn run_after_spawn(self: Arc<Self>, slot: usize)
    {
        if let Err(error) = self.context.persistence.reset_after_spawn().await {
            error!("{} Worker {} could not reset persistence: {}", LOG_PREFIX, slot, error);
            return;
        }
        debug!("{} Worker {} accepting connections", LOG_PREFIX, slot);
        for _ in 0..self.connections_per_worker {
            let (stream, peer_addr) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(error) => {
                    error!("{} Worker {} failed to accept: {}", LOG_PREFIX, slot, error);
                    continue;
                }
            };
            self.context.stats.update_stats(StatsEvent::SeederConnectionsHandled, 1);
            debug!("{} Worker {} serving {}", LOG_PREFIX, slot, peer_addr);
            PeerConnection::new(stream, Some(peer_addr), self.context.clone()).run().await;
        }
        info!("{} Worker {} served {} connections, retiring", LOG_PREFIX, slot, self.connections_per_worker);
    }
}
