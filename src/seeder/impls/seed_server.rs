use std::net::IpAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use log::{debug, error, info};
use tokio::sync::watch;
use crate::config::structs::seeder_config::SeederConfig;
use crate::database::enums::database_error::DatabaseError;
use crate::database::enums::peer_status::PeerStatus;
use crate::database::structs::announce_record::AnnounceRecord;
use crate::database::traits::persistence::Persistence;
use crate::seeder::enums::seeder_error::SeederError;
use crate::seeder::seeder::{bind_listener, generate_peer_id};
use crate::seeder::structs::peer_context::PeerContext;
use crate::seeder::structs::seed_peer::SeedPeer;
use crate::seeder::structs::seed_server::SeedServer;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::supervisor::structs::supervisor::Supervisor;
use crate::supervisor::traits::concurrent_unit::ConcurrentUnit;

const LOG_PREFIX: &str = "[SEEDER]";

pub const ACCEPT_SLOT: usize = 0;
pub const ANNOUNCE_SLOT: usize = 1;

impl SeedServer {
    /// Binds the shared listener and prepares both units.
    pub fn new(config: &SeederConfig, persistence: Arc<dyn Persistence>, stats: Arc<StatsAtomics>, shutdown: watch::Receiver<bool>) -> Result<SeedServer, SeederError>
    {
        let external_ip = IpAddr::from_str(&config.external_address)
            .map_err(|_| SeederError::InvalidAddress(config.external_address.clone()))?;
        let listener = bind_listener(&config.internal_address, config.port)?;
        info!("{} Listening on {}", LOG_PREFIX, listener.local_addr()?);

        let context = Arc::new(PeerContext {
            persistence,
            stats,
            peer_id: generate_peer_id(&config.external_address, config.port),
            seeders_stop_seeding: config.seeders_stop_seeding,
            read_timeout: config.read_timeout_duration(),
        });
        let seed_peer = SeedPeer::new(Arc::new(listener), context, config.peer_workers, config.connections_per_worker);

        Ok(SeedServer {
            seed_peer: Arc::new(seed_peer),
            shutdown,
            external_ip,
            port: config.port,
            announce_interval: Duration::from_secs(config.announce_interval),
            announces_per_worker: config.announces_per_worker,
        })
    }

    pub fn seed_peer(&self) -> Arc<SeedPeer>
    {
        self.seed_peer.clone()
    }

    /// Announces this node as a complete peer of every active torrent.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn announce_all(&self) -> Result<usize, DatabaseError>
    {
        let context = self.seed_peer.context();
        let torrents = context.persistence.get_all_info_hashes().await?;
        let ttl = self.announce_interval.as_secs().saturating_mul(2);
        for torrent in torrents.iter() {
            context.persistence.save_announce(AnnounceRecord {
                info_hash: torrent.info_hash,
                peer_id: context.peer_id,
                ip: self.external_ip,
                port: self.port,
                uploaded: 0,
                downloaded: torrent.length,
                left: 0,
                status: Some(PeerStatus::Complete),
                ttl: Some(ttl),
            }).await?;
        }
        context.stats.update_stats(StatsEvent::SeederAnnounces, torrents.len() as i64);
        debug!("{} Announced {} torrent(s)", LOG_PREFIX, torrents.len());
        Ok(torrents.len())
    }

    async fn announce_loop(&self)
    {
        if let Err(error) = self.seed_peer.context().persistence.reset_after_spawn().await {
            error!("{} Announce worker could not reset persistence: {}", LOG_PREFIX, error);
            return;
        }
        for _ in 0..self.announces_per_worker {
            if let Err(error) = self.announce_all().await {
                error!("{} Announce round failed: {}", LOG_PREFIX, error);
            }
            tokio::time::sleep(self.announce_interval).await;
        }
        info!("{} Announce worker ran {} rounds, retiring", LOG_PREFIX, self.announces_per_worker);
    }
}

#[async_trait]
impl ConcurrentUnit for SeedServer {
    fn name(&self) -> &'static str
    {
        "SeedServer"
    }

    fn desired_worker_count(&self) -> usize
    {
        2
    }

    fn is_guarded(&self) -> bool
    {
        true
    }

    async fn run_after_spawn(self: Arc<Self>, slot: usize)
    {
        match slot {
            ACCEPT_SLOT => {
                let context = self.seed_peer.context();
                Supervisor::new(self.seed_peer.clone(), self.shutdown.clone())
                    .with_stats(context.stats.clone())
                    .run()
                    .await;
            }
            ANNOUNCE_SLOT => self.announce_loop().await,
            _ => unreachable!("SeedServer has no slot {}", slot)
        }
    }
}
