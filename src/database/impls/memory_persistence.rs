use std::collections::BTreeMap;
use std::sync::Arc;
use async_trait::async_trait;
use log::debug;
use crate::common::common::current_time;
use crate::database::enums::database_error::DatabaseError;
use crate::database::enums::peer_status::PeerStatus;
use crate::database::structs::announce_record::AnnounceRecord;
use crate::database::structs::memory_peer::MemoryPeer;
use crate::database::structs::memory_persistence::MemoryPersistence;
use crate::database::structs::peer_entry::PeerEntry;
use crate::database::structs::peer_stats::PeerStats;
use crate::database::structs::torrent_summary::TorrentSummary;
use crate::database::traits::persistence::Persistence;
use crate::torrent::structs::torrent::Torrent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

const LOG_PREFIX: &str = "[Memory]";

impl MemoryPersistence {
    pub fn new() -> MemoryPersistence
    {
        MemoryPersistence::default()
    }

    fn live_peers<F>(&self, info_hash: InfoHash, excluded_peer_id: PeerId, mut visit: F)
    where
        F: FnMut(&PeerId, &MemoryPeer)
    {
        let now = current_time();
        let lock = self.peers.read();
        if let Some(swarm) = lock.get(&info_hash) {
            swarm.iter()
                .filter(|(peer_id, peer)| **peer_id != excluded_peer_id && peer.expires > now)
                .for_each(|(peer_id, peer)| visit(peer_id, peer));
        }
    }
}

#[async_trait]
impl Persistence for MemoryPersistence {
    async fn save_torrent(&self, torrent: Arc<Torrent>) -> Result<(), DatabaseError>
    {
        let info_hash = torrent.info_hash()?;
        torrent.length()?;
        torrent.pieces()?;
        debug!("{} Storing torrent {}", LOG_PREFIX, info_hash);
        self.torrents.write().insert(info_hash, torrent);
        Ok(())
    }

    async fn get_torrent(&self, info_hash: InfoHash) -> Result<Option<Arc<Torrent>>, DatabaseError>
    {
        Ok(self.torrents.read().get(&info_hash).cloned())
    }

    async fn get_all_info_hashes(&self) -> Result<Vec<TorrentSummary>, DatabaseError>
    {
        let lock = self.torrents.read();
        let mut summaries = Vec::with_capacity(lock.len());
        for (info_hash, torrent) in lock.iter() {
            summaries.push(TorrentSummary { info_hash: *info_hash, length: torrent.length()? });
        }
        Ok(summaries)
    }

    async fn save_announce(&self, announce: AnnounceRecord) -> Result<(), DatabaseError>
    {
        let expires = announce.expires_at(current_time());
        let mut lock = self.peers.write();
        let swarm = lock.entry(announce.info_hash).or_insert_with(BTreeMap::new);
        let status = announce.status
            .or_else(|| swarm.get(&announce.peer_id).map(|peer| peer.status))
            .unwrap_or(PeerStatus::Incomplete);
        swarm.insert(announce.peer_id, MemoryPeer {
            ip: announce.ip,
            port: announce.port,
            uploaded: announce.uploaded,
            downloaded: announce.downloaded,
            left: announce.left,
            status,
            expires,
        });
        Ok(())
    }

    async fn get_peers(&self, info_hash: InfoHash, excluded_peer_id: PeerId) -> Result<Vec<PeerEntry>, DatabaseError>
    {
        let mut peers = Vec::new();
        self.live_peers(info_hash, excluded_peer_id, |peer_id, peer| {
            peers.push(PeerEntry { peer_id: *peer_id, ip: peer.ip, port: peer.port });
        });
        Ok(peers)
    }

    async fn get_peer_stats(&self, info_hash: InfoHash, excluded_peer_id: PeerId) -> Result<PeerStats, DatabaseError>
    {
        let mut stats = PeerStats::default();
        self.live_peers(info_hash, excluded_peer_id, |_, peer| {
            match peer.status {
                PeerStatus::Complete => stats.complete += 1,
                PeerStatus::Incomplete => stats.incomplete += 1
            }
        });
        Ok(stats)
    }
}
