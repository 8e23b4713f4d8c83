use std::sync::Arc;
use async_trait::async_trait;
use crate::database::enums::database_error::DatabaseError;
use crate::database::structs::announce_record::AnnounceRecord;
use crate::database::structs::peer_entry::PeerEntry;
use crate::database::structs::peer_stats::PeerStats;
use crate::database::structs::torrent_summary::TorrentSummary;
use crate::torrent::structs::torrent::Torrent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

#[async_trait]
pub trait Persistence: Send + Sync {
    /// Inserts the torrent or replaces the stored one with the same info hash.
    async fn save_torrent(&self, torrent: Arc<Torrent>) -> Result<(), DatabaseError>;

    /// Active torrent with the given info hash, if any.
    async fn get_torrent(&self, info_hash: InfoHash) -> Result<Option<Arc<Torrent>>, DatabaseError>;

    async fn get_all_info_hashes(&self) -> Result<Vec<TorrentSummary>, DatabaseError>;

    async fn save_announce(&self, announce: AnnounceRecord) -> Result<(), DatabaseError>;

    /// Unexpired peers of a swarm, without `excluded_peer_id`.
    async fn get_peers(&self, info_hash: InfoHash, excluded_peer_id: PeerId) -> Result<Vec<PeerEntry>, DatabaseError>;

    /// Counters over the same records `get_peers` returns.
    async fn get_peer_stats(&self, info_hash: InfoHash, excluded_peer_id: PeerId) -> Result<PeerStats, DatabaseError>;

    /// Called by every freshly spawned worker before it uses the backend.
    async fn reset_after_spawn(&self) -> Result<(), DatabaseError>
    {
        Ok(())
    }
}
