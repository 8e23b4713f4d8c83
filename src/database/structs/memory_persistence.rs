use std::collections::BTreeMap;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::database::structs::memory_peer::MemoryPeer;
use crate::torrent::structs::torrent::Torrent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

#[derive(Debug, Default)]
pub struct MemoryPersistence {
    pub(crate) torrents: RwLock<BTreeMap<InfoHash, Arc<Torrent>>>,
    pub(crate) peers: RwLock<BTreeMap<InfoHash, BTreeMap<PeerId, MemoryPeer>>>,
}
