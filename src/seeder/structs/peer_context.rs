use std::sync::Arc;
use std::time::Duration;
use crate::database::traits::persistence::Persistence;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::peer_id::PeerId;

#[derive(Clone)]
pub struct PeerContext {
    pub persistence: Arc<dyn Persistence>,
    pub stats: Arc<StatsAtomics>,
    /// Our own id, sent back in every handshake.
    pub peer_id: PeerId,
    /// Refuse peers once this many other seeders exist. 0 disables the cap.
    pub seeders_stop_seeding: u64,
    pub read_timeout: Option<Duration>,
}
