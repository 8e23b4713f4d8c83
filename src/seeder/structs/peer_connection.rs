use std::net::SocketAddr;
use std::sync::Arc;
use crate::seeder::enums::connection_state::ConnectionState;
use crate::seeder::structs::peer_context::PeerContext;
use crate::torrent::structs::torrent::Torrent;
use crate::tracker::structs::peer_id::PeerId;

pub struct PeerConnection<S> {
    pub(crate) stream: S,
    pub(crate) peer_addr: Option<SocketAddr>,
    pub(crate) context: Arc<PeerContext>,
    pub(crate) state: ConnectionState,
    pub(crate) torrent: Option<Arc<Torrent>>,
    pub(crate) remote_peer_id: Option<PeerId>,
    pub(crate) bytes_sent: u64,
    pub(crate) bytes_received: u64,
    pub(crate) data_sent: u64,
}
