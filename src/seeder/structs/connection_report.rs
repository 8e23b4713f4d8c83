use crate::tracker::structs::peer_id::PeerId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionReport {
    pub reason: String,
    pub remote_peer_id: Option<PeerId>,
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub data_sent: u64,
}
