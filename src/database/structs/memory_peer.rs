use std::net::IpAddr;
use crate::database::enums::peer_status::PeerStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryPeer {
    pub ip: IpAddr,
    pub port: u16,
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
    pub status: PeerStatus,
    pub expires: u64,
}
