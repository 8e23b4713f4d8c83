use std::net::IpAddr;
use crate::tracker::structs::peer_id::PeerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeerEntry {
    pub peer_id: PeerId,
    pub ip: IpAddr,
    pub port: u16,
}
