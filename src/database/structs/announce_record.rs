use std::net::IpAddr;
use crate::database::enums::peer_status::PeerStatus;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

/// A peer announce to be stored.
///
/// `status` left `None` keeps whatever status the peer had before (new peers
/// start as incomplete). `ttl` left `None` keeps the record for a year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnounceRecord {
    pub info_hash: InfoHash,
    pub peer_id: PeerId,
    pub ip: IpAddr,
    pub port: u16,
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
    pub status: Option<PeerStatus>,
    pub ttl: Option<u64>,
}
