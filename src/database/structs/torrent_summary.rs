use crate::tracker::structs::info_hash::InfoHash;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TorrentSummary {
    pub info_hash: InfoHash,
    pub length: u64,
}
