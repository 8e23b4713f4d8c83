use crate::tracker::structs::info_hash::InfoHash;

/// Attributes of a torrent as they were stored. Fields left `None` are
/// derived from the file again when needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TorrentAttributes {
    pub size_piece: u64,
    pub name: Option<String>,
    pub length: Option<u64>,
    pub pieces: Option<Vec<u8>>,
    pub info_hash: Option<InfoHash>,
}
