use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TorrentConfig {
    pub piece_size: u64,
    pub announce_urls: Vec<String>,
}
