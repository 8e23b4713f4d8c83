use std::sync::Arc;
use once_cell::sync::OnceCell;
use crate::file::traits::file_source::FileSource;
use crate::tracker::structs::info_hash::InfoHash;

#[derive(Debug)]
pub struct Torrent {
    pub(crate) file: Arc<dyn FileSource>,
    pub(crate) size_piece: u64,
    pub(crate) file_path: String,
    pub(crate) name: String,
    pub(crate) length: OnceCell<u64>,
    pub(crate) pieces: OnceCell<Vec<u8>>,
    pub(crate) info_hash: OnceCell<InfoHash>,
}
