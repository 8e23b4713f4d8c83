use thiserror::Error;
use crate::bencode::enums::bencode_error::BencodeError;
use crate::file::enums::file_error::FileError;

#[derive(Error, Debug)]
pub enum TorrentError {
    #[error("Invalid piece size")]
    InvalidPieceSize,

    #[error("No announce URLs given")]
    EmptyAnnounceList,

    #[error("Invalid piece index {piece_index}, the torrent has {piece_count} pieces")]
    InvalidPieceIndex { piece_index: u64, piece_count: u64 },

    #[error("Invalid block of {length} bytes at offset {block_begin} for pieces of {piece_size} bytes")]
    InvalidBlock { block_begin: u64, length: u64, piece_size: u64 },

    #[error(transparent)]
    File(#[from] FileError),

    #[error(transparent)]
    Bencode(#[from] BencodeError),
}
