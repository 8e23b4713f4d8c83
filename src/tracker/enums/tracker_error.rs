use thiserror::Error;
use crate::bencode::enums::bencode_error::BencodeError;
use crate::database::enums::database_error::DatabaseError;
use crate::file::enums::file_error::FileError;
use crate::torrent::enums::torrent_error::TorrentError;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Torrent(#[from] TorrentError),

    #[error(transparent)]
    File(#[from] FileError),

    #[error(transparent)]
    Bencode(#[from] BencodeError),
}
