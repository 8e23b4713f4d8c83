use thiserror::Error;
use crate::file::enums::file_error::FileError;
use crate::torrent::enums::torrent_error::TorrentError;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("[SQLite] {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Torrent(#[from] TorrentError),

    #[error(transparent)]
    File(#[from] FileError),

    #[error("Corrupt value stored in column {0}")]
    Corrupt(&'static str),
}
