/// Errors raised while deriving metadata or reading blocks.
pub mod torrent_error;
