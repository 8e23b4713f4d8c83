/// A seedable single-file torrent.
pub mod torrent;

/// Previously derived attributes used to restore a torrent.
pub mod torrent_attributes;
