/// One announce as written to storage.
pub mod announce_record;

/// Peer as handed out in peer lists.
pub mod peer_entry;

/// Seeder and leecher counters of a swarm.
pub mod peer_stats;

/// Info hash and payload length of a stored torrent.
pub mod torrent_summary;

/// In-memory backend.
pub mod memory_persistence;

/// Stored announce inside the in-memory backend.
pub mod memory_peer;

/// SQLite backend.
pub mod sqlite_persistence;
