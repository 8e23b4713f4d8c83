/// In-memory backend.
pub mod memory_persistence;

/// SQLite backend.
pub mod sqlite_persistence;

/// Parsing and formatting of peer states.
pub mod peer_status;

/// Expiry computation of announces.
pub mod announce_record;
