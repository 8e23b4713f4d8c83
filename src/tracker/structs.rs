/// Validated announce parameters.
pub mod announce_query_request;

/// 20-byte torrent identifier.
pub mod info_hash;

/// Serde visitor for [`info_hash::InfoHash`].
pub mod info_hash_visitor;

/// 20-byte peer identifier.
pub mod peer_id;

/// Serde visitor for [`peer_id::PeerId`].
pub mod peer_id_visitor;

/// Announce handling and torrent registration.
pub mod tracker_core;
