pub mod announce_event;
pub mod info_hash;
pub mod info_hash_visitor;
pub mod peer_id;
pub mod peer_id_visitor;
pub mod tracker_core;
