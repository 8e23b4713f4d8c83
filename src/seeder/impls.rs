pub mod message_id;
pub mod message_outcome;
pub mod peer_connection;
pub mod seed_peer;
pub mod seed_server;
