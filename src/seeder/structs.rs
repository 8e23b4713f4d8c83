/// Counters and close reason of a finished connection.
pub mod connection_report;

/// One remote peer served end to end.
pub mod peer_connection;

/// Everything a connection needs besides its socket.
pub mod peer_context;

/// Accept loop unit.
pub mod seed_peer;

/// Two-slot unit combining the accept loops and the announce loop.
pub mod seed_server;
