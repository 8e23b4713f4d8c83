/// Available persistence engines.
pub mod database_drivers;

/// Errors raised by persistence backends.
pub mod database_error;

/// Download state of an announced peer.
pub mod peer_status;
