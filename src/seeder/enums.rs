/// Current phase of a peer connection.
pub mod connection_state;

/// Peer wire message type byte.
pub mod message_id;

/// Result of handling one step of a connection.
pub mod message_outcome;

/// Setup failures of the seeder.
pub mod seeder_error;
