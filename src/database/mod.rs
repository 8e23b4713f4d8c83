//! Persistence of torrents and peer announces.
//!
//! Every backend implements the [`Persistence`](traits::persistence::Persistence)
//! trait. Two engines are available:
//!
//! - `memory`: process local maps, nothing survives a restart
//! - `sqlite3`: a SQLite database through `sqlx`
//!
//! Announce records expire after their TTL. Expired records and the asking
//! peer itself are never part of peer lists or peer statistics.

/// Backend selection.
#[allow(clippy::module_inception)]
pub mod database;

/// Drivers, peer states and errors.
pub mod enums;

/// Implementation blocks for the backends.
pub mod impls;

/// Backend and record data structures.
pub mod structs;

/// The persistence contract.
pub mod traits;

#[cfg(test)]
mod tests;
