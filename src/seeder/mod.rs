//! Built-in seeding peer.
//!
//! Speaks the BitTorrent peer wire protocol for every torrent known to the
//! persistence backend. The seed always owns the complete file, so after the
//! handshake it advertises a full bitfield, unchokes the remote peer and then
//! answers `request` messages with `piece` messages. Everything else the
//! remote side sends is read and dropped.
//!
//! Two supervised units drive it:
//!
//! - [`SeedPeer`](structs::seed_peer::SeedPeer): a pool of accept loops on one
//!   shared listener, one connection at a time per worker
//! - [`SeedServer`](structs::seed_server::SeedServer): slot 0 supervises the
//!   seed peer pool, slot 1 announces every torrent to the tracker

/// Wire constants, message framing and the listener.
#[allow(clippy::module_inception)]
pub mod seeder;

/// Message ids, outcomes, connection states and errors.
pub mod enums;

/// Implementation blocks for the seeder.
pub mod impls;

/// Connections, contexts and the supervised units.
pub mod structs;
