//! Tracker announce service.
//!
//! [`TrackerCore`](structs::tracker_core::TrackerCore) validates announce
//! requests, stores them through the persistence backend and answers with a
//! bencoded peer list. It never fails towards its caller: every problem ends
//! up as a `failure reason` in the response.
//!
//! It also registers new torrents and renders their `.torrent` files.

/// Announce events and tracker errors.
pub mod enums;

/// Implementation blocks for tracker structs.
pub mod impls;

/// Identifiers, requests and the tracker core.
pub mod structs;
