//! Torrent metadata engine.
//!
//! A [`Torrent`](structs::torrent::Torrent) describes one payload file cut
//! into fixed size pieces. Length, piece hashes and the info hash are derived
//! from the file on first use and cached afterwards, so a torrent restored
//! from storage with all attributes known never has to hash the payload again.

/// Torrent errors.
pub mod enums;

/// Torrent data structures.
pub mod structs;

/// Metadata derivation, torrent file creation and block reads.
pub mod impls;

#[cfg(test)]
mod tests;
