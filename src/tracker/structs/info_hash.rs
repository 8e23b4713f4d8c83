//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// The SHA-1 digest of the bencoded "info" dictionary of a torrent. It
/// identifies a torrent towards the tracker and in the peer handshake.
///
/// # Example
///
/// ```rust
/// use torrust_seedtracker::tracker::structs::info_hash::InfoHash;
///
/// let hash = InfoHash([0u8; 20]);
/// assert_eq!(hash.to_string(), "0000000000000000000000000000000000000000");
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
