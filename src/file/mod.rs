//! Access to the payload files that get seeded.
//!
//! Torrents never touch the filesystem directly; they read through the
//! [`FileSource`](traits::file_source::FileSource) trait so the seeding code
//! can be exercised against any byte source.

/// File errors.
pub mod enums;

/// File source implementations.
pub mod structs;

/// Implementation blocks for file sources.
pub mod impls;

/// The file source contract.
pub mod traits;

#[cfg(test)]
mod tests;
