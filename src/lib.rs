//! # Torrust Seedtracker
//!
//! A minimal BitTorrent tracker that also seeds the torrents it registers.
//!
//! ## Overview
//!
//! The binary runs two services against one shared persistence layer. The HTTP
//! tracker answers `/announce` requests with bencoded peer lists, and the seed
//! server accepts peer wire connections and serves pieces of registered files.
//! The seed server announces itself to the same persistence so downloaders find
//! it in every swarm it seeds.
//!
//! ## Features
//!
//! - **Bencode**: strict decoder, canonical encoder and serde bridges
//! - **Torrents**: single-file metainfo with lazily derived, cached piece hashes
//! - **Tracker**: BEP 3 announces, BEP 23 compact peer lists
//! - **Persistence**: in-memory or SQLite through `sqlx`
//! - **Seeder**: handshake, full bitfield, unchoke and block serving over TCP
//! - **Supervisor**: restarts crashed workers and stops them all on shutdown
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use torrust_seedtracker::config::structs::configuration::Configuration;
//! use torrust_seedtracker::database::database::persistence_connector;
//!
//! let config = Arc::new(Configuration::load_from_file(true)?);
//! let persistence = persistence_connector(config.clone(), false).await?;
//! ```
//!
//! ## Modules
//!
//! - [`bencode`] - Bencode values, codec and serde bridges
//! - [`common`] - Query parsing, logging setup and helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`database`] - Persistence trait with memory and SQLite backends
//! - [`file`] - Read-only file access used for hashing and serving
//! - [`http`] - HTTP tracker endpoint
//! - [`seeder`] - Peer wire protocol seeding peer
//! - [`stats`] - Atomic runtime counters
//! - [`structs`] - CLI argument parsing
//! - [`supervisor`] - Worker pool supervision
//! - [`torrent`] - Torrent metadata engine
//! - [`tracker`] - Announce validation and peer list responses

/// Bencode codec.
///
/// Parses and encodes bencoded byte strings, and maps them to and from
/// native Rust types through serde.
pub mod bencode;

/// Common utilities and shared functionality.
///
/// Contains helper functions for query parsing, hex conversion,
/// logging setup, and error handling used across all modules.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, validating and saving the TOML configuration.
pub mod config;

/// Persistence module.
///
/// Stores torrents and announced peers either in memory or in SQLite.
pub mod database;

/// Local file access.
pub mod file;

/// HTTP tracker protocol implementation.
///
/// Handles announce requests according to the BitTorrent tracker protocol.
pub mod http;

/// Seeding peer speaking the BitTorrent peer wire protocol.
pub mod seeder;

/// Statistics tracking module.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Supervision of concurrent worker pools.
pub mod supervisor;

/// Torrent metadata engine.
///
/// Derives the info dictionary, piece hashes and info hash of a single file
/// and reads blocks back out of it.
pub mod torrent;

/// Core tracker logic.
///
/// Validates announce queries, records peers and builds bencoded responses.
pub mod tracker;
