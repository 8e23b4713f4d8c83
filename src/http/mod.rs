//! HTTP tracker surface.
//!
//! Serves `GET /announce` on top of the tracker core. Every response is a
//! bencoded dictionary with status 200, problems are reported through the
//! `failure reason` key.

/// Data structures shared with the request handlers.
pub mod structs;

/// Server setup and request handlers.
#[allow(clippy::module_inception)]
pub mod http;

#[cfg(test)]
mod tests;
