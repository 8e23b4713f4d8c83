//! Real-time statistics tracking.
//!
//! Atomic counters shared by the HTTP tracker and the seeding peer. They are
//! printed periodically by the console logger in `main`.
//!
//! # Example
//!
//! ```rust,ignore
//! use torrust_seedtracker::stats::enums::stats_event::StatsEvent;
//!
//! stats.update_stats(StatsEvent::Tcp4AnnouncesHandled, 1);
//! let snapshot = stats.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;
