//! Worker supervision.
//!
//! A [`Supervisor`](structs::supervisor::Supervisor) keeps a fixed number of
//! workers of one [`ConcurrentUnit`](traits::concurrent_unit::ConcurrentUnit)
//! alive. Each worker owns a slot number that survives restarts. Guarded
//! units get a fresh worker in the same slot whenever one ends, unguarded
//! units are only reaped. A shutdown signal aborts every live worker.

/// Ways a worker can end.
pub mod enums;

/// Implementation blocks for the supervisor.
pub mod impls;

/// The supervisor and its observable state.
pub mod structs;

/// The unit-of-work contract.
pub mod traits;
