use std::collections::BTreeSet;
use std::sync::atomic::AtomicU64;
use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct SupervisorState {
    pub(crate) live_slots: Mutex<BTreeSet<usize>>,
    pub(crate) spawned: AtomicU64,
    pub(crate) restarts: AtomicU64,
}
