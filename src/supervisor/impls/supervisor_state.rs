use std::sync::atomic::Ordering;
use crate::supervisor::structs::supervisor_state::SupervisorState;

impl SupervisorState {
    pub fn live_slots(&self) -> Vec<usize>
    {
        self.live_slots.lock().iter().copied().collect()
    }

    pub fn live_count(&self) -> usize
    {
        self.live_slots.lock().len()
    }

    pub fn spawned(&self) -> u64
    {
        self.spawned.load(Ordering::SeqCst)
    }

    pub fn restarts(&self) -> u64
    {
        self.restarts.load(Ordering::SeqCst)
    }

    pub(crate) fn mark_spawned(&self, slot: usize, restart: bool)
    {
        self.live_slots.lock().insert(slot);
        self.spawned.fetch_add(1, Ordering::SeqCst);
        if restart {
            self.restarts.fetch_add(1, Ordering::SeqCst);
        }
    }

    pub(crate) fn mark_reaped(&self, slot: usize)
    {
        self.live_slots.lock().remove(&slot);
    }

    pub(crate) fn clear(&self)
    {
        self.live_slots.lock().clear();
    }
}
