use std::sync::Arc;
use async_trait::async_trait;

#[async_trait]
pub trait ConcurrentUnit: Send + Sync + 'static {
    /// Used to tag log lines of this unit.
    fn name(&self) -> &'static str;

    fn desired_worker_count(&self) -> usize;

    /// Guarded units get every ended worker replaced in the same slot.
    fn is_guarded(&self) -> bool;

    /// Body of one worker. `slot` lies in `0..desired_worker_count()`.
    async fn run_after_spawn(self: Arc<Self>, slot: usize);
}
