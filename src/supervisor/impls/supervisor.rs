use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use log::{debug, info, warn};
use tokio::sync::watch;
use tokio::task::{Id, JoinSet};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::supervisor::enums::worker_exit::WorkerExit;
use crate::supervisor::structs::supervisor::Supervisor;
use crate::supervisor::structs::supervisor_state::SupervisorState;
use crate::supervisor::traits::concurrent_unit::ConcurrentUnit;

const LOG_PREFIX: &str = "[SUPERVISOR]";

impl<U: ConcurrentUnit> Supervisor<U> {
    /// `shutdown` flipping to `true`, or its sender going away, stops the supervisor.
    pub fn new(unit: Arc<U>, shutdown: watch::Receiver<bool>) -> Supervisor<U>
    {
        Supervisor {
            unit,
            shutdown,
            state: Arc::new(SupervisorState::default()),
            restart_delay: Duration::from_millis(100),
            stats: None,
        }
    }

    pub fn with_restart_delay(mut self, restart_delay: Duration) -> Supervisor<U>
    {
        self.restart_delay = restart_delay;
        self
    }

    pub fn with_stats(mut self, stats: Arc<StatsAtomics>) -> Supervisor<U>
    {
        self.stats = Some(stats);
        self
    }

    pub fn state(&self) -> Arc<SupervisorState>
    {
        self.state.clone()
    }

    fn spawn(&self, workers: &mut JoinSet<()>, slots: &mut HashMap<Id, usize>, slot: usize, restart: bool)
    {
        let unit = self.unit.clone();
        let delay = restart.then_some(self.restart_delay);
        let handle = workers.spawn(async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            unit.run_after_spawn(slot).await;
        });
        slots.insert(handle.id(), slot);
        self.state.mark_spawned(slot, restart);
        if restart && let Some(stats) = &self.stats {
            stats.update_stats(StatsEvent::WorkerRestarts, 1);
        }
        debug!("{} [{}] Spawned worker in slot {}", LOG_PREFIX, self.unit.name(), slot);
    }

    /// Runs until shutdown. Unguarded units also return once every worker ended.
    pub async fn run(self)
    {
        let mut shutdown = self.shutdown.clone();
        if *shutdown.borrow_and_update() {
            return;
        }
        let name = self.unit.name();
        let guarded = self.unit.is_guarded();
        let mut workers = JoinSet::new();
        let mut slots: HashMap<Id, usize> = HashMap::new();

        info!("{} [{}] Starting {} worker(s)", LOG_PREFIX, name, self.unit.desired_worker_count());
        for slot in 0..self.unit.desired_worker_count() {
            self.spawn(&mut workers, &mut slots, slot, false);
        }

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow_and_update() {
                        info!("{} [{}] Shutting down {} worker(s)", LOG_PREFIX, name, self.state.live_count());
                        workers.shutdown().await;
                        self.state.clear();
                        break;
                    }
                }
                joined = workers.join_next_with_id() => {
                    let (id, exit) = match joined {
                        None => {
                            info!("{} [{}] All workers ended", LOG_PREFIX, name);
                            break;
                        }
                        Some(Ok((id, ()))) => (id, WorkerExit::Finished),
                        Some(Err(error)) => (error.id(), WorkerExit::from(error))
                    };
                    let Some(slot) = slots.remove(&id) else {
                        continue;
                    };
                    self.state.mark_reaped(slot);
                    match &exit {
                        WorkerExit::Crashed(_) => warn!("{} [{}] Worker in slot {} {}", LOG_PREFIX, name, slot, exit),
                        _ => debug!("{} [{}] Worker in slot {} {}", LOG_PREFIX, name, slot, exit)
                    }
                    if guarded {
                        self.spawn(&mut workers, &mut slots, slot, true);
                    }
                }
            }
        }
    }
}
