use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::supervisor::structs::supervisor_state::SupervisorState;

pub struct Supervisor<U> {
    pub(crate) unit: Arc<U>,
    pub(crate) shutdown: watch::Receiver<bool>,
    pub(crate) state: Arc<SupervisorState>,
    pub(crate) restart_delay: Duration,
    pub(crate) stats: Option<Arc<StatsAtomics>>,
}
