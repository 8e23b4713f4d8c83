use std::sync::Arc;
use crate::database::traits::persistence::Persistence;
use crate::stats::structs::stats_atomics::StatsAtomics;

#[derive(Clone)]
pub struct TrackerCore {
    pub persistence: Arc<dyn Persistence>,
    pub stats: Arc<StatsAtomics>,
}
