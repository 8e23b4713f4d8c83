use std::sync::Arc;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::tracker::structs::tracker_core::TrackerCore;

pub struct HttpServiceData {
    pub tracker_core: Arc<TrackerCore>,
    pub http_trackers_config: Arc<HttpTrackersConfig>,
    pub announce_interval: u64,
}
