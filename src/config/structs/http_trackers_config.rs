use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HttpTrackersConfig {
    pub enabled: bool,
    pub bind_address: String,
    /// Header holding the client address when running behind a proxy. Empty disables it.
    pub real_ip: String,
    pub keep_alive: u64,
    pub request_timeout: u64,
    pub disconnect_timeout: u64,
    pub max_connections: u64,
    pub threads: u64,
}
