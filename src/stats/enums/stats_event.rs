//! Statistics event types for tracking various metrics.

use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// # Categories
///
/// - **TCP IPv4/IPv6**: announces served by the HTTP tracker
/// - **HTTP**: failures and unknown requests
/// - **Seeder**: peer connections, traffic and tracker announces
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Tcp4AnnouncesHandled,
    Tcp6AnnouncesHandled,
    HttpFailure,
    HttpNotFound,
    TorrentsCreated,
    SeederConnectionsHandled,
    SeederConnectionsClosed,
    SeederBytesSent,
    SeederBytesReceived,
    SeederDataSent,
    SeederAnnounces,
    WorkerRestarts,
}
