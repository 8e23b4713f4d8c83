use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new() -> StatsAtomics
    {
        let stats = StatsAtomics::default();
        stats.started.store(chrono::Utc::now().timestamp(), Ordering::SeqCst);
        stats
    }

    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            tcp4_announces_handled: self.tcp4_announces_handled.load(Ordering::SeqCst),
            tcp6_announces_handled: self.tcp6_announces_handled.load(Ordering::SeqCst),
            http_failure: self.http_failure.load(Ordering::SeqCst),
            http_not_found: self.http_not_found.load(Ordering::SeqCst),
            torrents_created: self.torrents_created.load(Ordering::SeqCst),
            seeder_connections_handled: self.seeder_connections_handled.load(Ordering::SeqCst),
            seeder_connections_closed: self.seeder_connections_closed.load(Ordering::SeqCst),
            seeder_bytes_sent: self.seeder_bytes_sent.load(Ordering::SeqCst),
            seeder_bytes_received: self.seeder_bytes_received.load(Ordering::SeqCst),
            seeder_data_sent: self.seeder_data_sent.load(Ordering::SeqCst),
            seeder_announces: self.seeder_announces.load(Ordering::SeqCst),
            worker_restarts: self.worker_restarts.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        let counter = self.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
        self.get_stats()
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        self.counter(event).store(value, Ordering::SeqCst);
        self.get_stats()
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::Tcp4AnnouncesHandled => &self.tcp4_announces_handled,
            StatsEvent::Tcp6AnnouncesHandled => &self.tcp6_announces_handled,
            StatsEvent::HttpFailure => &self.http_failure,
            StatsEvent::HttpNotFound => &self.http_not_found,
            StatsEvent::TorrentsCreated => &self.torrents_created,
            StatsEvent::SeederConnectionsHandled => &self.seeder_connections_handled,
            StatsEvent::SeederConnectionsClosed => &self.seeder_connections_closed,
            StatsEvent::SeederBytesSent => &self.seeder_bytes_sent,
            StatsEvent::SeederBytesReceived => &self.seeder_bytes_received,
            StatsEvent::SeederDataSent => &self.seeder_data_sent,
            StatsEvent::SeederAnnounces => &self.seeder_announces,
            StatsEvent::WorkerRestarts => &self.worker_restarts,
        }
    }
}
