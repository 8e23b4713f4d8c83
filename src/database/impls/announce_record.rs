use crate::database::structs::announce_record::AnnounceRecord;

/// TTL used when an announce does not carry one.
pub const DEFAULT_TTL: u64 = 31536000;

impl AnnounceRecord {
    /// Unix timestamp after which the record no longer counts.
    pub fn expires_at(&self, now: u64) -> u64 {
        now.saturating_add(self.ttl.unwrap_or(DEFAULT_TTL))
    }
}
