use crate::tracker::enums::announce_event::AnnounceEvent;

impl AnnounceEvent {
    /// Unknown and empty values count as a regular update.
    pub fn from_query(value: Option<&[u8]>) -> AnnounceEvent
    {
        match value.map(|bytes| bytes.to_ascii_lowercase()).as_deref() {
            Some(b"completed") => AnnounceEvent::Completed,
            Some(b"started") => AnnounceEvent::Started,
            Some(b"stopped") => AnnounceEvent::Stopped,
            _ => AnnounceEvent::None
        }
    }
}
