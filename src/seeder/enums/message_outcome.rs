#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageOutcome {
    Continue,
    /// Stop serving this peer, with the reason that gets logged.
    CloseConnection(String),
}
