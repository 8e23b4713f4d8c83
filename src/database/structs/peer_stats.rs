#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeerStats {
    pub complete: u64,
    pub incomplete: u64,
}
