#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerExit {
    Finished,
    Crashed(String),
    Cancelled,
}
