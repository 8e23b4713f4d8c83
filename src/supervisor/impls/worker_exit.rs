use std::fmt;
use std::fmt::Formatter;
use tokio::task::JoinError;
use crate::supervisor::enums::worker_exit::WorkerExit;

impl From<JoinError> for WorkerExit {
    fn from(error: JoinError) -> Self {
        if error.is_cancelled() {
            return WorkerExit::Cancelled;
        }
        let payload = error.into_panic();
        let message = payload.downcast_ref::<&str>().map(|message| message.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| String::from("unknown panic"));
        WorkerExit::Crashed(message)
    }
}

impl fmt::Display for WorkerExit {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            WorkerExit::Finished => write!(f, "finished"),
            WorkerExit::Crashed(message) => write!(f, "crashed: {message}"),
            WorkerExit::Cancelled => write!(f, "cancelled")
        }
    }
}
