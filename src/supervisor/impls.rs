pub mod supervisor;
pub mod supervisor_state;
pub mod worker_exit;
