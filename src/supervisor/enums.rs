pub mod worker_exit;
