pub mod supervisor;
pub mod supervisor_state;
