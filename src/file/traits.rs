/// Read-only view on a payload file.
pub mod file_source;
