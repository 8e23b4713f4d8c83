/// Errors raised by file sources.
pub mod file_error;
