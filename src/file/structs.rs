/// A file on the local filesystem.
pub mod local_file;
