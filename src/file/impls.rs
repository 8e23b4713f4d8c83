/// `FileSource` implementation for local files.
pub mod local_file;
