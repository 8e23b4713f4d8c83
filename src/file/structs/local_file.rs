use std::fs::File;
use std::path::PathBuf;
use parking_lot::Mutex;

/// A file on disk. The read handle is opened on first use and reused.
#[derive(Debug)]
pub struct LocalFile {
    pub(crate) path: PathBuf,
    pub(crate) handle: Mutex<Option<File>>,
}
