use std::fmt::Debug;
use crate::file::enums::file_error::FileError;

/// Read-only view on a single payload file.
pub trait FileSource: Send + Sync + Debug {
    fn path(&self) -> String;

    /// File name without any directory component.
    fn basename(&self) -> String;

    fn size(&self) -> Result<u64, FileError>;

    /// Reads up to `length` bytes starting at `offset`. Fewer bytes come back
    /// when the range runs past the end of the file.
    fn read_range(&self, offset: u64, length: usize) -> Result<Vec<u8>, FileError>;

    /// Concatenated 20 byte SHA-1 digests of consecutive `piece_size` chunks.
    fn hash_pieces(&self, piece_size: u64) -> Result<Vec<u8>, FileError>;
}
