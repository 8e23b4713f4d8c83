use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use log::debug;
use parking_lot::Mutex;
use sha1::{Digest, Sha1};
use crate::file::enums::file_error::FileError;
use crate::file::structs::local_file::LocalFile;
use crate::file::traits::file_source::FileSource;

impl LocalFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<LocalFile, FileError>
    {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(FileError::NotExists(path.to_string_lossy().into_owned()));
        }
        let path = path.canonicalize().map_err(|_| FileError::NotExists(path.to_string_lossy().into_owned()))?;
        Ok(LocalFile {
            path,
            handle: Mutex::new(None),
        })
    }

    fn with_handle<T>(&self, action: impl FnOnce(&mut File) -> std::io::Result<T>) -> Result<T, FileError>
    {
        let mut lock = self.handle.lock();
        let file = match lock.take() {
            Some(file) => file,
            None => {
                debug!("[FILE] Opening {} for reading", self.path.display());
                File::open(&self.path).map_err(|source| self.unreadable(source))?
            }
        };
        let file = lock.insert(file);
        action(file).map_err(|source| self.unreadable(source))
    }

    fn unreadable(&self, source: std::io::Error) -> FileError
    {
        FileError::Unreadable { path: self.path(), source }
    }
}

impl FileSource for LocalFile {
    fn path(&self) -> String
    {
        self.path.to_string_lossy().into_owned()
    }

    fn basename(&self) -> String
    {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path())
    }

    fn size(&self) -> Result<u64, FileError>
    {
        std::fs::metadata(&self.path)
            .map(|metadata| metadata.len())
            .map_err(|source| self.unreadable(source))
    }

    fn read_range(&self, offset: u64, length: usize) -> Result<Vec<u8>, FileError>
    {
        self.with_handle(|file| {
            file.seek(SeekFrom::Start(offset))?;
            let mut buffer = Vec::with_capacity(length);
            (&mut *file).take(length as u64).read_to_end(&mut buffer)?;
            Ok(buffer)
        })
    }

    fn hash_pieces(&self, piece_size: u64) -> Result<Vec<u8>, FileError>
    {
        self.with_handle(|file| {
            file.seek(SeekFrom::Start(0))?;
            let mut pieces = Vec::new();
            let mut buffer = Vec::with_capacity(piece_size as usize);
            loop {
                buffer.clear();
                (&mut *file).take(piece_size).read_to_end(&mut buffer)?;
                if buffer.is_empty() {
                    break;
                }
                pieces.extend_from_slice(&Sha1::digest(&buffer));
                if (buffer.len() as u64) < piece_size {
                    break;
                }
            }
            Ok(pieces)
        })
    }
}
