#[cfg(test)]
mod file_tests {
    use std::io::Write;
    use sha1::{Digest, Sha1};
    use crate::file::enums::file_error::FileError;
    use crate::file::structs::local_file::LocalFile;
    use crate::file::traits::file_source::FileSource;

    fn payload_file(content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_open_missing_file() {
        let directory = tempfile::tempdir().unwrap();
        let result = LocalFile::open(directory.path().join("missing.bin"));
        assert!(matches!(result, Err(FileError::NotExists(_))));
        assert!(matches!(LocalFile::open(directory.path()), Err(FileError::NotExists(_))));
    }

    #[test]
    fn test_size_basename_and_ranges() {
        let payload = payload_file(b"0123456789");
        let file = LocalFile::open(payload.path()).unwrap();

        assert_eq!(file.size().unwrap(), 10);
        assert_eq!(file.basename(), payload.path().file_name().unwrap().to_string_lossy());
        assert_eq!(file.read_range(2, 3).unwrap(), b"234".to_vec());
        assert_eq!(file.read_range(8, 5).unwrap(), b"89".to_vec());
        assert_eq!(file.read_range(0, 1).unwrap(), b"0".to_vec());
        assert!(file.read_range(20, 4).unwrap().is_empty());
    }

    #[test]
    fn test_hash_pieces() {
        let payload = payload_file(b"0123456789");
        let file = LocalFile::open(payload.path()).unwrap();

        let mut expected = Vec::new();
        for chunk in [&b"0123"[..], b"4567", b"89"] {
            expected.extend_from_slice(&Sha1::digest(chunk));
        }
        assert_eq!(file.hash_pieces(4).unwrap(), expected);
        assert_eq!(file.hash_pieces(5).unwrap().len(), 40);
        assert_eq!(file.hash_pieces(1024).unwrap(), Sha1::digest(b"0123456789").to_vec());
    }

    #[test]
    fn test_hash_pieces_of_empty_file() {
        let payload = payload_file(b"");
        let file = LocalFile::open(payload.path()).unwrap();
        assert!(file.hash_pieces(4).unwrap().is_empty());
    }
}
