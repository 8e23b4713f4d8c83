#[cfg(test)]
mod torrent_tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use sha1::{Digest, Sha1};
    use crate::bencode::bencode::decode;
    use crate::file::enums::file_error::FileError;
    use crate::file::traits::file_source::FileSource;
    use crate::torrent::enums::torrent_error::TorrentError;
    use crate::torrent::structs::torrent::Torrent;
    use crate::torrent::structs::torrent_attributes::TorrentAttributes;
    use crate::tracker::structs::info_hash::InfoHash;

    #[derive(Debug, Default)]
    struct CountingFile {
        content: Vec<u8>,
        size_calls: AtomicUsize,
        hash_calls: AtomicUsize,
    }

    impl CountingFile {
        fn new(content: &[u8]) -> Arc<CountingFile> {
            Arc::new(CountingFile { content: content.to_vec(), ..Default::default() })
        }
    }

    impl FileSource for CountingFile {
        fn path(&self) -> String {
            String::from("/srv/seed/payload.bin")
        }

        fn basename(&self) -> String {
            String::from("payload.bin")
        }

        fn size(&self) -> Result<u64, FileError> {
            self.size_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.content.len() as u64)
        }

        fn read_range(&self, offset: u64, length: usize) -> Result<Vec<u8>, FileError> {
            let start = (offset as usize).min(self.content.len());
            let end = (start + length).min(self.content.len());
            Ok(self.content[start..end].to_vec())
        }

        fn hash_pieces(&self, piece_size: u64) -> Result<Vec<u8>, FileError> {
            self.hash_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.content.chunks(piece_size as usize).flat_map(|chunk| Sha1::digest(chunk).to_vec()).collect())
        }
    }

    #[test]
    fn test_rejects_zero_piece_size() {
        let result = Torrent::new(CountingFile::new(b"abc"), 0, None);
        assert!(matches!(result, Err(TorrentError::InvalidPieceSize)));
    }

    #[test]
    fn test_derives_metadata_once() {
        let file = CountingFile::new(b"0123456789");
        let torrent = Torrent::new(file.clone(), 4, None).unwrap();

        assert_eq!(torrent.name(), "payload.bin");
        assert_eq!(torrent.file_path(), "/srv/seed/payload.bin");
        assert_eq!(torrent.length().unwrap(), 10);
        assert_eq!(torrent.piece_count().unwrap(), 3);
        assert_eq!(torrent.pieces().unwrap().len(), 60);

        let first = torrent.info_hash().unwrap();
        let second = torrent.info_hash().unwrap();
        assert_eq!(first, second);
        assert_eq!(file.size_calls.load(Ordering::SeqCst), 1);
        assert_eq!(file.hash_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_info_hash_matches_encoded_info_dictionary() {
        let torrent = Torrent::new(CountingFile::new(b"0123456789"), 4, Some(String::from("renamed.bin"))).unwrap();

        let mut expected = b"d6:lengthi10e4:name11:renamed.bin12:piece lengthi4e6:pieces60:".to_vec();
        expected.extend_from_slice(torrent.pieces().unwrap());
        expected.push(b'e');

        assert_eq!(torrent.info_dictionary().unwrap().encode(), expected);
        assert_eq!(torrent.info_hash().unwrap().0.to_vec(), Sha1::digest(&expected).to_vec());
    }

    #[test]
    fn test_info_hash_depends_only_on_metadata() {
        let first = Torrent::new(CountingFile::new(b"0123456789"), 4, Some(String::from("same.bin"))).unwrap();
        let second = Torrent::new(CountingFile::new(b"0123456789"), 4, Some(String::from("same.bin"))).unwrap();
        assert_eq!(first.info_hash().unwrap(), second.info_hash().unwrap());

        let renamed = Torrent::new(CountingFile::new(b"0123456789"), 4, Some(String::from("other.bin"))).unwrap();
        assert_eq!(renamed.pieces().unwrap(), first.pieces().unwrap());
        assert_eq!(renamed.length().unwrap(), first.length().unwrap());
        assert_ne!(renamed.info_hash().unwrap(), first.info_hash().unwrap());
    }

    #[test]
    fn test_restored_torrent_does_not_touch_the_file() {
        let file = CountingFile::new(b"0123456789");
        let torrent = Torrent::from_attributes(file.clone(), TorrentAttributes {
            size_piece: 4,
            name: Some(String::from("stored.bin")),
            length: Some(10),
            pieces: Some(vec![7u8; 60]),
            info_hash: Some(InfoHash([9u8; 20])),
        }).unwrap();

        assert_eq!(torrent.info_hash().unwrap(), InfoHash([9u8; 20]));
        assert_eq!(torrent.pieces().unwrap(), &[7u8; 60][..]);
        assert_eq!(torrent.length().unwrap(), 10);
        assert_eq!(file.size_calls.load(Ordering::SeqCst), 0);
        assert_eq!(file.hash_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_create_torrent_file() {
        let torrent = Torrent::new(CountingFile::new(b"0123456789"), 4, None).unwrap();
        let urls = vec![String::from("http://a.example/announce"), String::from("http://b.example/announce")];

        let metainfo = decode(&torrent.create_torrent_file(&urls).unwrap()).unwrap();
        assert_eq!(metainfo.get(b"announce").and_then(|value| value.as_str()), Some("http://a.example/announce"));
        let tiers = metainfo.get(b"announce-list").and_then(|value| value.as_list()).unwrap();
        assert_eq!(tiers.len(), 2);
        assert_eq!(tiers[1].as_list().unwrap()[0].as_str(), Some("http://b.example/announce"));
        assert_eq!(metainfo.get(b"info").unwrap(), &torrent.info_dictionary().unwrap());

        assert!(matches!(torrent.create_torrent_file(&[]), Err(TorrentError::EmptyAnnounceList)));
    }

    #[test]
    fn test_read_block() {
        let torrent = Torrent::new(CountingFile::new(b"0123456789"), 4, None).unwrap();

        assert_eq!(torrent.read_block(0, 0, 4).unwrap(), b"0123".to_vec());
        assert_eq!(torrent.read_block(1, 1, 2).unwrap(), b"56".to_vec());
        assert_eq!(torrent.read_block(2, 0, 4).unwrap(), b"89".to_vec());
        assert!(matches!(torrent.read_block(3, 0, 1), Err(TorrentError::InvalidPieceIndex { piece_index: 3, piece_count: 3 })));
        assert!(matches!(torrent.read_block(0, 2, 3), Err(TorrentError::InvalidBlock { .. })));
        assert!(matches!(torrent.read_block(0, u64::MAX, 2), Err(TorrentError::InvalidBlock { .. })));
    }

    #[test]
    fn test_empty_file_has_no_blocks() {
        let torrent = Torrent::new(CountingFile::new(b""), 4, None).unwrap();
        assert_eq!(torrent.piece_count().unwrap(), 0);
        assert!(matches!(torrent.read_block(0, 0, 1), Err(TorrentError::InvalidPieceIndex { .. })));
    }
}
