use std::sync::Arc;
use once_cell::sync::OnceCell;
use sha1::{Digest, Sha1};
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::file::traits::file_source::FileSource;
use crate::torrent::enums::torrent_error::TorrentError;
use crate::torrent::structs::torrent::Torrent;
use crate::torrent::structs::torrent_attributes::TorrentAttributes;
use crate::tracker::structs::info_hash::InfoHash;
use crate::{ben_bytes, ben_int, ben_list, ben_map};

impl Torrent {
    /// Starts from the bare minimum. Everything else is derived lazily.
    pub fn new(file: Arc<dyn FileSource>, size_piece: u64, name: Option<String>) -> Result<Torrent, TorrentError>
    {
        Self::from_attributes(file, TorrentAttributes {
            size_piece,
            name,
            ..Default::default()
        })
    }

    pub fn from_attributes(file: Arc<dyn FileSource>, attributes: TorrentAttributes) -> Result<Torrent, TorrentError>
    {
        if attributes.size_piece == 0 {
            return Err(TorrentError::InvalidPieceSize);
        }
        let file_path = file.path();
        let name = attributes.name.unwrap_or_else(|| file.basename());
        Ok(Torrent {
            file,
            size_piece: attributes.size_piece,
            file_path,
            name,
            length: attributes.length.map(OnceCell::with_value).unwrap_or_default(),
            pieces: attributes.pieces.map(OnceCell::with_value).unwrap_or_default(),
            info_hash: attributes.info_hash.map(OnceCell::with_value).unwrap_or_default(),
        })
    }

    pub fn size_piece(&self) -> u64
    {
        self.size_piece
    }

    pub fn file_path(&self) -> &str
    {
        &self.file_path
    }

    pub fn name(&self) -> &str
    {
        &self.name
    }

    pub fn length(&self) -> Result<u64, TorrentError>
    {
        Ok(*self.length.get_or_try_init(|| self.file.size())?)
    }

    pub fn pieces(&self) -> Result<&[u8], TorrentError>
    {
        Ok(self.pieces.get_or_try_init(|| self.file.hash_pieces(self.size_piece))?)
    }

    pub fn piece_count(&self) -> Result<u64, TorrentError>
    {
        Ok(self.length()?.div_ceil(self.size_piece))
    }

    pub fn info_hash(&self) -> Result<InfoHash, TorrentError>
    {
        self.info_hash.get_or_try_init(|| -> Result<InfoHash, TorrentError> {
            let digest = Sha1::digest(self.info_dictionary()?.encode());
            let mut info_hash = InfoHash([0u8; 20]);
            info_hash.0.copy_from_slice(&digest);
            Ok(info_hash)
        }).copied()
    }

    pub fn info_dictionary(&self) -> Result<BencodeValue, TorrentError>
    {
        Ok(ben_map! {
            "piece length" => ben_int!(self.size_piece),
            "pieces" => ben_bytes!(self.pieces()?),
            "name" => ben_bytes!(self.name),
            "length" => ben_int!(self.length()?)
        })
    }

    /// Bencoded metainfo file. The first URL becomes `announce`, every URL
    /// gets its own tier in `announce-list`.
    pub fn create_torrent_file(&self, announce_urls: &[String]) -> Result<Vec<u8>, TorrentError>
    {
        let Some(announce) = announce_urls.first() else {
            return Err(TorrentError::EmptyAnnounceList);
        };
        let announce_list = announce_urls.iter().map(|url| ben_list!(ben_bytes!(url))).collect::<Vec<_>>();
        Ok(ben_map! {
            "info" => self.info_dictionary()?,
            "announce" => ben_bytes!(announce),
            "announce-list" => BencodeValue::List(announce_list)
        }.encode())
    }

    pub fn read_block(&self, piece_index: u64, block_begin: u64, length: u64) -> Result<Vec<u8>, TorrentError>
    {
        let piece_count = self.piece_count()?;
        if piece_index >= piece_count {
            return Err(TorrentError::InvalidPieceIndex { piece_index, piece_count });
        }
        if block_begin.checked_add(length).is_none_or(|end| end > self.size_piece) {
            return Err(TorrentError::InvalidBlock { block_begin, length, piece_size: self.size_piece });
        }
        let offset = piece_index * self.size_piece + block_begin;
        Ok(self.file.read_range(offset, length as usize)?)
    }
}
