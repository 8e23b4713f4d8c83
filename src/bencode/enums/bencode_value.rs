use std::collections::BTreeMap;

/// A bencoded value.
///
/// Dictionaries are stored in a `BTreeMap` keyed by raw bytes, so iteration
/// and serialization always happen in ascending byte order of the keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BencodeValue {
    Integer(i64),
    Bytes(Vec<u8>),
    List(Vec<BencodeValue>),
    Dictionary(BTreeMap<Vec<u8>, BencodeValue>),
}
