use std::collections::BTreeMap;
use crate::bencode::enums::bencode_value::BencodeValue;

/// A list or dictionary that has been opened but not yet closed.
///
/// Dictionaries alternate between waiting for a key and waiting for the value
/// of `pending_key`.
#[derive(Debug)]
pub enum ParserFrame {
    List(Vec<BencodeValue>),
    Dictionary {
        entries: BTreeMap<Vec<u8>, BencodeValue>,
        pending_key: Option<Vec<u8>>,
    },
}
