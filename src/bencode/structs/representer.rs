use std::collections::btree_map;
use crate::bencode::enums::bencode_value::BencodeValue;

/// Deserializer reading native values out of a borrowed [`BencodeValue`].
#[derive(Debug, Clone, Copy)]
pub struct Representer<'a> {
    pub(crate) value: &'a BencodeValue,
}

#[derive(Debug)]
pub struct SeqRepresenter<'a> {
    pub(crate) items: std::slice::Iter<'a, BencodeValue>,
}

#[derive(Debug)]
pub struct MapRepresenter<'a> {
    pub(crate) entries: btree_map::Iter<'a, Vec<u8>, BencodeValue>,
    pub(crate) pending_value: Option<&'a BencodeValue>,
}

/// Dictionary keys are offered as strings when they are valid UTF-8 and as
/// raw bytes otherwise.
#[derive(Debug, Clone, Copy)]
pub struct KeyRepresenter<'a> {
    pub(crate) key: &'a [u8],
}
