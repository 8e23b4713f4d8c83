use crate::bencode::enums::bencode_value::BencodeValue;

/// Serializer that turns native values into a [`BencodeValue`] tree.
///
/// Floats, booleans, unit and `None` have no bencode counterpart and are
/// rejected with [`BencodeError::Build`](crate::bencode::enums::bencode_error::BencodeError::Build).
#[derive(Debug, Clone, Copy, Default)]
pub struct Builder;

#[derive(Debug, Default)]
pub struct SeqBuilder {
    pub(crate) items: Vec<BencodeValue>,
}

/// Collects map entries in insertion order until the map is closed.
///
/// Maps whose keys are exactly the integers `0..n` in order become lists,
/// every other map becomes a dictionary.
#[derive(Debug, Default)]
pub struct MapBuilder {
    pub(crate) entries: Vec<(BencodeValue, BencodeValue)>,
    pub(crate) pending_key: Option<BencodeValue>,
}
