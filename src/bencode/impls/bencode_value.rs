use std::collections::BTreeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::ser::{SerializeMap, SerializeSeq};
use crate::bencode::enums::bencode_error::BencodeError;
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::bencode::enums::encode_step::EncodeStep;
use crate::bencode::structs::bencode_value_visitor::BencodeValueVisitor;
use crate::bencode::structs::representer::Representer;

impl BencodeValue {
    pub fn new_dictionary() -> BencodeValue
    {
        BencodeValue::Dictionary(BTreeMap::new())
    }

    pub fn new_list() -> BencodeValue
    {
        BencodeValue::List(Vec::new())
    }

    pub fn kind(&self) -> &'static str
    {
        match self {
            BencodeValue::Integer(_) => "integer",
            BencodeValue::Bytes(_) => "bytes",
            BencodeValue::List(_) => "list",
            BencodeValue::Dictionary(_) => "dictionary"
        }
    }

    pub fn encode(&self) -> Vec<u8>
    {
        let mut output = Vec::new();
        self.write_to(&mut output);
        output
    }

    /// Appends the canonical encoding. Nesting is walked with an explicit
    /// stack, so arbitrarily deep trees encode without recursion.
    pub fn write_to(&self, output: &mut Vec<u8>)
    {
        let mut steps = vec![EncodeStep::Value(self)];
        while let Some(step) = steps.pop() {
            match step {
                EncodeStep::End => output.push(b'e'),
                EncodeStep::Key(key) => write_bytes(key, output),
                EncodeStep::Value(BencodeValue::Integer(value)) => {
                    output.push(b'i');
                    output.extend_from_slice(value.to_string().as_bytes());
                    output.push(b'e');
                }
                EncodeStep::Value(BencodeValue::Bytes(bytes)) => write_bytes(bytes, output),
                EncodeStep::Value(BencodeValue::List(items)) => {
                    output.push(b'l');
                    steps.push(EncodeStep::End);
                    steps.extend(items.iter().rev().map(EncodeStep::Value));
                }
                EncodeStep::Value(BencodeValue::Dictionary(entries)) => {
                    output.push(b'd');
                    steps.push(EncodeStep::End);
                    for (key, value) in entries.iter().rev() {
                        steps.push(EncodeStep::Value(value));
                        steps.push(EncodeStep::Key(key));
                    }
                }
            }
        }
    }

    /// Adds a key to a dictionary. Keys must be unique.
    pub fn insert<K: Into<Vec<u8>>>(&mut self, key: K, value: BencodeValue) -> Result<(), BencodeError>
    {
        match self {
            BencodeValue::Dictionary(entries) => {
                let key = key.into();
                if entries.contains_key(&key) {
                    return Err(BencodeError::DuplicateKey(String::from_utf8_lossy(&key).to_string()));
                }
                entries.insert(key, value);
                Ok(())
            }
            other => Err(BencodeError::InvalidType { expected: "dictionary", found: other.kind() })
        }
    }

    pub fn push(&mut self, value: BencodeValue) -> Result<(), BencodeError>
    {
        match self {
            BencodeValue::List(items) => {
                items.push(value);
                Ok(())
            }
            other => Err(BencodeError::InvalidType { expected: "list", found: other.kind() })
        }
    }

    pub fn get(&self, key: &[u8]) -> Option<&BencodeValue>
    {
        match self {
            BencodeValue::Dictionary(entries) => entries.get(key),
            _ => None
        }
    }

    pub fn as_integer(&self) -> Option<i64>
    {
        match self {
            BencodeValue::Integer(value) => Some(*value),
            _ => None
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]>
    {
        match self {
            BencodeValue::Bytes(bytes) => Some(bytes),
            _ => None
        }
    }

    pub fn as_str(&self) -> Option<&str>
    {
        self.as_bytes().and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    pub fn as_list(&self) -> Option<&[BencodeValue]>
    {
        match self {
            BencodeValue::List(items) => Some(items),
            _ => None
        }
    }

    pub fn as_dictionary(&self) -> Option<&BTreeMap<Vec<u8>, BencodeValue>>
    {
        match self {
            BencodeValue::Dictionary(entries) => Some(entries),
            _ => None
        }
    }

    /// Maps the tree onto a native type.
    ///
    /// Integers become integers, byte strings become `String`/`&str`/`ByteBuf`,
    /// lists become sequences and dictionaries become maps or structs.
    pub fn represent<'a, T: Deserialize<'a>>(&'a self) -> Result<T, BencodeError>
    {
        T::deserialize(Representer { value: self })
    }
}

fn write_bytes(bytes: &[u8], output: &mut Vec<u8>)
{
    output.extend_from_slice(bytes.len().to_string().as_bytes());
    output.push(b':');
    output.extend_from_slice(bytes);
}

// Children are moved onto a heap stack before they drop, so deep trees
// never drop recursively.
impl Drop for BencodeValue {
    fn drop(&mut self)
    {
        let mut pending = match self {
            BencodeValue::List(items) if !items.is_empty() => std::mem::take(items),
            BencodeValue::Dictionary(entries) if !entries.is_empty() => std::mem::take(entries).into_values().collect(),
            _ => return
        };
        while let Some(mut value) = pending.pop() {
            match &mut value {
                BencodeValue::List(items) => pending.append(items),
                BencodeValue::Dictionary(entries) => pending.extend(std::mem::take(entries).into_values()),
                _ => {}
            }
        }
    }
}

impl From<i64> for BencodeValue {
    fn from(value: i64) -> Self {
        BencodeValue::Integer(value)
    }
}

impl From<u32> for BencodeValue {
    fn from(value: u32) -> Self {
        BencodeValue::Integer(value as i64)
    }
}

impl From<u16> for BencodeValue {
    fn from(value: u16) -> Self {
        BencodeValue::Integer(value as i64)
    }
}

impl From<&str> for BencodeValue {
    fn from(value: &str) -> Self {
        BencodeValue::Bytes(value.as_bytes().to_vec())
    }
}

impl From<String> for BencodeValue {
    fn from(value: String) -> Self {
        BencodeValue::Bytes(value.into_bytes())
    }
}

impl From<&[u8]> for BencodeValue {
    fn from(value: &[u8]) -> Self {
        BencodeValue::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for BencodeValue {
    fn from(value: Vec<u8>) -> Self {
        BencodeValue::Bytes(value)
    }
}

impl From<Vec<BencodeValue>> for BencodeValue {
    fn from(value: Vec<BencodeValue>) -> Self {
        BencodeValue::List(value)
    }
}

impl From<BTreeMap<Vec<u8>, BencodeValue>> for BencodeValue {
    fn from(value: BTreeMap<Vec<u8>, BencodeValue>) -> Self {
        BencodeValue::Dictionary(value)
    }
}

impl Serialize for BencodeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BencodeValue::Integer(value) => serializer.serialize_i64(*value),
            BencodeValue::Bytes(bytes) => serializer.serialize_bytes(bytes),
            BencodeValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            BencodeValue::Dictionary(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(serde_bytes::Bytes::new(key), value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for BencodeValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BencodeValueVisitor)
    }
}
