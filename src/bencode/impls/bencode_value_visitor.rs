use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Formatter;
use serde::de::{Error, MapAccess, SeqAccess, Visitor};
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::bencode::structs::bencode_value_visitor::BencodeValueVisitor;

impl<'de> Visitor<'de> for BencodeValueVisitor {
    type Value = BencodeValue;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "an integer, byte string, list or dictionary")
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(BencodeValue::Integer(v))
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .map(BencodeValue::Integer)
            .map_err(|_| E::custom(format!("integer {v} does not fit in 64 signed bits")))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(BencodeValue::Bytes(v.as_bytes().to_vec()))
    }

    fn visit_bytes<E: Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        Ok(BencodeValue::Bytes(v.to_vec()))
    }

    fn visit_byte_buf<E: Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
        Ok(BencodeValue::Bytes(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<BencodeValue>()? {
            items.push(item);
        }
        Ok(BencodeValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = BTreeMap::new();
        while let Some((key, value)) = map.next_entry::<serde_bytes::ByteBuf, BencodeValue>()? {
            let key = key.into_vec();
            if entries.contains_key(&key) {
                return Err(A::Error::custom(format!("duplicate dictionary key {}", String::from_utf8_lossy(&key))));
            }
            entries.insert(key, value);
        }
        Ok(BencodeValue::Dictionary(entries))
    }
}
