use serde::de::{DeserializeSeed, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::de::value::BorrowedStrDeserializer;
use serde::forward_to_deserialize_any;
use crate::bencode::enums::bencode_error::BencodeError;
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::bencode::structs::representer::{KeyRepresenter, MapRepresenter, Representer, SeqRepresenter};

impl<'de> Deserializer<'de> for Representer<'de> {
    type Error = BencodeError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.value {
            BencodeValue::Integer(value) => visitor.visit_i64(*value),
            BencodeValue::Bytes(bytes) => visitor.visit_borrowed_bytes(bytes),
            BencodeValue::List(items) => visitor.visit_seq(SeqRepresenter { items: items.iter() }),
            BencodeValue::Dictionary(entries) => visitor.visit_map(MapRepresenter { entries: entries.iter(), pending_value: None })
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(self, _name: &'static str, visitor: V) -> Result<V::Value, Self::Error> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V: Visitor<'de>>(self, _name: &'static str, _variants: &'static [&'static str], visitor: V) -> Result<V::Value, Self::Error> {
        match self.value {
            BencodeValue::Bytes(bytes) => {
                let variant = std::str::from_utf8(bytes).map_err(|_| BencodeError::Represent(String::from("enum variant is not valid UTF-8")))?;
                visitor.visit_enum(BorrowedStrDeserializer::<BencodeError>::new(variant))
            }
            other => Err(BencodeError::InvalidType { expected: "bytes", found: other.kind() })
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

impl<'de> SeqAccess<'de> for SeqRepresenter<'de> {
    type Error = BencodeError;

    fn next_element_seed<T: DeserializeSeed<'de>>(&mut self, seed: T) -> Result<Option<T::Value>, Self::Error> {
        match self.items.next() {
            Some(value) => seed.deserialize(Representer { value }).map(Some),
            None => Ok(None)
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.items.len())
    }
}

impl<'de> MapAccess<'de> for MapRepresenter<'de> {
    type Error = BencodeError;

    fn next_key_seed<K: DeserializeSeed<'de>>(&mut self, seed: K) -> Result<Option<K::Value>, Self::Error> {
        match self.entries.next() {
            Some((key, value)) => {
                self.pending_value = Some(value);
                seed.deserialize(KeyRepresenter { key }).map(Some)
            }
            None => Ok(None)
        }
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> Result<V::Value, Self::Error> {
        let value = self.pending_value.take().ok_or_else(|| BencodeError::Represent(String::from("value requested before key")))?;
        seed.deserialize(Representer { value })
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.entries.len())
    }
}

impl<'de> Deserializer<'de> for KeyRepresenter<'de> {
    type Error = BencodeError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match std::str::from_utf8(self.key) {
            Ok(text) => visitor.visit_borrowed_str(text),
            Err(_) => visitor.visit_borrowed_bytes(self.key)
        }
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(self, _name: &'static str, visitor: V) -> Result<V::Value, Self::Error> {
        visitor.visit_newtype_struct(self)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct seq tuple tuple_struct map struct
        enum identifier ignored_any
    }
}
