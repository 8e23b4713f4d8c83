use serde::{Deserialize, Serialize};
use crate::bencode::enums::bencode_error::BencodeError;
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::bencode::structs::builder::Builder;
use crate::bencode::structs::parser::Parser;

/// Parses a complete bencoded document.
///
/// The whole buffer must hold exactly one top-level value. Errors carry the
/// byte offset where parsing stopped.
pub fn decode(data: &[u8]) -> Result<BencodeValue, BencodeError>
{
    Parser::new(data).parse()
}

pub fn build<T: ?Sized + Serialize>(value: &T) -> Result<BencodeValue, BencodeError>
{
    value.serialize(Builder)
}

pub fn encode<T: ?Sized + Serialize>(value: &T) -> Result<Vec<u8>, BencodeError>
{
    Ok(build(value)?.encode())
}

pub fn represent<'a, T: Deserialize<'a>>(value: &'a BencodeValue) -> Result<T, BencodeError>
{
    value.represent()
}
