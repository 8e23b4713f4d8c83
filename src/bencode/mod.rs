//! Bencode codec.
//!
//! Bencode is the serialization format used by torrent files and tracker
//! responses. It knows four kinds of values: integers (`i42e`), byte strings
//! (`4:spam`), lists (`l...e`) and dictionaries (`d...e`) whose keys are byte
//! strings kept in ascending byte order.
//!
//! # Entry points
//!
//! - [`bencode::decode`] parses a byte buffer into a [`BencodeValue`](enums::bencode_value::BencodeValue)
//! - [`BencodeValue::encode`](enums::bencode_value::BencodeValue::encode) serializes a value tree
//! - [`bencode::build`] turns any `serde::Serialize` type into a value tree
//! - [`BencodeValue::represent`](enums::bencode_value::BencodeValue::represent) maps a value tree
//!   back into any `serde::Deserialize` type
//!
//! The `ben_map!`, `ben_list!`, `ben_int!` and `ben_bytes!` macros build value
//! trees inline.

/// Enumerations for bencode values and errors.
pub mod enums;

/// Parser and serde bridge structures.
pub mod structs;

/// Implementation blocks for the codec.
pub mod impls;

/// Inline value construction macros.
pub mod macros;

/// Top-level decode and build functions.
#[allow(clippy::module_inception)]
pub mod bencode;
