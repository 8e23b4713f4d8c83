/// Builds a [`BencodeValue::Integer`](crate::bencode::enums::bencode_value::BencodeValue::Integer).
#[macro_export]
macro_rules! ben_int {
    ($value:expr) => {
        $crate::bencode::enums::bencode_value::BencodeValue::Integer(($value) as i64)
    };
}

/// Builds a [`BencodeValue::Bytes`](crate::bencode::enums::bencode_value::BencodeValue::Bytes)
/// from anything that can be viewed as a byte slice.
#[macro_export]
macro_rules! ben_bytes {
    ($value:expr) => {
        $crate::bencode::enums::bencode_value::BencodeValue::Bytes(::std::convert::AsRef::<[u8]>::as_ref(&$value).to_vec())
    };
}

#[macro_export]
macro_rules! ben_list {
    ($($value:expr),* $(,)?) => {
        $crate::bencode::enums::bencode_value::BencodeValue::List(vec![$($value),*])
    };
}

/// Builds a dictionary from `key => value` pairs. Keys are byte-like, values
/// are `BencodeValue`s. A repeated key keeps the last value.
#[macro_export]
macro_rules! ben_map {
    ($($key:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut entries = ::std::collections::BTreeMap::<::std::vec::Vec<u8>, $crate::bencode::enums::bencode_value::BencodeValue>::new();
        $(
            entries.insert(::std::convert::AsRef::<[u8]>::as_ref(&$key).to_vec(), $value);
        )*
        $crate::bencode::enums::bencode_value::BencodeValue::Dictionary(entries)
    }};
}
