use std::fmt;
use std::fmt::Formatter;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::info_hash_visitor::InfoHashVisitor;

impl<'v> serde::de::Visitor<'v> for InfoHashVisitor {
    type Value = InfoHash;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "a 40 character long hash")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse::<InfoHash>().map_err(|_| serde::de::Error::invalid_value(
            serde::de::Unexpected::Str(v),
            &"expected a 40 character long hexadecimal string",
        ))
    }
}
