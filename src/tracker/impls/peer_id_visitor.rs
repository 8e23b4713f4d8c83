use std::fmt;
use std::fmt::Formatter;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_id_visitor::PeerIdVisitor;

impl<'v> serde::de::Visitor<'v> for PeerIdVisitor {
    type Value = PeerId;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "a 40 character long peer id")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse::<PeerId>().map_err(|_| serde::de::Error::invalid_value(
            serde::de::Unexpected::Str(v),
            &"expected a 40 character long hexadecimal string",
        ))
    }
}
