use std::fmt;
use std::fmt::Formatter;
use crate::common::common::bin2hex;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_id_visitor::PeerIdVisitor;

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        bin2hex(&self.0, f)
    }
}

impl std::str::FromStr for PeerId {
    type Err = binascii::ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 40 {
            return Err(binascii::ConvertError::InvalidInputLength);
        }
        let mut result = PeerId([0u8; 20]);
        binascii::hex2bin(s.as_bytes(), &mut result.0)?;
        Ok(result)
    }
}

impl TryFrom<&[u8]> for PeerId {
    type Error = binascii::ConvertError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 20] = data.try_into().map_err(|_| binascii::ConvertError::InvalidInputLength)?;
        Ok(PeerId(bytes))
    }
}

impl From<[u8; 20]> for PeerId {
    fn from(data: [u8; 20]) -> Self {
        PeerId(data)
    }
}

impl serde::ser::Serialize for PeerId {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> serde::de::Deserialize<'de> for PeerId {
    fn deserialize<D: serde::de::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        des.deserialize_str(PeerIdVisitor)
    }
}
