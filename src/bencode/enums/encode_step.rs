use crate::bencode::enums::bencode_value::BencodeValue;

pub enum EncodeStep<'a> {
    Value(&'a BencodeValue),
    Key(&'a [u8]),
    End,
}
