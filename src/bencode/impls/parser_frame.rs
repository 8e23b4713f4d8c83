use crate::bencode::enums::bencode_error::BencodeError;
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::bencode::enums::parser_frame::ParserFrame;

impl ParserFrame {
    pub fn attach(&mut self, mut value: BencodeValue, offset: usize) -> Result<(), BencodeError>
    {
        match self {
            ParserFrame::List(items) => {
                items.push(value);
                Ok(())
            }
            ParserFrame::Dictionary { entries, pending_key } => {
                match pending_key.take() {
                    Some(key) => {
                        if entries.contains_key(&key) {
                            return Err(BencodeError::parse(offset, "duplicate dictionary key"));
                        }
                        entries.insert(key, value);
                        Ok(())
                    }
                    None => match &mut value {
                        BencodeValue::Bytes(key) => {
                            *pending_key = Some(std::mem::take(key));
                            Ok(())
                        }
                        other => Err(BencodeError::parse(offset, &format!("dictionary key must be a byte string, found {}", other.kind())))
                    }
                }
            }
        }
    }

    pub fn into_value(self, offset: usize) -> Result<BencodeValue, BencodeError>
    {
        match self {
            ParserFrame::List(items) => Ok(BencodeValue::List(items)),
            ParserFrame::Dictionary { pending_key: Some(_), .. } => {
                Err(BencodeError::parse(offset, "dictionary key without value"))
            }
            ParserFrame::Dictionary { entries, pending_key: None } => Ok(BencodeValue::Dictionary(entries))
        }
    }
}
