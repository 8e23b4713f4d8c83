use std::fmt::Display;
use crate::bencode::enums::bencode_error::BencodeError;

impl BencodeError {
    pub fn parse(offset: usize, message: &str) -> BencodeError {
        BencodeError::Parse { offset, message: message.to_string() }
    }

    pub fn offset(&self) -> Option<usize> {
        match self {
            BencodeError::Parse { offset, .. } => Some(*offset),
            _ => None
        }
    }
}

impl serde::ser::Error for BencodeError {
    fn custom<T: Display>(msg: T) -> Self {
        BencodeError::Build(msg.to_string())
    }
}

impl serde::de::Error for BencodeError {
    fn custom<T: Display>(msg: T) -> Self {
        BencodeError::Represent(msg.to_string())
    }
}
