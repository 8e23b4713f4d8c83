use crate::bencode::enums::bencode_error::BencodeError;
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::bencode::enums::parser_frame::ParserFrame;
use crate::bencode::structs::parser::Parser;

const MAX_LENGTH_DIGITS: usize = 19;

impl<'a> Parser<'a> {
    pub fn new(data: &'a [u8]) -> Parser<'a>
    {
        Parser {
            data,
            pointer: 0,
            stack: Vec::new(),
        }
    }

    pub fn parse(mut self) -> Result<BencodeValue, BencodeError>
    {
        if self.data.is_empty() {
            return Err(BencodeError::parse(0, "empty input"));
        }

        let mut result: Option<BencodeValue> = None;
        while self.pointer < self.data.len() {
            if result.is_some() {
                return Err(BencodeError::parse(self.pointer, "trailing data after the top-level value"));
            }

            let offset = self.pointer;
            let value = match self.data[self.pointer] {
                b'i' => Some(self.parse_integer()?),
                b'0'..=b'9' => Some(self.parse_bytes()?),
                b'l' => {
                    self.stack.push(ParserFrame::List(Vec::new()));
                    self.pointer += 1;
                    None
                }
                b'd' => {
                    self.stack.push(ParserFrame::Dictionary { entries: Default::default(), pending_key: None });
                    self.pointer += 1;
                    None
                }
                b'e' => Some(self.close_container()?),
                other => {
                    return Err(BencodeError::parse(offset, &format!("unexpected byte 0x{other:02x}")));
                }
            };

            if let Some(value) = value {
                match self.stack.last_mut() {
                    Some(frame) => frame.attach(value, offset)?,
                    None => result = Some(value)
                }
            }
        }

        if !self.stack.is_empty() {
            return Err(BencodeError::parse(self.pointer, "unterminated list or dictionary"));
        }
        result.ok_or_else(|| BencodeError::parse(0, "empty input"))
    }

    fn close_container(&mut self) -> Result<BencodeValue, BencodeError>
    {
        let frame = self.stack.pop().ok_or_else(|| BencodeError::parse(self.pointer, "end marker without open list or dictionary"))?;
        let value = frame.into_value(self.pointer)?;
        self.pointer += 1;
        Ok(value)
    }

    fn parse_integer(&mut self) -> Result<BencodeValue, BencodeError>
    {
        let offset = self.pointer;
        let start = offset + 1;
        let end = match self.data[start..].iter().position(|byte| *byte == b'e') {
            Some(position) => start + position,
            None => {
                return Err(BencodeError::parse(offset, "missing end marker of integer"));
            }
        };

        let span = &self.data[start..end];
        let negative = span.first() == Some(&b'-');
        let digits = if negative { &span[1..] } else { span };
        if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
            return Err(BencodeError::parse(offset, "invalid integer"));
        }
        if digits.len() > 1 && digits[0] == b'0' {
            return Err(BencodeError::parse(offset, "integer with leading zero"));
        }
        if negative && digits == b"0" {
            return Err(BencodeError::parse(offset, "negative zero"));
        }

        let value = std::str::from_utf8(span)
            .ok()
            .and_then(|text| text.parse::<i64>().ok())
            .ok_or_else(|| BencodeError::parse(offset, "integer out of range"))?;
        self.pointer = end + 1;
        Ok(BencodeValue::Integer(value))
    }

    fn parse_bytes(&mut self) -> Result<BencodeValue, BencodeError>
    {
        let offset = self.pointer;
        let digits = self.data[offset..].iter().take_while(|byte| byte.is_ascii_digit()).count();
        let colon = offset + digits;
        if colon >= self.data.len() {
            return Err(BencodeError::parse(offset, "missing colon after string length"));
        }
        if self.data[colon] != b':' {
            return Err(BencodeError::parse(colon, "invalid string length"));
        }
        if digits > MAX_LENGTH_DIGITS {
            return Err(BencodeError::parse(offset, "string length too large"));
        }

        let length = std::str::from_utf8(&self.data[offset..colon])
            .ok()
            .and_then(|text| text.parse::<usize>().ok())
            .ok_or_else(|| BencodeError::parse(offset, "string length too large"))?;
        let begin = colon + 1;
        let end = begin
            .checked_add(length)
            .filter(|end| *end <= self.data.len())
            .ok_or_else(|| BencodeError::parse(offset, "string length exceeds input"))?;

        self.pointer = end;
        Ok(BencodeValue::Bytes(self.data[begin..end].to_vec()))
    }
}
