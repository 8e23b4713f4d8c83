use crate::bencode::enums::parser_frame::ParserFrame;

/// Single pass bencode parser.
///
/// Nesting is tracked on an explicit stack instead of recursion, so deeply
/// nested input cannot exhaust the call stack.
#[derive(Debug)]
pub struct Parser<'a> {
    pub(crate) data: &'a [u8],
    pub(crate) pointer: usize,
    pub(crate) stack: Vec<ParserFrame>,
}
