/// Value tree of a decoded or built bencode document.
pub mod bencode_value;

/// Errors raised while parsing, building or representing values.
pub mod bencode_error;

/// Open containers on the parser stack.
pub mod parser_frame;

/// Pending work of the iterative encoder.
pub mod encode_step;
