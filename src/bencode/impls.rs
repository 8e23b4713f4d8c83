/// Accessors, mutation and serialization of values.
pub mod bencode_value;

/// serde error integration.
pub mod bencode_error;

/// Parsing of raw input.
pub mod parser;

/// Attaching parsed values to open containers.
pub mod parser_frame;

/// Serializer implementation.
pub mod builder;

/// Deserializer implementation.
pub mod representer;

/// Visitor implementation.
pub mod bencode_value_visitor;
