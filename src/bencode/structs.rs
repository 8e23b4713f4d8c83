/// Stack based parser state.
pub mod parser;

/// `serde::Serializer` producing value trees.
pub mod builder;

/// `serde::Deserializer` reading value trees.
pub mod representer;

/// serde visitor turning any self-describing input into a value tree.
pub mod bencode_value_visitor;
