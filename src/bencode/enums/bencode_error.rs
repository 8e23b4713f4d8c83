use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BencodeError {
    #[error("Parse error at offset {offset}: {message}")]
    Parse { offset: usize, message: String },

    #[error("Invalid input type when building: {0}")]
    Build(String),

    #[error("Duplicate dictionary key: {0}")]
    DuplicateKey(String),

    #[error("Invalid type: expected {expected}, found {found}")]
    InvalidType { expected: &'static str, found: &'static str },

    #[error("Unable to represent value: {0}")]
    Represent(String),
}

