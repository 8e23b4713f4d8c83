use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeederError {
    #[error("[SEEDER] Unable to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("[SEEDER] Invalid address \"{0}\"")]
    InvalidAddress(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
