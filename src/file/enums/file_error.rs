use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("File \"{0}\" does not exist")]
    NotExists(String),

    #[error("File \"{path}\" is not readable: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
