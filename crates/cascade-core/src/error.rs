use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("deck contains no pages")]
    EmptyDeck,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
