// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a generator run. All variants are fatal.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request for catalog id {id} failed: {source}")]
    Http {
        id: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("catalog id {id} answered with HTTP {status}")]
    Status { id: u32, status: u16 },

    #[error("catalog id {id}: no {field} found on the page")]
    MissingField { id: u32, field: &'static str },

    #[error("catalog id {id}: reading {reading:?} has {tokens} token(s), expected 2")]
    ReadingShape { id: u32, reading: String, tokens: usize },

    #[error("catalog id {id}: {ident:?} is not a valid enum member name")]
    InvalidIdentifier { id: u32, ident: String },

    #[error("identifier {ident} produced by both id {first} and id {second}")]
    DuplicateIdentifier { ident: String, first: u32, second: u32 },

    #[error("bad selector {selector:?}: {message}")]
    Selector { selector: &'static str, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
