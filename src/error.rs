//! Error types for the Pokedex shell
//!
//! Provides unified error handling using thiserror. The cache store itself is
//! infallible; everything that can fail lives in the catalog client, the
//! read-through layer and the command handlers.

use thiserror::Error;

// == Fetch Error Enum ==
/// Failure of a single catalog request.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, timeout...)
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// The catalog answered 404
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The catalog answered with any other non-success status
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body did not match the expected schema
    #[error("malformed payload from {url}: {message}")]
    Decode { url: String, message: String },
}

// == Read-Through Error Enum ==
/// Failure of a cached fetch.
#[derive(Error, Debug)]
pub enum ReadThroughError {
    /// The miss path called the catalog and the catalog failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Bytes found in the cache do not decode as the requested type
    #[error("cached bytes for {key} do not match the expected schema: {source}")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A freshly fetched value could not be encoded for the cache
    #[error("failed to encode value for {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ReadThroughError {
    /// Returns true when the underlying catalog request answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReadThroughError::Fetch(FetchError::NotFound(_)))
    }
}

// == Command Error Enum ==
/// Error surfaced to the user by a shell command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// First word of the line names no command
    #[error("Unknown command")]
    Unknown(String),

    /// Missing or malformed arguments
    #[error("{0}")]
    Usage(&'static str),

    /// `explore` was given an area the catalog does not know
    #[error("area {0} not found")]
    AreaNotFound(String),

    /// `catch` was given a pokemon the catalog does not know
    #[error("pokemon {0} not found")]
    PokemonNotFound(String),

    /// `inspect` was given a pokemon that is not in the pokedex
    #[error("you have not caught {0} yet")]
    NotCaught(String),

    /// Any other catalog or cache failure
    #[error(transparent)]
    Catalog(#[from] ReadThroughError),

    /// Writing command output failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for shell commands.
pub type Result<T> = std::result::Result<T, CommandError>;
