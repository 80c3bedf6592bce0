//! Error types for the promptshelf library.

use std::io;
use thiserror::Error;

/// Result type alias for promptshelf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or rendering the resource list.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Neither the local file nor the remote URL produced usable text.
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// The fetched document contained no text at all.
    #[error("Source document is empty")]
    EmptyDocument,

    /// Error during rendering (HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Fetch(err.to_string())
    }
}
