//! Error taxonomy shared by all pipeline stages.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can end a run with exit code 1.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Bad or missing CLI arguments.
    #[error("{message}")]
    Validation { message: String },

    /// The bearer token environment variable is not set.
    #[error(
        "the HuggingFace API requires an authentication token.\n\
         Set the {var} environment variable, e.g.\n    export {var}=hf_xxx"
    )]
    MissingToken { var: &'static str },

    /// The input file could not be read.
    #[error("failed to read '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// The input file contains only whitespace.
    #[error("input file '{path}' is empty")]
    EmptyInput { path: PathBuf },

    /// Transport-level failure: DNS, connection refused, timeout.
    #[error("network error contacting the API: {message}")]
    Network { message: String },

    /// The API answered with a non-success status.
    #[error("API error ({status}): {body}")]
    ApiStatus { status: u16, body: String },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode API response: {message}")]
    Decode { message: String },

    /// The API answered 2xx but produced no usable summary text.
    #[error("the service returned no usable summary")]
    EmptySummary,

    /// The user interrupted the run before the response arrived.
    #[error("cancelled before the response arrived")]
    Cancelled,
}

impl Error {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a file-read error with path context.
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode {
                message: e.to_string(),
            }
        } else {
            Self::Network {
                message: e.to_string(),
            }
        }
    }
}
