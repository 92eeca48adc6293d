//! # briefly
//!
//! Summarize a local text file through the HuggingFace Inference API.
//!
//! The pipeline is strictly sequential: load and validate the input, build
//! the prompt and length bounds for the requested preset, perform one
//! authenticated HTTP call, then format the first returned candidate for
//! the console. One invocation, one request, no retries.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod logging;
pub mod summary;

pub use cli::Cli;
pub use config::Settings;
pub use error::{Error, Result};
pub use summary::SummaryType;
