//! Error types for the autocorrect library.
//!
//! The spelling and edit-distance algorithms themselves never fail. Errors only
//! come from the edges of the crate: reading a corpus or a configuration file,
//! and validating caller-supplied settings such as edit costs.
//!
//! # Examples
//!
//! ```
//! use autocorrect::error::{AutocorrectError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(AutocorrectError::invalid_config("alphabet must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for autocorrect operations.
#[derive(Error, Debug)]
pub enum AutocorrectError {
    /// I/O errors (corpus or configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Corpus analysis errors (tokenizer construction)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Malformed configuration (negative costs, empty alphabet, ...)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Thread pool construction failures
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

/// Result type alias for operations that may fail with AutocorrectError.
pub type Result<T> = std::result::Result<T, AutocorrectError>;

impl AutocorrectError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        AutocorrectError::Analysis(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        AutocorrectError::InvalidConfig(msg.into())
    }

    /// Create a new thread pool error.
    pub fn thread_pool<S: Into<String>>(msg: S) -> Self {
        AutocorrectError::ThreadPool(msg.into())
    }
}
