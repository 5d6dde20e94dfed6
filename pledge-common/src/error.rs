//! Common error types for the pledge tracker

use thiserror::Error;

/// Common result type for pledge tracker operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the pledge tracker crates
///
/// The derived-view pipeline itself never returns these; malformed fields are
/// recovered with neutral defaults. Errors come from loading data, reading
/// configuration and parsing user-supplied names.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited-text decoding error (wraps csv::Error)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML configuration parse error
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
