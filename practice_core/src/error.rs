//! Error types for the page model.
//!
//! None of these ever reach a visitor: config problems fall back to
//! defaults, sink failures are logged, unknown form fields are ignored.

use thiserror::Error;

/// Errors raised while loading config or handling form input.
#[derive(Debug, Error)]
pub enum SiteError {
    /// `site.toml` could not be parsed.
    #[error("invalid site config: {0}")]
    Config(#[from] toml::de::Error),

    /// `log_level` in config is not a known level.
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),

    /// A record could not be serialised for the submission sink.
    #[error("failed to serialize appointment request: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A DOM input reported a field name the form does not have.
    #[error("unknown form field: {0}")]
    UnknownField(String),

    /// A select produced a value outside its option table.
    #[error("unknown option {value:?} for field {field}")]
    UnknownOption {
        /// Field the value was meant for
        field: &'static str,
        /// Rejected value
        value: String,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SiteError>;
