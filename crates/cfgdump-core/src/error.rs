//! Config Dump Error Types
//!
//! Errors produced while configuring a dump or constructing a value graph.
//! Simplification and rendering are total and have no error type of their own.

use thiserror::Error;

/// Rejected dump configuration. Raised at construction, never clamped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("The \"depth\" option should be a non-negative number")]
    NegativeDepth { depth: i64 },
}

/// Errors raised while building a value graph.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("invalid pattern /{source_text}/: {reason}")]
    InvalidPattern {
        source_text: String,
        #[source]
        reason: regex::Error,
    },
    #[error("unsupported pattern flag '{0}'")]
    UnsupportedFlag(char),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type GraphResult<T> = Result<T, GraphError>;
