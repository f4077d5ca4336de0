//! Error types for the principal crate.
//!
//! The root error type, `Error`, wraps the principal-specific errors together
//! with the serialization and configuration failures that surround them, so
//! callers can handle everything uniformly at the top level while still
//! matching on the precise [`ErrorKind`] when they need to.

use crate::message::{Message, MessageFormatter};
use std::num::ParseIntError;
use thiserror::Error;

/// Root error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Principal construction, restoration, or access errors
    #[error("Principal error: {0}")]
    Principal(#[from] PrincipalError),

    /// Persisted records that could not be decoded or encoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// The principal error kind, if this is a principal error.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Principal(e) => Some(e.kind()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}

/// Errors raised by the principal types themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrincipalError {
    /// A required constructor argument was absent
    #[error("{0}")]
    InvalidArgument(Message),

    /// A persisted record violates a construction invariant
    #[error("{0}")]
    InvalidPersistedState(Message),

    /// A group id is not a valid signed 64-bit decimal integer
    #[error("invalid group id {value:?}: {source}")]
    NumberFormat {
        /// The offending text
        value: String,

        /// The parse failure
        #[source]
        source: ParseIntError,
    },
}

/// Discriminant of [`PrincipalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`PrincipalError::InvalidArgument`].
    InvalidArgument,
    /// See [`PrincipalError::InvalidPersistedState`].
    InvalidPersistedState,
    /// See [`PrincipalError::NumberFormat`].
    NumberFormat,
}

impl PrincipalError {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::InvalidPersistedState(_) => ErrorKind::InvalidPersistedState,
            Self::NumberFormat { .. } => ErrorKind::NumberFormat,
        }
    }

    /// The carried message, for the kinds that have one.
    pub fn message(&self) -> Option<&Message> {
        match self {
            Self::InvalidArgument(m) | Self::InvalidPersistedState(m) => Some(m),
            Self::NumberFormat { .. } => None,
        }
    }

    /// Render the error with a caller-supplied formatter.
    pub fn render(&self, formatter: &dyn MessageFormatter) -> String {
        match self.message() {
            Some(message) => message.render(formatter),
            None => self.to_string(),
        }
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
