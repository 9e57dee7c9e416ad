//! Shared error type across fibsvc crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Caller contract violation.
    InvalidInput,
    /// Computed value does not fit the wire type.
    Overflow,
    /// Endpoint name outside the fixed set.
    UnknownEndpoint,
    /// Invalid or missing startup configuration.
    Config,
    /// Result could not be encoded.
    Serialization,
    /// Listener could not be acquired.
    Bind,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::InvalidInput => "INVALID_INPUT",
            ClientCode::Overflow => "OVERFLOW",
            ClientCode::UnknownEndpoint => "UNKNOWN_ENDPOINT",
            ClientCode::Config => "CONFIG",
            ClientCode::Serialization => "SERIALIZATION",
            ClientCode::Bind => "BIND",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, FibsvcError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum FibsvcError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("fibonacci overflow: F({0}) does not fit in u64")]
    Overflow(i64),
    #[error("unknown endpoint: {0}")]
    UnknownEndpoint(String),
    #[error("config: {0}")]
    Config(String),
    #[error("serialization failed: {0}")]
    Serialization(String),
    #[error("bind failed: {0}")]
    Bind(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl FibsvcError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            FibsvcError::InvalidInput(_) => ClientCode::InvalidInput,
            FibsvcError::Overflow(_) => ClientCode::Overflow,
            FibsvcError::UnknownEndpoint(_) => ClientCode::UnknownEndpoint,
            FibsvcError::Config(_) => ClientCode::Config,
            FibsvcError::Serialization(_) => ClientCode::Serialization,
            FibsvcError::Bind(_) => ClientCode::Bind,
            FibsvcError::Internal(_) => ClientCode::Internal,
        }
    }
}

impl From<serde_json::Error> for FibsvcError {
    fn from(e: serde_json::Error) -> Self {
        FibsvcError::Serialization(e.to_string())
    }
}
