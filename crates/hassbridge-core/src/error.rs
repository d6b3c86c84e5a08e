//! Shared error type across hassbridge crates.

use thiserror::Error;

/// Stable error codes surfaced in logs and HTTP error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Payload is not shaped like a service call.
    BadRequest,
    /// A required payload key is absent.
    MissingField,
    /// A tag entry is not in `key:value` form.
    InvalidTag,
    /// The value cannot be coerced to a float.
    InvalidValue,
    /// No handler registered under the requested name.
    UnknownService,
    /// Startup configuration rejected.
    Config,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::MissingField => "MISSING_FIELD",
            ErrorCode::InvalidTag => "INVALID_TAG",
            ErrorCode::InvalidValue => "INVALID_VALUE",
            ErrorCode::UnknownService => "UNKNOWN_SERVICE",
            ErrorCode::Config => "CONFIG",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("improperly formatted tag: {0}")]
    InvalidTag(String),
    #[error("value is not numeric: {0}")]
    InvalidValue(String),
    #[error("unknown service: {0}")]
    UnknownService(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl BridgeError {
    /// Map an error to its stable code.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            BridgeError::BadRequest(_) => ErrorCode::BadRequest,
            BridgeError::MissingField(_) => ErrorCode::MissingField,
            BridgeError::InvalidTag(_) => ErrorCode::InvalidTag,
            BridgeError::InvalidValue(_) => ErrorCode::InvalidValue,
            BridgeError::UnknownService(_) => ErrorCode::UnknownService,
            BridgeError::Config(_) => ErrorCode::Config,
            BridgeError::Internal(_) => ErrorCode::Internal,
        }
    }
}
