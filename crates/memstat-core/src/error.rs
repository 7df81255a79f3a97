//! Shared error type across memstat crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Wrong HTTP verb.
    MethodNotAllowed,
    /// Path does not have the expected shape.
    NotFound,
    /// Invalid metric kind or value.
    BadRequest,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// HTTP status code the transport layer answers with.
    pub fn http_status(self) -> u16 {
        match self {
            ClientCode::MethodNotAllowed => 405,
            ClientCode::NotFound => 404,
            ClientCode::BadRequest => 400,
            ClientCode::Internal => 500,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MemstatError>;

/// Unified error type used by core and server.
///
/// The `Display` text of every client-input variant is the exact response
/// body sent back to the caller.
#[derive(Debug, Error)]
pub enum MemstatError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Invalid URL format")]
    MalformedPath,
    /// Raw path holds a `%` not followed by two hex digits.
    #[error("400 Bad Request")]
    InvalidPathEscape(String),
    #[error("Undefined metric type!")]
    UnknownMetricKind(String),
    #[error("Incorrect metric value! Must be int64")]
    InvalidIntegerValue(String),
    #[error("Incorrect metric value! Must be float64")]
    InvalidFloatValue(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl MemstatError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            MemstatError::MethodNotAllowed => ClientCode::MethodNotAllowed,
            MemstatError::MalformedPath => ClientCode::NotFound,
            MemstatError::InvalidPathEscape(_)
            | MemstatError::UnknownMetricKind(_)
            | MemstatError::InvalidIntegerValue(_)
            | MemstatError::InvalidFloatValue(_) => ClientCode::BadRequest,
            MemstatError::Config(_) | MemstatError::Internal(_) => ClientCode::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_bodies_are_exact() {
        assert_eq!(MemstatError::MethodNotAllowed.to_string(), "Method not allowed");
        assert_eq!(MemstatError::MalformedPath.to_string(), "Invalid URL format");
        assert_eq!(
            MemstatError::InvalidPathEscape("/a%zz".into()).to_string(),
            "400 Bad Request"
        );
        assert_eq!(
            MemstatError::UnknownMetricKind("histogram".into()).to_string(),
            "Undefined metric type!"
        );
        assert_eq!(
            MemstatError::InvalidIntegerValue("abc".into()).to_string(),
            "Incorrect metric value! Must be int64"
        );
        assert_eq!(
            MemstatError::InvalidFloatValue("abc".into()).to_string(),
            "Incorrect metric value! Must be float64"
        );
    }

    #[test]
    fn status_mapping() {
        assert_eq!(MemstatError::MethodNotAllowed.client_code().http_status(), 405);
        assert_eq!(MemstatError::MalformedPath.client_code().http_status(), 404);
        assert_eq!(
            MemstatError::InvalidPathEscape(String::new()).client_code().http_status(),
            400
        );
        assert_eq!(
            MemstatError::InvalidFloatValue(String::new()).client_code().http_status(),
            400
        );
        assert_eq!(
            MemstatError::Config("x".into()).client_code().as_str(),
            "INTERNAL"
        );
    }
}
