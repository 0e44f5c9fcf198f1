//! Error types for the MCP server

use thiserror::Error;

/// Result type alias for MCP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or running the server
#[derive(Debug, Error)]
pub enum Error {
    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The byte stream ended or a read/write on it failed
    #[error("transport closed: {0}")]
    TransportClosed(#[source] std::io::Error),

    /// Two catalog entries share a name
    #[error("duplicate tool: {0}")]
    DuplicateTool(String),

    /// Tool absent from the catalog or without a dataset
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Reference data failed to load
    #[error("dataset error: {0}")]
    Dataset(#[from] gosling_data::Error),
}

/// Failures answered with a JSON-RPC error envelope.
///
/// None of these end the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid Request: {0}")]
    InvalidRequest(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Server not initialized")]
    NotInitialized,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Externally visible category of a [`ProtocolError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedRequest,
    UnsupportedMethod,
    NotInitialized,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MalformedRequest => "MalformedRequest",
            ErrorKind::UnsupportedMethod => "UnsupportedMethod",
            ErrorKind::NotInitialized => "NotInitialized",
            ErrorKind::Internal => "Internal",
        }
    }
}

impl ProtocolError {
    /// JSON-RPC error code
    pub fn code(&self) -> i32 {
        match self {
            ProtocolError::Parse(_) => -32700,
            ProtocolError::InvalidRequest(_) => -32600,
            ProtocolError::MethodNotFound(_) => -32601,
            ProtocolError::InvalidParams(_) => -32602,
            ProtocolError::Internal(_) => -32603,
            ProtocolError::NotInitialized => -32002,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ProtocolError::Parse(_)
            | ProtocolError::InvalidRequest(_)
            | ProtocolError::InvalidParams(_) => ErrorKind::MalformedRequest,
            ProtocolError::MethodNotFound(_) => ErrorKind::UnsupportedMethod,
            ProtocolError::NotInitialized => ErrorKind::NotInitialized,
            ProtocolError::Internal(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_rpc_error_codes() {
        assert_eq!(ProtocolError::Parse("x".into()).code(), -32700);
        assert_eq!(ProtocolError::InvalidRequest("x".into()).code(), -32600);
        assert_eq!(ProtocolError::MethodNotFound("x".into()).code(), -32601);
        assert_eq!(ProtocolError::InvalidParams("x".into()).code(), -32602);
        assert_eq!(ProtocolError::Internal("x".into()).code(), -32603);
        assert_eq!(ProtocolError::NotInitialized.code(), -32002);
    }

    #[test]
    fn test_malformed_variants_share_a_kind() {
        for err in [
            ProtocolError::Parse("x".into()),
            ProtocolError::InvalidRequest("x".into()),
            ProtocolError::InvalidParams("x".into()),
        ] {
            assert_eq!(err.kind(), ErrorKind::MalformedRequest);
        }
        assert_eq!(
            ProtocolError::MethodNotFound("x".into()).kind(),
            ErrorKind::UnsupportedMethod
        );
    }

    #[test]
    fn test_method_not_found_message_names_method() {
        let err = ProtocolError::MethodNotFound("resources/list".into());
        assert_eq!(err.to_string(), "Method not found: resources/list");
    }
}
