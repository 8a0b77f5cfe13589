//! Error types for the paydirekt model layer.

/// All errors that can occur when decoding or encoding paydirekt resources.
#[derive(Debug, thiserror::Error)]
pub enum PaydirektError {
    /// Response body was not valid JSON or did not match the resource schema
    /// (missing required field, unknown enum value, wrong type).
    #[error("malformed response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// Encoding a resource to JSON failed.
    #[error("serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = core::result::Result<T, PaydirektError>;
