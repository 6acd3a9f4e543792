//! Error types for the client core.
//!
//! # Design
//! Non-2xx responses land in `HttpError` with the raw status code and body
//! for display. Transport failures are produced by whoever executes the
//! request, but share this enum so every outbound failure renders the same
//! way.

use thiserror::Error;

/// Errors returned by request builders, response parsers and executors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a status the operation does not accept.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The target URL is empty or not an http(s) URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// No response arrived within the configured timeout.
    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Connection refused, DNS failure, TLS failure and the like.
    #[error("transport error: {0}")]
    Transport(String),
}
