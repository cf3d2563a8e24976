//! # Client Error Types
//!
//! Unified error handling for all provisioning operations. Each variant maps
//! to one layer of the request pipeline, so callers can tell a network
//! failure from a malformed document from a well-formed OCS failure.

use thiserror::Error;

/// Client operation result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by provisioning operations
#[derive(Debug, Error)]
pub enum ClientError {
    /// Pre-flight input validation failed; no request was issued.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The HTTP round-trip itself failed (connect, timeout, TLS).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-200 HTTP status. The raw body is kept
    /// verbatim; it may contain a failure envelope the caller wants to see.
    #[error("status: {status}, body: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body was not a well-formed OCS envelope.
    #[error("failed to decode OCS envelope: {0}")]
    Decode(#[from] quick_xml::DeError),

    /// A well-formed envelope whose status code signals failure.
    #[error("API returned a status code {status} indicating failure. Message: {message}")]
    Api { status: u16, message: String },

    /// Exact-id group search found no matching group.
    #[error("no group with the id {group_id} was found")]
    GroupNotFound { group_id: String },

    /// Configuration could not be resolved (missing env var, bad value).
    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Create an API error from envelope metadata
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create an error for a non-200 HTTP outcome
    pub fn unexpected_status(status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a validation error from accumulated problems
    pub fn validation(problems: &[String]) -> Self {
        Self::Validation(problems.join("\n"))
    }

    /// Create a not-found error for an exact-id group search
    pub fn group_not_found(group_id: impl Into<String>) -> Self {
        Self::GroupNotFound {
            group_id: group_id.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if error is recoverable (worth retrying by the caller).
    ///
    /// The client never retries on its own; this is advisory for hosts that
    /// implement their own retry policy.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            ClientError::Http(e) => e.is_timeout() || e.is_connect(),
            ClientError::UnexpectedStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Check if error indicates rejected credentials, at either the HTTP
    /// layer (401) or the OCS layer (status code 997).
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        match self {
            ClientError::UnexpectedStatus { status, .. } => *status == 401,
            ClientError::Api { status, .. } => *status == crate::protocol::status::NOT_AUTHORIZED,
            _ => false,
        }
    }
}
