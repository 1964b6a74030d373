//! API Error Types
//!
//! Failures of a backend call, independent of the HTTP stack that made it.

use thiserror::Error;

/// Errors returned by [`BookingApi`](super::BookingApi) implementations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Connection refused, DNS failure, body could not be sent
    #[error("Network error: {0}")]
    Network(String),

    /// Request timed out
    #[error("Request timeout")]
    Timeout,

    /// Non-2xx response
    #[error("API error {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },

    /// 2xx response carrying `success: false`
    #[error("Request rejected: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message supplied by the backend, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } | ApiError::Rejected { message } => message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    /// Backend message when present, otherwise `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

/// Result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;
