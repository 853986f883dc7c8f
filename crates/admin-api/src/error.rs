//! Gateway error type

use serde_json::Value;
use thiserror::Error;

/// Failure of a single gateway call
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The server answered with a non-success status
    ///
    /// `body` holds the decoded JSON body when the server sent one.
    #[error("HTTP {status}: {}", describe_body(.body))]
    Status { status: u16, body: Option<Value> },

    /// No response arrived (connection refused, DNS, TLS, ...)
    #[error("Transport error: {0}")]
    Transport(String),

    /// A success response whose body was not JSON
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// An argument could not be serialized into the payload
    #[error("Failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),

    /// The payload could not be turned into a form (bad file part)
    #[error("Invalid form part: {0}")]
    InvalidPart(String),
}

impl GatewayError {
    /// The server's response body, if there was one
    pub fn response_body(&self) -> Option<&Value> {
        match self {
            GatewayError::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Consume the error, keeping the server's response body
    pub fn into_response_body(self) -> Option<Value> {
        match self {
            GatewayError::Status { body, .. } => body,
            _ => None,
        }
    }

    /// Error kind label used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            GatewayError::Status { .. } => "StatusError",
            GatewayError::Transport(_) => "TransportError",
            GatewayError::Decode(_) => "DecodeError",
            GatewayError::Encode(_) => "EncodeError",
            GatewayError::InvalidPart(_) => "InvalidPartError",
        }
    }
}

fn describe_body(body: &Option<Value>) -> String {
    match body {
        Some(body) => body.to_string(),
        None => "no body".to_string(),
    }
}
