use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while asking the remote model for a completion.
/// The event loop treats every variant as fatal.
#[derive(Debug)]
pub enum ClientError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned a non-success status (auth, rate limit, server error).
    Api { status: u16, message: String },
    /// Failed to parse the response body.
    Parse(String),
    /// The response parsed but carried no assistant message.
    EmptyResponse,
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Network(msg) => write!(f, "network error: {msg}"),
            ClientError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ClientError::Parse(msg) => write!(f, "parse error: {msg}"),
            ClientError::EmptyResponse => write!(f, "response contained no message"),
        }
    }
}

impl std::error::Error for ClientError {}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Returns the name of the backing service.
    fn name(&self) -> &str;

    /// Sends a single user prompt and returns the assistant's reply text.
    async fn complete(&self, prompt: &str) -> Result<String, ClientError>;
}
