//! OpenAI chat-completions client.
//!
//! One request per prompt, no streaming, no conversation history:
//! `POST {base_url}/chat/completions` with a single user message.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::inference::{ClientError, CompletionClient, Role};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

// ============================================================================
// Chat Completions API Types
// ============================================================================

#[derive(Serialize, Debug)]
struct RequestMessage<'a> {
    role: Role,
    content: &'a str,
}

/// The request body. Deliberately carries nothing beyond model + one message.
#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize, Debug)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// `{"error": {"message": "..."}}` body returned on failures.
#[derive(Deserialize, Debug)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize, Debug)]
struct ErrorDetail {
    message: String,
}

// ============================================================================
// Translation Layer
// ============================================================================

fn build_request<'a>(model: &'a str, prompt: &'a str) -> ChatRequest<'a> {
    ChatRequest {
        model,
        messages: vec![RequestMessage {
            role: Role::User,
            content: prompt,
        }],
    }
}

/// Picks the first choice's content out of a response body.
fn extract_reply(body: &str) -> Result<String, ClientError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| ClientError::Parse(e.to_string()))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(ClientError::EmptyResponse)
}

/// Prefers the API's own error message over the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.to_string())
}

// ============================================================================
// Client Implementation
// ============================================================================

pub struct OpenAiClient {
    api_key: String,
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl OpenAiClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// * `api_key` - bearer credential
    /// * `base_url` - API root, e.g. `https://api.openai.com/v1`
    /// * `model` - model identifier sent with every request
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            client: reqwest::Client::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, prompt: &str) -> Result<String, ClientError> {
        let request = build_request(&self.model, prompt);
        info!(
            "Chat completion request: model={}, prompt_len={}",
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        debug!("OpenAI response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !status.is_success() {
            warn!("OpenAI API error: {} - {}", status.as_u16(), body);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let reply = extract_reply(&body)?;
        info!("Chat completion received: {} bytes", reply.len());
        Ok(reply)
    }
}
