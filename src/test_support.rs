//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::inference::{ClientError, CompletionClient};

/// A client that replays canned results in order and records every prompt.
#[derive(Default)]
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<String, ClientError>>>,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    pub fn new(replies: Vec<Result<String, ClientError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, prompt: &str) -> Result<String, ClientError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ClientError::EmptyResponse))
    }
}

/// Creates a test App with a client that has nothing scripted.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(ScriptedClient::default()), "test-model".to_string())
}

/// Creates a test App backed by the given client.
pub fn scripted_app(client: Arc<ScriptedClient>) -> crate::core::state::App {
    crate::core::state::App::new(client, "test-model".to_string())
}
