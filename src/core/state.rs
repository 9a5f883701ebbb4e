//! # Application State
//!
//! Core session state. Domain data only; presentation state (input buffer,
//! scroll position, geometry) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── client: Arc<dyn CompletionClient>  // remote model
//! ├── transcript: Transcript             // append-only chat lines
//! ├── model_name: String                 // shown in the title bar
//! ├── status_message: String             // status bar text
//! ├── is_loading: bool                   // a request is outstanding
//! └── pending_prompt: Option<String>     // prompt of the outstanding request
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::inference::{CompletionClient, Transcript};
use std::sync::Arc;

/// Prompt template wrapped around the user's raw input.
pub fn rhyme_prompt(input: &str) -> String {
    format!("What rhymes with the word '{input}'?")
}

pub const WELCOME_STATUS: &str = "Type a word and press Enter";

pub struct App {
    pub client: Arc<dyn CompletionClient>,
    pub transcript: Transcript,
    pub model_name: String,
    pub status_message: String,
    pub is_loading: bool,
    pub pending_prompt: Option<String>,
}

impl App {
    pub fn new(client: Arc<dyn CompletionClient>, model_name: String) -> Self {
        Self {
            client,
            transcript: Transcript::new(),
            model_name,
            status_message: String::from(WELCOME_STATUS),
            is_loading: false,
            pending_prompt: None,
        }
    }
}
