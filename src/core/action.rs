//! # Actions
//!
//! Everything that can happen in a session becomes an `Action`.
//! User presses Enter? That's `Action::Submit(text)`.
//! The model replies? That's `Action::CompletionReceived(reply)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the caller must
//! perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::state::{App, WELCOME_STATUS, rhyme_prompt};
use crate::inference::ChatMessage;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// User pressed Enter with the given input buffer.
    Submit(String),
    /// The outstanding request succeeded.
    CompletionReceived(String),
    /// The outstanding request failed.
    CompletionFailed(String),
    Quit,
}

/// Work the caller has to do after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Send this prompt to the completion client.
    SpawnRequest(String),
    /// Two lines were appended; clear input and scroll to bottom.
    TranscriptChanged,
    Quit,
    /// Unrecoverable error; terminate the session.
    Fatal(String),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Submit(text) => {
            if text.is_empty() {
                return Effect::None;
            }
            if app.is_loading {
                warn!("Submit ignored: a request is already outstanding");
                return Effect::None;
            }
            let prompt = rhyme_prompt(&text);
            info!("Submitting prompt ({} bytes)", prompt.len());
            app.is_loading = true;
            app.pending_prompt = Some(prompt.clone());
            app.status_message = String::from("Waiting for reply...");
            Effect::SpawnRequest(prompt)
        }
        Action::CompletionReceived(reply) => {
            let Some(prompt) = app.pending_prompt.take() else {
                warn!("Dropping reply with no pending prompt");
                return Effect::None;
            };
            app.transcript.push(ChatMessage::user(prompt));
            app.transcript.push(ChatMessage::assistant(reply));
            app.is_loading = false;
            app.status_message = String::from(WELCOME_STATUS);
            Effect::TranscriptChanged
        }
        Action::CompletionFailed(message) => {
            warn!("Completion failed: {}", message);
            app.is_loading = false;
            app.pending_prompt = None;
            Effect::Fatal(message)
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_submit_empty_is_noop() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Submit(String::new())), Effect::None);
        assert!(!app.is_loading);
        assert!(app.pending_prompt.is_none());
        assert!(app.transcript.is_empty());
    }

    #[test]
    fn test_submit_spawns_request_with_prompt() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Submit("cat".to_string()));
        assert_eq!(
            effect,
            Effect::SpawnRequest("What rhymes with the word 'cat'?".to_string())
        );
        assert!(app.is_loading);
        // Nothing is appended until the reply arrives
        assert!(app.transcript.is_empty());
    }

    #[test]
    fn test_submit_while_loading_is_rejected() {
        let mut app = test_app();
        update(&mut app, Action::Submit("cat".to_string()));
        assert_eq!(update(&mut app, Action::Submit("dog".to_string())), Effect::None);
        assert_eq!(
            app.pending_prompt.as_deref(),
            Some("What rhymes with the word 'cat'?")
        );
    }

    #[test]
    fn test_reply_appends_user_then_assistant() {
        let mut app = test_app();
        update(&mut app, Action::Submit("cat".to_string()));
        let effect = update(
            &mut app,
            Action::CompletionReceived("hat, bat, mat".to_string()),
        );

        assert_eq!(effect, Effect::TranscriptChanged);
        assert!(!app.is_loading);
        assert_eq!(
            app.transcript.lines(),
            vec!["You: What rhymes with the word 'cat'?", "AI: hat, bat, mat"]
        );
    }

    #[test]
    fn test_reply_without_pending_prompt_is_dropped() {
        let mut app = test_app();
        let effect = update(&mut app, Action::CompletionReceived("stray".to_string()));
        assert_eq!(effect, Effect::None);
        assert!(app.transcript.is_empty());
    }

    #[test]
    fn test_failure_is_fatal_and_appends_nothing() {
        let mut app = test_app();
        update(&mut app, Action::Submit("cat".to_string()));
        let effect = update(&mut app, Action::CompletionFailed("boom".to_string()));

        assert_eq!(effect, Effect::Fatal("boom".to_string()));
        assert!(app.transcript.is_empty());
        assert!(!app.is_loading);
        assert!(app.pending_prompt.is_none());
    }

    #[test]
    fn test_transcript_order_follows_submission_order() {
        let mut app = test_app();
        for (word, reply) in [("cat", "hat"), ("dog", "log"), ("cat", "hat")] {
            update(&mut app, Action::Submit(word.to_string()));
            update(&mut app, Action::CompletionReceived(reply.to_string()));
        }
        assert_eq!(
            app.transcript.lines(),
            vec![
                "You: What rhymes with the word 'cat'?",
                "AI: hat",
                "You: What rhymes with the word 'dog'?",
                "AI: log",
                "You: What rhymes with the word 'cat'?",
                "AI: hat",
            ]
        );
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
