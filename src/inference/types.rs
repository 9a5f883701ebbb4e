use serde::{Deserialize, Serialize};

/// Who authored a transcript entry.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

impl Role {
    /// Label rendered in front of the message text.
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "You: ",
            Role::Assistant => "AI: ",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }

    /// The plain line shown in the transcript, e.g. `You: hello`.
    pub fn line(&self) -> String {
        format!("{}{}", self.role.label(), self.text)
    }
}

/// Append-only list of chat messages. Insertion order is display order.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Rendered plain lines in display order.
    pub fn lines(&self) -> Vec<String> {
        self.messages.iter().map(ChatMessage::line).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::User.label(), "You: ");
        assert_eq!(Role::Assistant.label(), "AI: ");
    }

    #[test]
    fn test_message_line_prefixes_role() {
        assert_eq!(ChatMessage::user("hi").line(), "You: hi");
        assert_eq!(ChatMessage::assistant("hello").line(), "AI: hello");
    }

    #[test]
    fn test_transcript_keeps_insertion_order() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());

        transcript.push(ChatMessage::user("one"));
        transcript.push(ChatMessage::assistant("two"));
        transcript.push(ChatMessage::user("one"));

        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.lines(), vec!["You: one", "AI: two", "You: one"]);
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }
}
