pub mod client;
pub mod providers;
pub mod types;

pub use client::{ClientError, CompletionClient};
pub use providers::{DEFAULT_OPENAI_BASE_URL, OpenAiClient};
pub use types::{ChatMessage, Role, Transcript};
