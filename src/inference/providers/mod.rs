pub mod openai;

pub use openai::{DEFAULT_OPENAI_BASE_URL, OpenAiClient};
