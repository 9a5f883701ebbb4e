//! # TUI Components
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: model name, status text and loading spinner
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBox`: capped text entry with blinking cursor
//! - `TranscriptView`: scrollable transcript, backed by `TranscriptViewState`
//!
//! Each component file co-locates its state, event types, rendering, event
//! handling and tests. Components receive external data as props (struct
//! fields) rather than reaching into `App`.
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs        (top status line)
//! ├── transcript_view.rs  (scrollable transcript)
//! └── input_box/          (text entry)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod input_box;
pub use input_box::{InputBox, InputEvent};
pub mod transcript_view;
pub use transcript_view::{TranscriptView, TranscriptViewState};
