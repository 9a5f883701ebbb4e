//! # Core Application Logic
//!
//! Session state and the reducer that drives it.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (session data) │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │ Completion │
//!             │  Adapter   │          │   Client   │
//!             │ (ratatui)  │          │ (reqwest)  │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all session state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`config`]: Startup configuration resolved from the environment

pub mod action;
pub mod config;
pub mod state;
