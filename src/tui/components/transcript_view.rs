//! # TranscriptView Component
//!
//! Scrollable view of the chat transcript.
//!
//! ## Responsibilities
//!
//! - Render every transcript line with its role style
//! - Show a welcome text while the transcript is empty
//! - Follow the bottom of the transcript unless the user scrolled up
//!
//! ## Architecture
//!
//! `TranscriptView` is a transient component (created each frame) that wraps
//! `&'a mut TranscriptViewState` (persistent state) and a `Transcript` (props).
//! The whole transcript is rebuilt into one paragraph every frame.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::inference::{ChatMessage, Role, Transcript};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const WELCOME_TEXT: &str = "Welcome to the chat room!\nType a message and press Enter to send.";

pub fn sender_style() -> Style {
    Style::default().fg(Color::Indexed(12))
}

pub fn responder_style() -> Style {
    Style::default().fg(Color::Indexed(9))
}

/// One `Line` per line of the message text, the role label on the first.
///
/// User messages colour only the label; assistant messages are coloured whole.
fn message_lines(message: &ChatMessage) -> Vec<Line<'_>> {
    let label = message.role.label();
    let mut pieces = message.text.lines();
    let first = pieces.next().unwrap_or_default();

    let mut lines = vec![match message.role {
        Role::User => Line::from(vec![
            Span::styled(label, sender_style()),
            Span::raw(first),
        ]),
        Role::Assistant => Line::styled(format!("{label}{first}"), responder_style()),
    }];
    lines.extend(pieces.map(|piece| match message.role {
        Role::User => Line::raw(piece),
        Role::Assistant => Line::styled(piece, responder_style()),
    }));
    lines
}

/// Scroll state for the transcript. Persisted in the parent `TuiState`.
pub struct TranscriptViewState {
    pub scroll_state: ScrollViewState,
    /// When true, the view follows new content
    pub stick_to_bottom: bool,
    /// Content height measured during the last render
    pub content_height: u16,
    /// Viewport height from the last render
    pub viewport_height: u16,
}

impl Default for TranscriptViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptViewState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            stick_to_bottom: true,
            content_height: 0,
            viewport_height: 0,
        }
    }

    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Pin to the bottom; applied on the next render once heights are known.
    pub fn scroll_to_bottom(&mut self) {
        self.stick_to_bottom = true;
        self.scroll_state.set_offset(Position {
            x: 0,
            y: self.max_offset(),
        });
    }

    /// Keep the offset inside the content bounds.
    fn clamp_scroll(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Re-engage auto-scroll once the user has scrolled back to the bottom.
    fn repin_if_at_bottom(&mut self) {
        self.clamp_scroll();
        if self.scroll_state.offset().y >= self.max_offset() {
            self.stick_to_bottom = true;
        }
    }
}

impl EventHandler for TranscriptViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
            }
            _ => return None,
        }
        Some(())
    }
}

pub struct TranscriptView<'a> {
    pub state: &'a mut TranscriptViewState,
    pub transcript: &'a Transcript,
}

impl<'a> TranscriptView<'a> {
    pub fn new(state: &'a mut TranscriptViewState, transcript: &'a Transcript) -> Self {
        Self { state, transcript }
    }
}

impl Component for TranscriptView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.transcript.is_empty() {
            self.state.content_height = 0;
            self.state.viewport_height = area.height;
            frame.render_widget(Paragraph::new(WELCOME_TEXT), area);
            return;
        }

        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        let lines: Vec<Line> = self
            .transcript
            .messages()
            .iter()
            .flat_map(message_lines)
            .collect();
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        let height = paragraph.line_count(content_width).min(u16::MAX as usize) as u16;

        self.state.content_height = height;
        self.state.viewport_height = area.height;
        if self.state.stick_to_bottom {
            self.state.scroll_to_bottom();
        } else {
            self.state.clamp_scroll();
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, height));

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
