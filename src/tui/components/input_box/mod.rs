//! # InputBox Component
//!
//! Single-line text entry below the transcript.
//!
//! ## Responsibilities
//!
//! - Capture text input, capped at `MAX_CHARS` characters
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Emit a submission on Enter when the buffer is non-empty
//! - Blink the cursor on tick events
//!
//! ## State Management
//!
//! The buffer is internal state and is only cleared by the parent once the
//! submitted text has been answered. `disabled` is a prop from the
//! application state: while a request is outstanding, input is ignored.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{
    MAX_VISIBLE_LINES, VERTICAL_OVERHEAD, flatten_line_breaks, inner_width, next_char_boundary,
    prev_char_boundary, wrap_options,
};

/// Maximum number of characters the input accepts.
pub const MAX_CHARS: usize = 280;
pub const PLACEHOLDER: &str = "What rhymes with...";
const PROMPT: &str = "┃ ";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User pressed Enter with a non-empty buffer
    Submit(String),
    /// Text content or cursor position changed
    ContentChanged,
}

/// Text input component.
///
/// # Props
///
/// - `disabled`: a request is outstanding; edits and submits are ignored
///
/// # State
///
/// - `buffer`: Current text being typed
/// - `cursor`: Cursor position, scroll offset, width and blink phase
pub struct InputBox {
    pub buffer: String,
    pub disabled: bool,
    cursor: CursorState,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            disabled: false,
            cursor: CursorState::new(),
        }
    }

    /// Total rows the component occupies.
    pub fn height(&self) -> u16 {
        MAX_VISIBLE_LINES + VERTICAL_OVERHEAD
    }

    pub fn width(&self) -> u16 {
        self.cursor.last_content_width
    }

    /// Track a new terminal width (resize events).
    pub fn set_width(&mut self, width: u16) {
        self.cursor.last_content_width = width;
        self.cursor.update_scroll_offset(&self.buffer, width);
    }

    /// Empty the buffer and move the cursor home.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor.reset();
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor.visible
    }

    fn remaining_chars(&self) -> usize {
        MAX_CHARS.saturating_sub(self.buffer.chars().count())
    }

    fn insert(&mut self, text: &str) -> Option<InputEvent> {
        let fitted: String = text.chars().take(self.remaining_chars()).collect();
        if fitted.is_empty() {
            return None;
        }
        self.buffer.insert_str(self.cursor.pos, &fitted);
        self.cursor.pos += fitted.len();
        Some(InputEvent::ContentChanged)
    }

    /// Wrapped lines currently scrolled into view.
    fn visible_lines(&self, content_width: u16) -> Vec<String> {
        let width = inner_width(content_width);
        if width == 0 {
            return Vec::new();
        }
        textwrap::wrap(&self.buffer, wrap_options(width))
            .into_iter()
            .skip(self.cursor.scroll_offset as usize)
            .take(MAX_VISIBLE_LINES as usize)
            .map(|line| line.into_owned())
            .collect()
    }

    fn apply_edit(&mut self, event: &TuiEvent) -> Option<InputEvent> {
        match event {
            TuiEvent::InputChar(c) => self.insert(c.encode_utf8(&mut [0; 4])),
            TuiEvent::Paste(text) => self.insert(&flatten_line_breaks(text)),
            TuiEvent::Backspace => {
                if self.cursor.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(prev..self.cursor.pos);
                    self.cursor.pos = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor.pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(self.cursor.pos..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor.pos > 0).then(|| {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor.pos < self.buffer.len()).then(|| {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.cursor.pos != 0).then(|| {
                self.cursor.pos = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor.pos != self.buffer.len()).then(|| {
                self.cursor.pos = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorUp => self
                .cursor
                .move_vertically(&self.buffer, -1)
                .then_some(InputEvent::ContentChanged),
            TuiEvent::CursorDown => self
                .cursor
                .move_vertically(&self.buffer, 1)
                .then_some(InputEvent::ContentChanged),
            _ => None,
        }
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.last_content_width = area.width;
        self.cursor.update_scroll_offset(&self.buffer, area.width);

        let dim = Style::default().fg(Color::DarkGray);
        let gutter = Span::styled(PROMPT, Style::default().fg(Color::Indexed(12)));

        let mut lines: Vec<Line> = if self.buffer.is_empty() {
            vec![Line::from(vec![
                gutter.clone(),
                Span::styled(PLACEHOLDER, dim.add_modifier(Modifier::ITALIC)),
            ])]
        } else {
            self.visible_lines(area.width)
                .into_iter()
                .map(|text| Line::from(vec![gutter.clone(), Span::raw(text)]))
                .collect()
        };
        while lines.len() < MAX_VISIBLE_LINES as usize {
            lines.push(Line::from(gutter.clone()));
        }

        let counter = format!(" {}/{} ", self.buffer.chars().count(), MAX_CHARS);
        let block = Block::new()
            .borders(Borders::TOP)
            .border_style(dim)
            .title(counter);

        let style = if self.disabled {
            Style::default().add_modifier(Modifier::DIM)
        } else {
            Style::default()
        };
        frame.render_widget(Paragraph::new(lines).block(block).style(style), area);

        // Not setting a position leaves the terminal cursor hidden for this frame
        if self.cursor.visible && !self.disabled {
            let (cursor_x, cursor_y) = self.cursor.screen_pos(&self.buffer, area);
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if let TuiEvent::BlinkTick = event {
            self.cursor.visible = !self.cursor.visible;
            return None;
        }
        if self.disabled {
            return None;
        }
        if let TuiEvent::Submit = event {
            return (!self.buffer.is_empty()).then(|| InputEvent::Submit(self.buffer.clone()));
        }

        let result = self.apply_edit(event);
        if result.is_some() {
            self.cursor.visible = true;
            self.cursor
                .update_scroll_offset(&self.buffer, self.cursor.last_content_width);
        }
        result
    }
}
