//! # TitleBar Component
//!
//! One-line status bar above the transcript.
//!
//! Stateless: every field is a prop copied from `App` each frame.
//!
//! 1. **Loading**: `"Rhyme Chat (model: gpt-4o) | Waiting for reply... ⠹"`
//! 2. **Status message**: `"Rhyme Chat (model: gpt-4o) | Type a word and press Enter"`
//! 3. **Default**: `"Rhyme Chat (model: gpt-4o)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub struct TitleBar {
    pub model_name: String,
    pub status_message: String,
    /// A request is outstanding
    pub is_loading: bool,
    /// Advances once per redraw while loading
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(model_name: String, status_message: String, is_loading: bool) -> Self {
        Self {
            model_name,
            status_message,
            is_loading,
            spinner_frame: 0,
        }
    }

    fn text(&self) -> String {
        let mut text = format!("Rhyme Chat (model: {})", self.model_name);
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        if self.is_loading {
            text.push(' ');
            text.push(SPINNER[self.spinner_frame % SPINNER.len()]);
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().add_modifier(Modifier::BOLD);
        frame.render_widget(Span::styled(self.text(), style), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(
            "gpt-4o".to_string(),
            "Type a word and press Enter".to_string(),
            false,
        );
        let text = rendered(&mut title_bar);

        assert!(text.contains("Rhyme Chat (model: gpt-4o)"));
        assert!(text.contains("| Type a word and press Enter"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("gpt-4o".to_string(), String::new(), false);
        let text = rendered(&mut title_bar);

        assert!(text.contains("gpt-4o"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_spinner_only_while_loading() {
        let mut title_bar =
            TitleBar::new("gpt-4o".to_string(), "Waiting for reply...".to_string(), true);
        title_bar.spinner_frame = 2;
        assert!(title_bar.text().ends_with("Waiting for reply... ⠹"));

        title_bar.is_loading = false;
        assert!(title_bar.text().ends_with("Waiting for reply..."));
    }
}
