use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{TitleBar, TranscriptView};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

/// Splits the screen into title, transcript, gap and input rows.
fn layout(area: Rect, input_height: u16) -> [Rect; 4] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0), Length(1), Length(input_height)]).areas(area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let [title_area, transcript_area, _gap, input_area] =
        layout(frame.area(), tui.input_box.height());

    let mut title_bar = TitleBar::new(
        app.model_name.clone(),
        app.status_message.clone(),
        app.is_loading,
    );
    title_bar.spinner_frame = spinner_frame;
    title_bar.render(frame, title_area);

    TranscriptView::new(&mut tui.transcript, &app.transcript).render(frame, transcript_area);

    tui.input_box.render(frame, input_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_layout_reserves_input_rows() {
        let [title, transcript, gap, input] = layout(Rect::new(0, 0, 80, 24), 4);
        assert_eq!(title.height, 1);
        assert_eq!(gap.height, 1);
        assert_eq!(input.height, 4);
        assert_eq!(transcript.height, 18);
        assert_eq!(input.y, 20);
    }

    #[test]
    fn test_draw_ui_initial_screen() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let app = test_app();
        let mut tui = TuiState::new();

        terminal.draw(|f| draw_ui(f, &app, &mut tui, 0)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Rhyme Chat (model: test-model)"));
        assert!(text.contains("Welcome to the chat room!"));
        assert!(text.contains("What rhymes with..."));
    }

    #[test]
    fn test_draw_ui_with_transcript() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = test_app();
        let mut tui = TuiState::new();
        update(&mut app, Action::Submit("cat".to_string()));
        update(&mut app, Action::CompletionReceived("hat, bat, mat".to_string()));

        terminal.draw(|f| draw_ui(f, &app, &mut tui, 0)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("You: What rhymes with the word 'cat'?"));
        assert!(text.contains("AI: hat, bat, mat"));
        assert!(!text.contains("Welcome to the chat room!"));
    }
}
