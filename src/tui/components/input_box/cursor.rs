//! Cursor position tracking and navigation for the InputBox.
//!
//! `CursorState` owns the cursor byte offset, scroll offset, cached width and
//! blink phase. Navigation methods take `buffer: &str` explicitly; the text
//! itself is owned by `InputBox`.

use super::text_wrap::{
    CONTENT_X_OFFSET, CONTENT_Y_OFFSET, MAX_VISIBLE_LINES, inner_width, wrap_line_count,
    wrap_options,
};
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// Line offset for internal scrolling (0 when content fits in viewport)
    pub scroll_offset: u16,
    /// Content width from the last resize or render
    pub last_content_width: u16,
    /// Blink phase; toggled by ticks, forced on by edits
    pub visible: bool,
}

impl CursorState {
    const DEFAULT_WIDTH: u16 = 30;

    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
            last_content_width: Self::DEFAULT_WIDTH,
            visible: true,
        }
    }

    /// Reset cursor to start (used when the buffer is cleared).
    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
        self.visible = true;
    }

    /// Wrapped-line index and display column of the cursor.
    fn line_and_column(&self, buffer: &str, width: u16) -> (u16, u16) {
        let text_before_cursor = &buffer[..self.pos];
        let segments = textwrap::wrap(text_before_cursor, wrap_options(width));
        if segments.is_empty() {
            return (0, 0);
        }

        // textwrap trims trailing whitespace, so measure the raw text instead
        // of the last wrapped segment.
        let consumed: usize = segments
            .iter()
            .take(segments.len() - 1)
            .map(|seg| seg.width())
            .sum();
        let line = (segments.len() - 1) as u16;
        let column = text_before_cursor.width().saturating_sub(consumed) as u16;

        // A cursor sitting exactly at the wrap point renders on the next line
        if column >= width && self.pos < buffer.len() {
            (line + 1, 0)
        } else {
            (line, column.min(width))
        }
    }

    /// Move cursor one wrapped line up or down, keeping its column where possible.
    ///
    /// Returns `true` if cursor moved, `false` if already at boundary.
    pub fn move_vertically(&mut self, buffer: &str, direction: i16) -> bool {
        let width = inner_width(self.last_content_width);
        if width == 0 || buffer.is_empty() {
            return false;
        }

        let lines = textwrap::wrap(buffer, wrap_options(width));
        let (current_line, _) = self.line_and_column(buffer, width);
        let current_line = usize::from(current_line).min(lines.len().saturating_sub(1));

        let target_line = if direction < 0 {
            if current_line == 0 {
                return false;
            }
            current_line - 1
        } else {
            if current_line + 1 >= lines.len() {
                return false;
            }
            current_line + 1
        };

        // Byte offset of each wrapped line start, found by locating the
        // segment text in the buffer in order.
        let mut starts = Vec::with_capacity(lines.len());
        let mut search_from = 0;
        for line in &lines {
            let start = buffer[search_from..]
                .find(&**line)
                .map(|i| search_from + i)
                .unwrap_or(search_from);
            starts.push(start);
            search_from = start + line.len();
        }

        let column_bytes = self.pos.saturating_sub(starts[current_line]);
        let target_len = lines[target_line].len();
        let mut target = starts[target_line] + column_bytes.min(target_len);
        while !buffer.is_char_boundary(target) {
            target -= 1;
        }
        self.pos = target;
        true
    }

    /// Update scroll offset to keep cursor visible within the viewport.
    pub fn update_scroll_offset(&mut self, buffer: &str, content_width: u16) {
        let width = inner_width(content_width);
        let total_lines = wrap_line_count(buffer, width);

        if total_lines <= MAX_VISIBLE_LINES || width == 0 {
            self.scroll_offset = 0;
            return;
        }

        let (cursor_line, _) = self.line_and_column(buffer, width);

        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = cursor_line.saturating_sub(MAX_VISIBLE_LINES - 1);
        }
    }

    /// Screen position for the cursor. Returns (column, row).
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        if width == 0 {
            return (area.x + CONTENT_X_OFFSET, area.y + CONTENT_Y_OFFSET);
        }

        let (line, column) = self.line_and_column(buffer, width);
        let visible_line = line.saturating_sub(self.scroll_offset);

        (
            area.x + CONTENT_X_OFFSET + column,
            area.y + CONTENT_Y_OFFSET + visible_line,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(width: u16) -> Rect {
        Rect::new(0, 0, width, 4)
    }

    #[test]
    fn screen_pos_empty_buffer() {
        let cursor = CursorState::new();
        assert_eq!(cursor.screen_pos("", area(30)), (2, 1));
    }

    #[test]
    fn screen_pos_keeps_trailing_space() {
        let mut cursor = CursorState::new();
        let buffer = "cat ";
        cursor.pos = buffer.len();
        assert_eq!(cursor.screen_pos(buffer, area(30)), (6, 1));
    }

    #[test]
    fn screen_pos_on_wrapped_line() {
        // inner width 5: "aaaaa" | "aa"
        let mut cursor = CursorState::new();
        let buffer = "aaaaaaa";
        cursor.pos = buffer.len();
        assert_eq!(cursor.screen_pos(buffer, area(7)), (4, 2));
    }

    #[test]
    fn screen_pos_counts_wide_chars() {
        let mut cursor = CursorState::new();
        let buffer = "猫";
        cursor.pos = buffer.len();
        assert_eq!(cursor.screen_pos(buffer, area(30)), (4, 1));
    }

    #[test]
    fn move_vertically_between_wrapped_lines() {
        let mut cursor = CursorState::new();
        cursor.last_content_width = 7; // inner width 5
        let buffer = "abcdefgh";
        cursor.pos = 7; // on second line, column 2

        assert!(cursor.move_vertically(buffer, -1));
        assert_eq!(cursor.pos, 2);
        assert!(!cursor.move_vertically(buffer, -1));

        assert!(cursor.move_vertically(buffer, 1));
        assert_eq!(cursor.pos, 7);
        assert!(!cursor.move_vertically(buffer, 1));
    }

    #[test]
    fn scroll_follows_cursor_past_visible_lines() {
        let mut cursor = CursorState::new();
        let buffer = "a".repeat(25); // inner width 5 -> 5 lines
        cursor.pos = buffer.len();
        cursor.update_scroll_offset(&buffer, 7);
        assert_eq!(cursor.scroll_offset, 2);

        cursor.pos = 0;
        cursor.update_scroll_offset(&buffer, 7);
        assert_eq!(cursor.scroll_offset, 0);
    }
}
