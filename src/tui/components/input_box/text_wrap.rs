//! Pure text wrapping utilities and dimensional constants for the InputBox.
//!
//! These are stateless helpers with no dependency on InputBox or CursorState.

/// Columns taken by the `┃ ` prompt gutter
pub(super) const HORIZONTAL_OVERHEAD: u16 = 2;
/// Top border carrying the character counter
pub(super) const VERTICAL_OVERHEAD: u16 = 1;
/// Visible content lines; longer input scrolls internally
pub(super) const MAX_VISIBLE_LINES: u16 = 3;
/// Offset from area left edge to content
pub(super) const CONTENT_X_OFFSET: u16 = HORIZONTAL_OVERHEAD;
/// Offset from area top edge to content
pub(super) const CONTENT_Y_OFFSET: u16 = VERTICAL_OVERHEAD;

/// Build textwrap options configured for the input box inner width.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Calculate the inner content width after subtracting the gutter.
/// Returns 0 if the area is too narrow.
pub(super) fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Count wrapped lines for the given text. Empty text still occupies one line.
pub(super) fn wrap_line_count(text: &str, width: u16) -> u16 {
    if width == 0 || text.is_empty() {
        return 1;
    }
    (textwrap::wrap(text, wrap_options(width)).len() as u16).max(1)
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// Collapse line breaks into spaces; the input area is a single logical line.
pub(super) fn flatten_line_breaks(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_line_count_empty_string() {
        assert_eq!(wrap_line_count("", 80), 1);
    }

    #[test]
    fn wrap_line_count_zero_width() {
        assert_eq!(wrap_line_count("hello", 0), 1);
    }

    #[test]
    fn wrap_line_count_wraps_long_text() {
        // 10 chars into a 5-wide column -> 2 lines
        assert_eq!(wrap_line_count("aaaaaaaaaa", 5), 2);
    }

    #[test]
    fn inner_width_subtracts_gutter() {
        assert_eq!(inner_width(30), 28);
        assert_eq!(inner_width(1), 0);
    }

    #[test]
    fn prev_char_boundary_multibyte() {
        // "café" = [99, 97, 102, 195, 169], 'é' starts at byte 3
        let s = "café";
        assert_eq!(prev_char_boundary(s, 5), 3);
        assert_eq!(prev_char_boundary(s, 3), 2);
    }

    #[test]
    fn next_char_boundary_emoji() {
        let s = "a🔥b";
        assert_eq!(next_char_boundary(s, 0), 1);
        assert_eq!(next_char_boundary(s, 1), 5);
        assert_eq!(next_char_boundary(s, 5), 6);
    }

    #[test]
    fn flatten_line_breaks_joins_lines() {
        assert_eq!(flatten_line_breaks("a\nb\r\nc\rd"), "a b c d");
        assert_eq!(flatten_line_breaks("plain"), "plain");
    }
}
