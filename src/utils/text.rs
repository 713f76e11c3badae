use unicode_width::UnicodeWidthStr;

/// Display width of a cell as rendered in a terminal.
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Right-pad text with spaces up to the given display width.
/// Text already at or beyond the width is returned unchanged.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - text_width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("NULL"), 4);
        assert_eq!(display_width(""), 0);
        // Wide CJK characters count double
        assert_eq!(display_width("東京"), 4);
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("abc", 5), "abc  ");
        assert_eq!(pad_to_width("abcdef", 5), "abcdef");
        assert_eq!(pad_to_width("", 3), "   ");
    }

    #[test]
    fn test_pad_to_width_counts_display_columns() {
        // "東京" occupies 4 columns, so only one space is added
        assert_eq!(pad_to_width("東京", 5), "東京 ");
    }
}
