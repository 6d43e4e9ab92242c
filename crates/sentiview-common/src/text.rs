//! Splitting submitted text into classifiable lines.

/// Characters that end a line. `\r\n` is covered because the empty piece
/// between `\r` and `\n` is dropped.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Unicode whitespace plus the information separators `\x1c`..=`\x1f`.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Splits `text` into trimmed, non-empty lines, preserving order.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split(LINE_BREAKS)
        .map(|line| line.trim_matches(is_blank))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Truncates a string to at most `max_chars` characters, ending in an ellipsis when cut.
pub fn truncate_chars(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        return input.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut truncated: String = input.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}
