//! Character-boundary-safe text helpers

/// First `max_chars` characters of `text`
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Truncate to `max_chars` and mark the cut with an ellipsis
///
/// Text that already fits is returned unchanged.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    let cut = truncate_chars(text, max_chars);
    if cut.len() == text.len() {
        cut.to_string()
    } else {
        format!("{}...", cut.trim_end())
    }
}
