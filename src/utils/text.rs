//! Text measurement and formatting helpers.

/// Count whitespace-separated words in a text.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Truncate a string to at most `max_chars` characters, appending an
/// ellipsis when anything was cut. Safe on multi-byte content.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{truncated}…")
}
