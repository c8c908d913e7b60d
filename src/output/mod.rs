// Output formatting: HTML widgets and terminal summaries.

pub mod format;
pub mod html;
pub mod terminal;

/// Shorten a card title or description for the terminal summary.
///
/// Counts characters, not bytes, so review text with emoji or accents is cut
/// on a boundary. Adds "..." only when something was dropped.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
