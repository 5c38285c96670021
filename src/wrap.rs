//! Greedy word wrapping against a pixel width budget.

use crate::metrics::TextMetrics;

/// Wraps `text` into lines no wider than `max_width`, one word at a time.
///
/// Words are separated by a single ASCII space only. Consecutive spaces
/// yield empty words that are kept and still cost a `space_width` gap when
/// packed, and `'\n'` is an ordinary character inside a word. A word that
/// is wider than `max_width` on its own is placed on its own line as-is.
///
/// # Example
/// ```
/// let lines = fontsheet::wrap_text(
///     "The quick brown fox",
///     |s| s.len() as f32 * 10.0,
///     10.0,
///     90.0,
/// );
/// assert_eq!(lines, vec!["The quick", "brown fox"]);
/// ```
pub fn wrap_text<F>(text: &str, width_of: F, space_width: f32, max_width: f32) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current_line: Vec<&str> = Vec::new();
    let mut current_width = 0.0f32;

    for word in text.split(' ') {
        let word_width = width_of(word);
        let add_space = if current_line.is_empty() { 0.0 } else { space_width };

        if current_width + add_space + word_width <= max_width {
            current_line.push(word);
            current_width += add_space + word_width;
        } else {
            // Word doesn't fit, start new line. An oversized word stays whole.
            if !current_line.is_empty() {
                lines.push(current_line.join(" "));
                current_line.clear();
            }
            current_line.push(word);
            current_width = word_width;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line.join(" "));
    }

    lines
}

/// Wraps `text` using a typeface's advance widths, including its space width.
pub fn wrap_lines<M>(text: &str, metrics: &M, max_width: f32) -> Vec<String>
where
    M: TextMetrics + ?Sized,
{
    let space_width = metrics.measure_text_width(" ");
    wrap_text(text, |word| metrics.measure_text_width(word), space_width, max_width)
}
