//! Compact output rendering helpers for CLI surfaces.
//!
//! Keeps listing output bounded and readable while preserving signal.

/// Collapse newlines/extra whitespace and bound length for terminal display.
pub fn ellipsize(input: &str, max_chars: usize) -> String {
    let collapsed = input.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut chars = collapsed.chars();
    let preview: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", preview)
    } else {
        preview
    }
}

/// Left-align `key` in a fixed-width column followed by `value`.
pub fn aligned_row(key: &str, value: &str, key_width: usize) -> String {
    format!("{:key_width$}  {}", key, value)
}
