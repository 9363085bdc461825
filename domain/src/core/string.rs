//! String utilities for the domain layer.

/// Truncate a string for log output, appending an ellipsis (UTF-8 safe)
///
/// `max_len` is measured in bytes, but the cut always lands on a
/// character boundary.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}
