//! Pluralization for log messages.

/// Format count with noun, adding an `s` unless the count is exactly one
///
/// - `count_noun(0, "asset")` -> `"0 assets"`
/// - `count_noun(1, "asset")` -> `"1 asset"`
#[inline]
pub fn count_noun(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
