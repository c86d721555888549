//! Small shared helpers.

/// Format a count with its noun: `1 page`, `3 pages`.
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
