//! Small string helpers for derived presentation fields.

/// Truncate `s` to at most `max_chars` characters (not bytes).
///
/// A string that already fits is returned unchanged, with no ellipsis.
/// Otherwise the cut prefers the last word boundary inside the kept
/// prefix, trailing whitespace is dropped, and `ellipsis` (when given)
/// is appended inside the budget.
pub fn trunc(s: &str, max_chars: usize, ellipsis: Option<&str>) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }

    let tail = ellipsis.unwrap_or("");
    let budget = max_chars.saturating_sub(tail.chars().count());
    let mut cut: String = s.chars().take(budget).collect();
    if let Some(pos) = cut.rfind(' ') {
        cut.truncate(pos);
    }

    let mut out = cut.trim_end().to_string();
    out.push_str(tail);
    out
}

/// ASCII slug: lowercased alphanumerics with separator runs collapsed to
/// single hyphens. Non-ASCII letters are dropped rather than hyphenated.
pub fn slugify(s: &str) -> String {
    let mut slug = String::with_capacity(s.len());
    let mut pending_separator = false;
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c.to_ascii_lowercase());
            pending_separator = false;
        } else if c.is_alphabetic() {
            continue;
        } else {
            pending_separator = true;
        }
    }
    slug
}
