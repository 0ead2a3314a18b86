/// Normalize a user-provided name into a filesystem-safe slug.
///
/// ASCII letters and digits are kept (lowercased), `-` and `_` are kept, and any
/// run of other characters becomes a single `-`. Returns `fallback` if nothing
/// usable is left.
pub fn sanitize_slug(raw: &str, fallback: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;
    for ch in raw.trim().chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    let trimmed = slug.trim_matches(&['-', '_'][..]);
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
