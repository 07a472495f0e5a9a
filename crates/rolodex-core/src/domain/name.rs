/// Names are the lookup key, so they are stored lowercased.
pub fn normalize_name(value: &str) -> Option<String> {
    normalize_text(value).map(|name| name.to_lowercase())
}

/// Trims a free-text field; blank input means the field is absent.
pub fn normalize_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}
