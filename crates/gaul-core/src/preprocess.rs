use unicode_normalization::UnicodeNormalization;

/// Normalize a raw user query before dispatch.
///
/// An empty result means the query must be rejected without any outbound
/// call.
pub fn normalize_query(text: &str) -> String {
    let mut text = text.trim().to_string();

    if text.is_empty() {
        return text;
    }

    // Unicode normalization (NFKC)
    text = text.nfkc().collect();

    text = text.replace(['\n', '\r'], " ").trim().to_string();

    text
}
