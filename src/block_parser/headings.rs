//! ATX heading classification.

/// Try to parse an ATX heading from a trimmed line, returning the level
/// (1-4) and the text after the marker.
pub(crate) fn try_parse_atx_heading(trimmed: &str) -> Option<(u8, &str)> {
    let hash_count = trimmed.bytes().take_while(|&b| b == b'#').count();
    if hash_count == 0 || hash_count > 4 {
        return None;
    }

    // The marker must be followed by a space; otherwise the line is an
    // ordinary paragraph (e.g. a bare `#hashtag`).
    let text = trimmed[hash_count..].strip_prefix(' ')?;

    Some((hash_count as u8, text.trim()))
}
