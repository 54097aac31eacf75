//! Reply text normalization
//!
//! The only transformation applied to reply text before display: literal
//! newlines become explicit break markers. No sanitization or other markup
//! handling happens here.

/// Marker substituted for a line break
pub const LINE_BREAK: &str = "<br>";

/// Map raw reply text to display text. `\r\n` and `\n` both collapse to one
/// break marker; text without newlines is returned unchanged.
pub fn normalize_reply(raw: &str) -> String {
    raw.replace("\r\n", LINE_BREAK).replace('\n', LINE_BREAK)
}
