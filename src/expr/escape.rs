//! Metacharacter escaping for the `regex` dialect.

use phf::{Set, phf_set};

/// Characters with special meaning somewhere in a pattern, inside or
/// outside a character class: `regex_syntax::is_meta_character` plus the
/// ASCII whitespace that is insignificant under `ignore_whitespace`.
const METACHARACTERS: Set<char> = phf_set! {
    '\\', '.', '+', '*', '?', '(', ')', '|', '[', ']', '{', '}', '^', '$', '#', '&', '-', '~',
    ' ', '\t', '\n', '\r', '\x0B', '\x0C',
};

pub fn is_meta_character(ch: char) -> bool {
    METACHARACTERS.contains(&ch)
}

/// Escape `raw` so that it matches itself literally, both as a top-level
/// pattern and inside a character class, with or without
/// `ignore_whitespace`.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if is_meta_character(ch) {
            out.push('\\');
            out.push(ch);
        } else if ch.is_whitespace() {
            // `regex` rejects `\` before non-ASCII, so spell it as a code point.
            out.push_str(&format!("\\x{{{:X}}}", u32::from(ch)));
        } else {
            out.push(ch);
        }
    }
    out
}
