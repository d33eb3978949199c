//! Signal phrase lookup.
//!
//! Matching is exact and case-sensitive, and always picks the leftmost
//! occurrence. Lines end at `\n`, `\r`, `\r\n` (one break), vertical tab,
//! form feed, the file/group/record separators, NEL, U+2028 and U+2029.

/// Byte index of the first occurrence of `anchor` in `text`.
///
/// An empty anchor is never found.
pub fn find(text: &str, anchor: &str) -> Option<usize> {
    if anchor.is_empty() {
        return None;
    }
    text.find(anchor)
}

/// Byte index just past the first occurrence of `anchor`.
pub fn end_of(text: &str, anchor: &str) -> Option<usize> {
    find(text, anchor).map(|start| start + anchor.len())
}

/// Whether `c` ends a line.
pub fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0B}'
            | '\u{0C}'
            | '\u{1C}'
            | '\u{1D}'
            | '\u{1E}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split `text` into lines without their terminators.
///
/// A trailing break does not produce an empty last line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
