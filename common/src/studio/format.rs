//! Toolbar formatting of the Studio textarea.
//!
//! Browsers report the selection in UTF-16 code units while Rust slices
//! strings by UTF-8 byte. Everything here takes and returns UTF-16 positions
//! so the page can hand them straight to `selectionStart`/`setSelectionRange`.

/// Placeholder inserted when nothing is selected.
const PLACEHOLDER: &str = "texto";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStyle {
    Normal,
    Bold,
    Italic,
    BoldItalic,
    BulletedList,
    Heading,
}

impl InlineStyle {
    fn wrap(self) -> (&'static str, &'static str) {
        match self {
            InlineStyle::Normal => ("", ""),
            InlineStyle::Bold => ("**", "**"),
            InlineStyle::Italic => ("*", "*"),
            InlineStyle::BoldItalic => ("***", "***"),
            InlineStyle::BulletedList => ("- ", ""),
            InlineStyle::Heading => ("## ", ""),
        }
    }
}

/// Result of applying a style: the new text and the UTF-16 range to select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledEdit {
    pub text: String,
    pub select_start: u32,
    pub select_end: u32,
}

pub fn byte_to_utf16_idx(s: &str, byte_idx: usize) -> u32 {
    s[..byte_idx.min(s.len())].encode_utf16().count() as u32
}

/// Byte index of a UTF-16 position; positions inside a surrogate pair or
/// past the end snap forward to the next char boundary.
pub fn utf16_to_byte_idx(s: &str, utf16_idx: usize) -> usize {
    let mut units = 0;
    for (byte_idx, c) in s.char_indices() {
        if units >= utf16_idx {
            return byte_idx;
        }
        units += c.len_utf16();
    }
    s.len()
}

/// Wraps the selection `[start, end)` (UTF-16) in `style`. With an empty
/// selection a placeholder word is inserted and selected.
pub fn apply_style(text: &str, start: usize, end: usize, style: InlineStyle) -> StyledEdit {
    let (start, end) = (start.min(end), start.max(end));
    let start = utf16_to_byte_idx(text, start);
    let end = utf16_to_byte_idx(text, end);

    let selected = &text[start..end];
    let inner = if selected.is_empty() { PLACEHOLDER } else { selected };
    let (open, close) = style.wrap();

    let mut out = String::with_capacity(text.len() + open.len() + inner.len() + close.len());
    out.push_str(&text[..start]);
    out.push_str(open);
    out.push_str(inner);
    out.push_str(close);
    out.push_str(&text[end..]);

    let inner_start = start + open.len();
    StyledEdit {
        select_start: byte_to_utf16_idx(&out, inner_start),
        select_end: byte_to_utf16_idx(&out, inner_start + inner.len()),
        text: out,
    }
}
