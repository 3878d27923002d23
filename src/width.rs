use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal columns. Emoji and CJK count as two.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Appends `fill` to `text` once per missing column.
///
/// The fill string is repeated verbatim, so a multi-column or empty `fill`
/// does not land exactly on `target`.
pub fn pad(text: &str, fill: &str, target: usize) -> String {
    let padding = target.saturating_sub(display_width(text));
    if padding == 0 {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + fill.len() * padding);
    out.push_str(text);
    out.push_str(&fill.repeat(padding));
    out
}
