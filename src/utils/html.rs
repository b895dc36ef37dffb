use std::borrow::Cow;

/// Escapes text for placement inside an HTML element body.
pub fn escape_text(input: &str) -> Cow<'_, str> {
    escape(input, false)
}

/// Escapes text for placement inside a double-quoted HTML attribute.
pub fn escape_attr(input: &str) -> Cow<'_, str> {
    escape(input, true)
}

fn escape(input: &str, quotes: bool) -> Cow<'_, str> {
    let needs_escape = |c: char| matches!(c, '&' | '<' | '>') || (quotes && c == '"');

    if !input.chars().any(needs_escape) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quotes => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}
