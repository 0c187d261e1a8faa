//! # Escaping
//!
//! Context-sensitive escaping for generated markup.
//!
//! The text and attribute escapers are asymmetric: text nodes get
//! all five HTML-significant characters replaced, attribute values only the two
//! quote characters. Attribute values are therefore NOT protected against `&`,
//! `<` or `>`; they are always emitted inside double quotes.

/// Escape a string for use inside a text node.
///
/// Replaces `&`, `<`, `>`, `"` and `'`. The ampersand goes first so the
/// entities produced by the later replacements are not escaped twice.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape a string for use inside a double-quoted attribute value.
///
/// Only `"` and `'` are replaced.
pub fn escape_attr(value: &str) -> String {
    value.replace('"', "&quot;").replace('\'', "&#39;")
}

/// Escape a string for use as JSX text.
///
/// Same as [`escape_text`], plus curly braces so the text is never read as
/// an embedded expression.
pub fn escape_jsx_text(text: &str) -> String {
    escape_text(text).replace('{', "&#123;").replace('}', "&#125;")
}

/// Make raw text safe to embed as JSX children without otherwise escaping it.
///
/// Only the characters that would change how JSX parses the text are
/// replaced: `<`, `>`, `{` and `}`.
pub fn guard_jsx_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            other => out.push(other),
        }
    }
    out
}
