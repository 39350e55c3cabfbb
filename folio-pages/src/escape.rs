//! HTML escaping utilities.

/// Escape for embedding in HTML attribute values.
///
/// Escapes: `& < > " '`
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Escape for embedding in HTML element content (e.g., `<title>`).
///
/// Only escapes `& < >`; quotes are safe in element text.
#[must_use]
pub fn escape_html_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_all_chars() {
        assert_eq!(
            escape_html("a<b>c&d\"e'f"),
            "a&lt;b&gt;c&amp;d&quot;e&#x27;f"
        );
    }

    #[test]
    fn escape_html_text_no_quotes() {
        assert_eq!(escape_html_text("a<b>c&d\"e'f"), "a&lt;b&gt;c&amp;d\"e'f");
    }

    #[test]
    fn escape_ampersand_first() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn escape_plain_unchanged() {
        assert_eq!(escape_html("Ada Lovelace"), "Ada Lovelace");
    }
}
