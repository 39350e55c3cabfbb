//! Markdown-to-plain-text reduction.
//!
//! Used for `<meta name="description">` values, which must not carry
//! markup. Inline markup disappears, text survives, and blocks are
//! separated by blank lines.

use pulldown_cmark::{Event, Options, Parser, TagEnd};

/// Strip all markdown syntax from `source`, keeping only its text.
///
/// Image alt text and inline code are kept; raw HTML is dropped.
#[must_use]
pub fn strip_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let mut out = String::with_capacity(source.len());

    for event in Parser::new_ext(source, options) {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::Rule => line_break(&mut out, 2),
            Event::End(tag) => match tag {
                TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::CodeBlock => {
                    line_break(&mut out, 2);
                }
                TagEnd::Item | TagEnd::TableHead | TagEnd::TableRow => line_break(&mut out, 1),
                TagEnd::TableCell => out.push(' '),
                _ => {}
            },
            _ => {}
        }
    }

    out.trim().to_string()
}

/// End the current block with exactly `newlines` line breaks.
fn line_break(out: &mut String, newlines: usize) {
    let kept = out.trim_end().len();
    out.truncate(kept);
    if !out.is_empty() {
        out.push_str(&"\n".repeat(newlines));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold() {
        assert_eq!(strip_markdown("**bold** text"), "bold text");
    }

    #[test]
    fn test_emphasis_and_strikethrough() {
        assert_eq!(strip_markdown("*a* _b_ ~~c~~"), "a b c");
    }

    #[test]
    fn test_link_keeps_label() {
        assert_eq!(
            strip_markdown("See [my blog](https://example.com) now"),
            "See my blog now"
        );
    }

    #[test]
    fn test_heading_and_paragraph() {
        assert_eq!(strip_markdown("# Title\n\nBody text"), "Title\n\nBody text");
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(strip_markdown("run `cargo build`"), "run cargo build");
    }

    #[test]
    fn test_image_alt_text() {
        assert_eq!(strip_markdown("![a cat](cat.png)"), "a cat");
    }

    #[test]
    fn test_list_items_one_per_line() {
        assert_eq!(strip_markdown("- one\n- two\n- three"), "one\ntwo\nthree");
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(strip_markdown("> quoted **words**"), "quoted words");
    }

    #[test]
    fn test_raw_html_dropped() {
        assert_eq!(strip_markdown("a <b>b</b> c"), "a b c");
    }

    #[test]
    fn test_soft_break_becomes_newline() {
        assert_eq!(strip_markdown("line one\nline two"), "line one\nline two");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(strip_markdown("Just text."), "Just text.");
    }

    #[test]
    fn test_empty() {
        assert_eq!(strip_markdown(""), "");
        assert_eq!(strip_markdown("   \n\n"), "");
    }

    #[test]
    fn test_no_markup_characters_survive() {
        let out = strip_markdown("**Product** _manager_ who [ships](https://x.y)");
        assert!(!out.contains('*'));
        assert!(!out.contains('_'));
        assert!(!out.contains('['));
        assert!(!out.contains('('));
    }
}
