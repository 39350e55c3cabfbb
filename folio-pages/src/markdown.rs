//! Markdown to HTML rendering.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};

use crate::escape::escape_html;

/// Render markdown to HTML.
///
/// Every link opens in a new tab. Raw HTML in the source is shown as
/// text rather than passed through.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options).map(rewrite_event);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

fn rewrite_event(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Start(Tag::Link {
            dest_url, title, ..
        }) => Event::InlineHtml(open_link(&dest_url, &title).into()),
        Event::End(TagEnd::Link) => Event::InlineHtml(CowStr::Borrowed("</a>")),
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    }
}

fn open_link(href: &str, title: &str) -> String {
    let title_attr = if title.is_empty() {
        String::new()
    } else {
        format!(" title=\"{}\"", escape_html(title))
    };
    format!(
        "<a href=\"{}\"{title_attr} target=\"_blank\" rel=\"noopener\">",
        escape_html(href)
    )
}
