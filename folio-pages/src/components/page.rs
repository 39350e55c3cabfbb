//! Page chrome shared by every page: document skeleton, header
//! navigation and footer.

use folio_core::paths::SiteContext;
use folio_core::schema::Portfolio;

use crate::components::meta::{PageMeta, render_meta};
use crate::escape::{escape_html, escape_html_text};

const STYLESHEET: &str = "https://cdn.jsdelivr.net/npm/semantic-ui@2.4.2/dist/semantic.min.css";

/// Wrap `body` in a complete HTML document with the site chrome.
#[must_use]
pub fn render_page(
    portfolio: &Portfolio,
    ctx: &SiteContext,
    meta: &PageMeta,
    body: &str,
) -> String {
    let name = escape_html_text(&portfolio.name);

    let mut lines = vec![
        "<!DOCTYPE html>".to_string(),
        "<html lang=\"en\">".to_string(),
        "<head>".to_string(),
        "<meta charset=\"utf-8\">".to_string(),
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">".to_string(),
        render_meta(meta),
        format!("<link rel=\"stylesheet\" href=\"{}\">", escape_html(STYLESHEET)),
        "<link rel=\"stylesheet\" href=\"/styles.css\">".to_string(),
        "</head>".to_string(),
        "<body>".to_string(),
    ];

    lines.push("<header class=\"ui secondary pointing menu site-header\">".to_string());
    lines.push(format!("<a class=\"header item\" href=\"/\">{name}</a>"));
    lines.push("<div class=\"right menu\">".to_string());
    lines.push("<a class=\"item\" href=\"/about\">About</a>".to_string());
    lines.push("</div>".to_string());
    lines.push("</header>".to_string());

    lines.push(body.to_string());

    lines.push("<footer class=\"site-footer\">".to_string());
    lines.push(format!("<p>&copy; {} {name}</p>", ctx.year));
    lines.push("</footer>".to_string());
    lines.push("</body>".to_string());
    lines.push("</html>".to_string());
    lines.push(String::new());

    lines.join("\n")
}
