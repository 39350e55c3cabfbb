//! Endorsement quote with attribution.

use folio_core::schema::Endorsement;

use crate::escape::escape_html_text;

/// Render one endorsement as a quote followed by the endorser's name.
#[must_use]
pub fn render_endorsement(endorsement: &Endorsement) -> String {
    format!(
        "<div class=\"endorsement-item\">\n<blockquote class=\"endorsement-text\">{}</blockquote>\n<p class=\"endorsement-name\">{}</p>\n</div>",
        escape_html_text(&endorsement.text),
        escape_html_text(&endorsement.name)
    )
}
