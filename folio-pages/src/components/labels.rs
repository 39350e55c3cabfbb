//! Label groups for roles and keywords.

use crate::escape::escape_html_text;

/// Render one label per item inside a group, tagged with `class`.
///
/// An empty list renders nothing.
#[must_use]
pub fn render_labels(items: &[String], class: &str) -> String {
    if items.is_empty() {
        return String::new();
    }

    let labels: Vec<String> = items
        .iter()
        .map(|item| {
            format!(
                "<span class=\"ui label {class}\">{}</span>",
                escape_html_text(item)
            )
        })
        .collect();

    format!("<div class=\"label-group\">{}</div>", labels.join(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!(render_labels(&[], "role-label"), "");
    }

    #[test]
    fn test_one_label_per_item() {
        let html = render_labels(&["Lead".to_string(), "PM".to_string()], "role-label");
        assert_eq!(html.matches("ui label role-label").count(), 2);
        assert!(html.contains(">Lead<"));
        assert!(html.contains(">PM<"));
    }
}
