//! Front-matter parsing for markdown files.
//!
//! A file opens with a `---` line, carries a YAML mapping, and closes the
//! block with another `---` line. Everything after the closing line is the
//! markdown body. Files without an opening delimiter are all body.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

use crate::error::FrontMatterError;

const DELIMITER: &str = "---";

/// A markdown file split into front-matter data and body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkdownDocument {
    /// Key/value data from the front-matter block (empty when absent)
    pub data: Mapping,
    /// Markdown body following the front-matter block
    pub content: String,
}

impl MarkdownDocument {
    /// String value for `key`, if present and a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }

    /// Deserialize the front-matter data into `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the data does not match `T`'s shape.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T, serde_yaml::Error> {
        serde_yaml::from_value(Value::Mapping(self.data.clone()))
    }

    /// Returns `true` when the body has no visible text.
    #[must_use]
    pub fn is_body_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// Front-matter keys that override page metadata.
///
/// Other keys are allowed and ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageFrontMatter {
    /// Replaces the page's default title prefix
    #[serde(default)]
    pub title: Option<String>,

    /// Replaces the summary-derived description
    #[serde(default)]
    pub description: Option<String>,
}

/// Split a markdown source into front-matter data and body.
///
/// # Errors
///
/// Returns `FrontMatterError` if the front-matter block is not valid YAML
/// or is not a mapping.
pub fn parse_front_matter(source: &str) -> Result<MarkdownDocument, FrontMatterError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    let Some((block, body)) = split_front_matter(source) else {
        return Ok(MarkdownDocument {
            data: Mapping::new(),
            content: source.to_string(),
        });
    };

    Ok(MarkdownDocument {
        data: parse_block(block)?,
        content: body.to_string(),
    })
}

/// Locate the front-matter block. Returns `(block, body)` byte slices.
fn split_front_matter(source: &str) -> Option<(&str, &str)> {
    let mut lines = source.split_inclusive('\n');
    let first = lines.next()?;
    if !is_delimiter(first) {
        return None;
    }

    let block_start = first.len();
    let mut offset = block_start;
    for line in lines {
        if is_delimiter(line) {
            return Some((&source[block_start..offset], &source[offset + line.len()..]));
        }
        offset += line.len();
    }

    // Unterminated block: treat the whole file as body
    None
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

fn parse_block(block: &str) -> Result<Mapping, FrontMatterError> {
    if block.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(block)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        other => Err(FrontMatterError::NotAMapping {
            found: describe(&other),
        }),
    }
}

const fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_data_and_body() {
        let doc = parse_front_matter("---\na: 1\n---\ntext").unwrap();
        assert_eq!(doc.data.len(), 1);
        assert_eq!(doc.data.get("a").and_then(Value::as_i64), Some(1));
        assert_eq!(doc.content, "text");
    }

    #[test]
    fn test_no_front_matter() {
        let src = "# Heading\n\nBody";
        let doc = parse_front_matter(src).unwrap();
        assert!(doc.data.is_empty());
        assert_eq!(doc.content, src);
    }

    #[test]
    fn test_empty_block() {
        let doc = parse_front_matter("---\n---\nbody\n").unwrap();
        assert!(doc.data.is_empty());
        assert_eq!(doc.content, "body\n");
    }

    #[test]
    fn test_body_keeps_blank_lines_after_delimiter() {
        let doc = parse_front_matter("---\ntitle: T\n---\n\nPara\n").unwrap();
        assert_eq!(doc.content, "\nPara\n");
    }

    #[test]
    fn test_crlf_line_endings() {
        let doc = parse_front_matter("---\r\ntitle: Hello\r\n---\r\nbody").unwrap();
        assert_eq!(doc.get_str("title"), Some("Hello"));
        assert_eq!(doc.content, "body");
    }

    #[test]
    fn test_bom_is_ignored() {
        let doc = parse_front_matter("\u{feff}---\ntitle: Hi\n---\nx").unwrap();
        assert_eq!(doc.get_str("title"), Some("Hi"));
    }

    #[test]
    fn test_unterminated_block_is_body() {
        let src = "---\ntitle: nope\nstill body";
        let doc = parse_front_matter(src).unwrap();
        assert!(doc.data.is_empty());
        assert_eq!(doc.content, src);
    }

    #[test]
    fn test_delimiter_must_be_first_line() {
        let src = "intro\n---\na: 1\n---\n";
        let doc = parse_front_matter(src).unwrap();
        assert!(doc.data.is_empty());
        assert_eq!(doc.content, src);
    }

    #[test]
    fn test_horizontal_rule_in_body_is_preserved() {
        let doc = parse_front_matter("---\na: 1\n---\nabove\n---\nbelow").unwrap();
        assert_eq!(doc.content, "above\n---\nbelow");
    }

    #[test]
    fn test_sequence_block_is_error() {
        let result = parse_front_matter("---\n- a\n- b\n---\nbody");
        assert!(matches!(
            result,
            Err(FrontMatterError::NotAMapping { found: "a sequence" })
        ));
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let result = parse_front_matter("---\na: [unclosed\n---\nbody");
        assert!(matches!(result, Err(FrontMatterError::Yaml(_))));
    }

    #[test]
    fn test_data_as_typed() {
        #[derive(Deserialize)]
        struct Meta {
            title: String,
            #[serde(default)]
            draft: bool,
        }

        let doc = parse_front_matter("---\ntitle: About\ndraft: true\n---\n").unwrap();
        let meta: Meta = doc.data_as().unwrap();
        assert_eq!(meta.title, "About");
        assert!(meta.draft);
    }

    #[test]
    fn test_page_front_matter() {
        let doc =
            parse_front_matter("---\ntitle: About Ada\nlayout: wide\n---\n").unwrap();
        let meta: PageFrontMatter = doc.data_as().unwrap();
        assert_eq!(meta.title.as_deref(), Some("About Ada"));
        assert_eq!(meta.description, None);
    }

    #[test]
    fn test_page_front_matter_wrong_type() {
        let doc = parse_front_matter("---\ndescription: [a, b]\n---\n").unwrap();
        assert!(doc.data_as::<PageFrontMatter>().is_err());
        assert_eq!(doc.get_str("description"), None);
    }

    #[test]
    fn test_get_str_non_string() {
        let doc = parse_front_matter("---\ncount: 3\n---\n").unwrap();
        assert_eq!(doc.get_str("count"), None);
        assert_eq!(doc.get_str("missing"), None);
    }

    #[test]
    fn test_is_body_empty() {
        let doc = parse_front_matter("---\na: 1\n---\n  \n").unwrap();
        assert!(doc.is_body_empty());
    }
}
