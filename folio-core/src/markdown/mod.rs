//! Markdown helpers for page loaders.
//!
//! - Front-matter splitting (`---` delimited YAML block plus body)
//! - Markdown-to-plain-text reduction for SEO descriptions

pub mod frontmatter;
pub mod plain;

pub use frontmatter::{MarkdownDocument, PageFrontMatter, parse_front_matter};
pub use plain::strip_markdown;
