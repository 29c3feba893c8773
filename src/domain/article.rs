//! Markdown article model

use super::metadata::{extract_tags, extract_title};

/// A markdown article with the metadata derived from its content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownDocument {
    /// Raw file content, published verbatim as the article body
    pub content: String,
    pub title: String,
    pub tags: Vec<String>,
}

impl MarkdownDocument {
    /// Derive title and tags from raw markdown content
    pub fn parse(content: String) -> Self {
        let title = extract_title(&content);
        let tags = extract_tags(&content);
        Self {
            content,
            title,
            tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_raw_content() {
        let raw = "---\ntags: [rust]\n---\n# Hello\n\nBody text\n".to_string();
        let doc = MarkdownDocument::parse(raw.clone());
        assert_eq!(doc.content, raw);
        assert_eq!(doc.title, "Hello");
        assert_eq!(doc.tags, vec!["rust"]);
    }

    #[test]
    fn test_parse_plain_text() {
        let doc = MarkdownDocument::parse("no heading here".to_string());
        assert_eq!(doc.title, "Untitled");
        assert!(doc.tags.is_empty());
    }
}
