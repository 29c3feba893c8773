//! Title and tag extraction from markdown

use regex::Regex;
use std::sync::OnceLock;

/// Title used when a document has no level-1 heading
pub const UNTITLED: &str = "Untitled";

/// Leading `---` block, anchored at the start of the document
fn front_matter_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^---\s*\n([\s\S]*?)\n---\s*\n").unwrap())
}

/// Single-line bracketed list: `tags: [a, b, c]`
fn tags_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"tags:\s*\[([^\]]+)\]").unwrap())
}

/// Extract the title from the first `# ` heading line.
///
/// Lines are trimmed before matching, so an indented heading still counts.
/// Returns [`UNTITLED`] when no heading is present.
pub fn extract_title(content: &str) -> String {
    content
        .split('\n')
        .map(trim_line)
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| trim_line(title).to_string())
        .unwrap_or_else(|| UNTITLED.to_string())
}

/// Trim whitespace and byte-order marks
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Extract tags from the `tags: [...]` entry of a leading front-matter block.
///
/// Tokens are trimmed and stripped of single and double quotes. Returns an
/// empty list when there is no front matter or no tags entry.
pub fn extract_tags(content: &str) -> Vec<String> {
    let Some(front_matter) = front_matter_regex()
        .captures(content)
        .and_then(|caps| caps.get(1))
    else {
        return Vec::new();
    };

    match tags_regex().captures(front_matter.as_str()) {
        Some(caps) => caps[1]
            .split(',')
            .map(|tag| tag.trim().replace(['\'', '"'], ""))
            .collect(),
        None => Vec::new(),
    }
}
