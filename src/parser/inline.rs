//! Inline markdown formatting.
//!
//! Two related transforms over raw line fragments: table cells become
//! inline HTML, and content lines become [`Resource`] records (or plain
//! text when no link pattern matches).

use regex::Regex;

use super::line::is_emoji_only;
use crate::model::Resource;

/// A formatted content line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem {
    /// A linked resource with optional metadata.
    Resource(Resource),
    /// Plain text with no link pattern.
    Text(String),
}

/// Converts cells and content lines into display-ready fragments.
pub struct InlineFormatter {
    bold_re: Regex,
    double_link_re: Regex,
    link_re: Regex,
    resource_re: Regex,
    year_re: Regex,
    source_re: Regex,
    residue_re: Regex,
    by_re: Regex,
}

impl InlineFormatter {
    /// Create a formatter with its patterns compiled.
    pub fn new() -> Self {
        Self {
            bold_re: Regex::new(r"\*\*(.+?)\*\*").unwrap(),
            double_link_re: Regex::new(r"\[\[(.+?)\]\]\((.+?)\)").unwrap(),
            link_re: Regex::new(r"\[(.+?)\]\((.+?)\)").unwrap(),
            resource_re: Regex::new(r"^\[(.+?)\]\((.+?)\)(.*)$").unwrap(),
            year_re: Regex::new(r"\[(\d{4})\]").unwrap(),
            source_re: Regex::new(r"\(([^)]+)\)\s*$").unwrap(),
            residue_re: Regex::new(r"^[,\s-]+").unwrap(),
            by_re: Regex::new(r"^[,\s]+by\s+").unwrap(),
        }
    }

    /// Format a table cell as inline HTML.
    ///
    /// The double-bracket link pattern must run before the standard one,
    /// or the standard pattern matches inside the double brackets.
    pub fn format_cell(&self, cell: &str) -> String {
        let escaped = escape_html(cell);
        let bolded = self.bold_re.replace_all(&escaped, "<strong>${1}</strong>");
        let double_linked = self.double_link_re.replace_all(
            &bolded,
            "<a href=\"${2}\" target=\"_blank\" rel=\"noopener noreferrer\">${1}</a>",
        );
        self.link_re
            .replace_all(
                &double_linked,
                "<a href=\"${2}\" target=\"_blank\" rel=\"noopener noreferrer\">${1}</a>",
            )
            .into_owned()
    }

    /// Turn a raw content line into a renderable item.
    ///
    /// Returns `None` for empty and decorative-glyph lines, which are
    /// skipped entirely rather than rendered as empty content.
    pub fn content_item(&self, line: &str) -> Option<ContentItem> {
        let trimmed = line.trim();
        if trimmed.is_empty() || is_emoji_only(trimmed) {
            return None;
        }

        if let Some(rest) = trimmed.strip_prefix('-') {
            let content = rest.trim_start();
            if content.is_empty() {
                return None;
            }
            return match self.extract_resource(content) {
                Some(resource) => Some(ContentItem::Resource(resource)),
                None => Some(ContentItem::Text(content.to_string())),
            };
        }

        // Dashless lines still carry links in the course/tutorial sections;
        // those get no year/source scan, only the `by` attribution cleanup.
        match self.resource_re.captures(trimmed) {
            Some(captures) => {
                let description = self
                    .by_re
                    .replace(captures[3].trim(), "by ")
                    .trim()
                    .to_string();
                let mut resource = Resource::new(&captures[1], &captures[2]);
                resource.description = description;
                Some(ContentItem::Resource(resource))
            }
            None => Some(ContentItem::Text(trimmed.to_string())),
        }
    }

    /// Extract a resource from a dash-list line body (dash already removed).
    fn extract_resource(&self, content: &str) -> Option<Resource> {
        let captures = self.resource_re.captures(content)?;
        let mut resource = Resource::new(&captures[1], &captures[2]);
        let trailing = captures[3].trim().to_string();

        resource.year = self
            .year_re
            .captures(&trailing)
            .map(|year| year[1].to_string());
        resource.source = self
            .source_re
            .captures(&trailing)
            .map(|source| source[1].to_string());

        let description = self.year_re.replace_all(&trailing, "");
        let description = self.source_re.replace(&description, "");
        let description = self.residue_re.replace(&description, "");
        resource.description = description.trim().to_string();

        Some(resource)
    }
}

impl Default for InlineFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape text for interpolation into HTML markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatter() -> InlineFormatter {
        InlineFormatter::new()
    }

    #[test]
    fn test_format_cell_bold() {
        let html = formatter().format_cell("**GPT-4**");
        assert_eq!(html, "<strong>GPT-4</strong>");
    }

    #[test]
    fn test_format_cell_links() {
        let html = formatter().format_cell("[repo](https://g.example)");
        assert_eq!(
            html,
            "<a href=\"https://g.example\" target=\"_blank\" rel=\"noopener noreferrer\">repo</a>"
        );
    }

    #[test]
    fn test_format_cell_double_bracket_first() {
        let html = formatter().format_cell("[[paper]](https://p.example)");
        assert!(html.contains(">paper</a>"));
        assert!(!html.contains("[["));
    }

    #[test]
    fn test_format_cell_escapes_html() {
        let html = formatter().format_cell("a <b> & c");
        assert_eq!(html, "a &lt;b&gt; &amp; c");
    }

    #[test]
    fn test_resource_with_year_and_source() {
        let item = formatter()
            .content_item("- [Chain-of-Thought](https://example.com/cot) [2022] (NeurIPS)")
            .unwrap();
        let ContentItem::Resource(resource) = item else {
            panic!("expected resource");
        };
        assert_eq!(resource.title, "Chain-of-Thought");
        assert_eq!(resource.url, "https://example.com/cot");
        assert_eq!(resource.year.as_deref(), Some("2022"));
        assert_eq!(resource.source.as_deref(), Some("NeurIPS"));
        assert_eq!(resource.description, "");
    }

    #[test]
    fn test_resource_description_residue_stripped() {
        let item = formatter()
            .content_item("- [Guide](https://g.example) - a practical guide [2023]")
            .unwrap();
        let ContentItem::Resource(resource) = item else {
            panic!("expected resource");
        };
        assert_eq!(resource.description, "a practical guide");
        assert_eq!(resource.year.as_deref(), Some("2023"));
        assert!(resource.source.is_none());
    }

    #[test]
    fn test_plain_dash_line() {
        let item = formatter().content_item("- just a note").unwrap();
        assert_eq!(item, ContentItem::Text("just a note".to_string()));
    }

    #[test]
    fn test_dashless_link_with_by_cleanup() {
        let item = formatter()
            .content_item("[Prompt Course](https://c.example), by DeepLearning.AI")
            .unwrap();
        let ContentItem::Resource(resource) = item else {
            panic!("expected resource");
        };
        assert_eq!(resource.title, "Prompt Course");
        assert_eq!(resource.description, "by DeepLearning.AI");
        assert!(resource.year.is_none());
    }

    #[test]
    fn test_dashless_plain_text() {
        let item = formatter().content_item("Just some words").unwrap();
        assert_eq!(item, ContentItem::Text("Just some words".to_string()));
    }

    #[test]
    fn test_emoji_only_line_skipped() {
        assert!(formatter().content_item("🔥").is_none());
        assert!(formatter().content_item("   ").is_none());
    }

    #[test]
    fn test_extracted_fields_nonempty() {
        // The link pattern requires at least one character for both
        // title and url, so matched resources never have empty fields.
        let item = formatter().content_item("- [x](y)").unwrap();
        let ContentItem::Resource(resource) = item else {
            panic!("expected resource");
        };
        assert!(!resource.title.is_empty());
        assert!(!resource.url.is_empty());
    }
}
