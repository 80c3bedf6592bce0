//! Markdown scanning module.

mod inline;
mod line;
mod options;
mod scanner;

pub use inline::{escape_html, ContentItem, InlineFormatter};
pub use line::{is_emoji_only, LineClassifier, LineKind};
pub use options::ParseOptions;
pub use scanner::Scanner;

use crate::model::Document;

/// Parse source markdown into a document with default options.
///
/// Scanning is best-effort and never fails: malformed constructs degrade
/// to plain content or are dropped.
pub fn parse_str(text: &str) -> Document {
    parse_str_with_options(text, ParseOptions::default())
}

/// Parse source markdown with custom options.
pub fn parse_str_with_options(text: &str, options: ParseOptions) -> Document {
    Scanner::new(options).scan(text)
}
