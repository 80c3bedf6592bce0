//! Parsing options and configuration.

/// Options for scanning the source markdown.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Number of leading lines treated as front matter: empty lines,
    /// tag-like blocks, and fence markers inside this window are dropped.
    pub front_matter_window: usize,

    /// `##` headings whose text contains one of these fragments are
    /// navigational, not content sections, and are ignored.
    pub excluded_headings: Vec<String>,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the front matter window size.
    pub fn with_front_matter_window(mut self, lines: usize) -> Self {
        self.front_matter_window = lines;
        self
    }

    /// Add a heading fragment to exclude.
    pub fn with_excluded_heading(mut self, fragment: impl Into<String>) -> Self {
        self.excluded_headings.push(fragment.into());
        self
    }

    /// Replace the excluded heading fragments.
    pub fn with_excluded_headings(mut self, fragments: Vec<String>) -> Self {
        self.excluded_headings = fragments;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            front_matter_window: 50,
            excluded_headings: vec![
                "Table of Contents".to_string(),
                "How to Contribute".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.front_matter_window, 50);
        assert_eq!(options.excluded_headings.len(), 2);
    }

    #[test]
    fn test_options_builder() {
        let options = ParseOptions::new()
            .with_front_matter_window(10)
            .with_excluded_heading("Sponsors");

        assert_eq!(options.front_matter_window, 10);
        assert!(options
            .excluded_headings
            .iter()
            .any(|h| h == "Sponsors"));
    }
}
