//! Line classification.
//!
//! Decides, for one raw line of the source document, which construct it
//! begins or continues. The scanner owns all cross-line state; the
//! classifier only needs the line index and whether a section is open.

use regex::Regex;

use super::ParseOptions;

/// Unicode ranges covering the decorative glyphs used in the source list.
/// Explicit code-point bounds keep the check portable.
const EMOJI_RANGES: [(u32, u32); 3] = [
    (0x1F300, 0x1F9FF), // symbols & pictographs
    (0x2600, 0x26FF),   // miscellaneous symbols
    (0x2700, 0x27BF),   // dingbats
];

/// Decorative characters stripped from section heading text. Includes the
/// variation selector and zero-width joiner that composed emoji carry.
const HEADING_DECORATIONS: &[char] = &[
    '📄', '🛠', '🔌', '📊', '🤖', '🔍', '👩', '🏫', '📚', '🎥', '🤝', '💬', '🔧', '💻', '💾',
    '🧠', '\u{FE0F}', '\u{200D}',
];

/// What a single line contributes to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Front matter, decoration, or anything outside an open section.
    Noise,
    /// `## ` heading opening a content section; carries the cleaned name.
    SectionHeader(String),
    /// `- **Label**:` heading opening a subsection; carries the label.
    SubsectionHeader(String),
    /// A `|`-prefixed line; the scanner decides header vs row.
    TableLine {
        /// True for `|---|---|` style separator lines.
        separator: bool,
        /// Trimmed cells with empty pieces dropped.
        cells: Vec<String>,
    },
    /// Plain content inside a section, already trimmed.
    Content(String),
}

/// Classifies raw lines according to the source list's conventions.
pub struct LineClassifier {
    options: ParseOptions,
    subsection_re: Regex,
}

impl LineClassifier {
    /// Create a classifier for the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            subsection_re: Regex::new(r"^-\s*\*\*(.+?)\*\*:?\s*$").unwrap(),
        }
    }

    /// Classify one line. `index` is the zero-based line number in the
    /// document; `in_section` reports whether the scanner has an open section.
    pub fn classify(&self, line: &str, index: usize, in_section: bool) -> LineKind {
        let trimmed = line.trim();

        // Badge/header area at the top of the document.
        if index < self.options.front_matter_window
            && (trimmed.is_empty() || trimmed.starts_with('<') || trimmed.starts_with("```"))
        {
            return LineKind::Noise;
        }

        // Decorative glyph lines appear throughout the document.
        if is_emoji_only(trimmed) {
            return LineKind::Noise;
        }

        if let Some(text) = trimmed.strip_prefix("## ") {
            if self
                .options
                .excluded_headings
                .iter()
                .any(|fragment| text.contains(fragment.as_str()))
            {
                return LineKind::Noise;
            }
            return LineKind::SectionHeader(clean_heading(text));
        }

        if in_section {
            if let Some(captures) = self.subsection_re.captures(trimmed) {
                return LineKind::SubsectionHeader(captures[1].to_string());
            }

            if trimmed.starts_with('|') {
                return LineKind::TableLine {
                    separator: trimmed.contains("---"),
                    cells: split_cells(trimmed),
                };
            }

            if !trimmed.is_empty() && !trimmed.starts_with('#') {
                return LineKind::Content(trimmed.to_string());
            }
        }

        LineKind::Noise
    }
}

/// True for short lines made up solely of decorative glyphs.
pub fn is_emoji_only(trimmed: &str) -> bool {
    !trimmed.is_empty()
        && trimmed.chars().count() <= 4
        && trimmed.chars().all(|c| {
            let code = c as u32;
            EMOJI_RANGES
                .iter()
                .any(|&(start, end)| code >= start && code <= end)
        })
}

/// Strip decorative glyphs and surrounding whitespace from heading text.
fn clean_heading(text: &str) -> String {
    text.chars()
        .filter(|c| !HEADING_DECORATIONS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Split a pipe line into trimmed cells, dropping empty pieces.
fn split_cells(trimmed: &str) -> Vec<String> {
    trimmed
        .split('|')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
