//! Section/table scanner.
//!
//! Consumes the document line by line using the classifier and accumulates
//! the nested section model. All mutable parse state lives on the scanner
//! itself and is committed through the flush paths below.

use log::debug;

use super::line::{LineClassifier, LineKind};
use super::ParseOptions;
use crate::model::{Document, Section, Table};

/// State machine building a [`Document`] from source text.
pub struct Scanner {
    classifier: LineClassifier,
    document: Document,
    current_section: Option<String>,
    current_subsection: Option<String>,
    content: Vec<String>,
    in_table: bool,
    table_headers: Vec<String>,
    table_rows: Vec<Vec<String>>,
}

impl Scanner {
    /// Create a scanner with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self {
            classifier: LineClassifier::new(options),
            document: Document::new(),
            current_section: None,
            current_subsection: None,
            content: Vec::new(),
            in_table: false,
            table_headers: Vec::new(),
            table_rows: Vec::new(),
        }
    }

    /// Consume the source text and return the parsed document.
    pub fn scan(mut self, text: &str) -> Document {
        for (index, line) in text.lines().enumerate() {
            let kind = self
                .classifier
                .classify(line, index, self.current_section.is_some());
            match kind {
                LineKind::Noise => {}
                LineKind::SectionHeader(name) => self.open_section(name),
                LineKind::SubsectionHeader(name) => self.open_subsection(name),
                LineKind::TableLine { separator, cells } => self.table_line(separator, cells),
                LineKind::Content(text) => self.content_line(text),
            }
        }
        // End of input flushes exactly like a section transition.
        self.flush();
        self.document
    }

    fn open_section(&mut self, name: String) {
        self.flush();
        self.current_subsection = None;
        debug!("opening section: {}", name);
        self.document.insert_section(name.clone(), Section::new());
        self.current_section = Some(name);
    }

    fn open_subsection(&mut self, name: String) {
        if self.current_subsection.is_some() {
            self.flush();
        } else {
            // Section-level buffers preceding the first subsection are
            // discarded: their lines belong to neither target.
            self.reset_buffers();
        }
        self.current_subsection = Some(name);
    }

    fn table_line(&mut self, separator: bool, cells: Vec<String>) {
        if !self.in_table {
            // First pipe line after a non-table line carries the headers.
            self.in_table = true;
            self.table_headers = cells;
        } else if !separator {
            self.table_rows.push(cells);
        }
    }

    fn content_line(&mut self, text: String) {
        // A table never spans a content interruption: commit it to the
        // active target before buffering the new line.
        if self.in_table {
            self.commit_table();
        }
        self.content.push(text);
    }

    /// Commit the open table to the active target and clear table buffers.
    /// Tables with no headers or no rows are dropped, never stored.
    fn commit_table(&mut self) {
        if !self.table_headers.is_empty() && !self.table_rows.is_empty() {
            let table = Table::new(
                std::mem::take(&mut self.table_headers),
                std::mem::take(&mut self.table_rows),
            );
            if let Some(section_name) = &self.current_section {
                if let Some(section) = self.document.sections.get_mut(section_name) {
                    match &self.current_subsection {
                        Some(sub_name) => {
                            debug!(
                                "table with {} rows committed to subsection {}",
                                table.row_count(),
                                sub_name
                            );
                            section
                                .subsections
                                .entry(sub_name.clone())
                                .or_default()
                                .table = Some(table);
                        }
                        None => {
                            debug!(
                                "table with {} rows committed to section {}",
                                table.row_count(),
                                section_name
                            );
                            section.table = Some(table);
                        }
                    }
                }
            }
        }
        self.in_table = false;
        self.table_headers.clear();
        self.table_rows.clear();
    }

    /// Flush the open table and content buffer into the active target.
    ///
    /// Content is appended, so a recurring subsection name accumulates
    /// lines additively while its table is replaced by the latest flush.
    fn flush(&mut self) {
        self.commit_table();

        if self.content.is_empty() {
            return;
        }
        let content = std::mem::take(&mut self.content);
        let Some(section_name) = &self.current_section else {
            return;
        };
        let Some(section) = self.document.sections.get_mut(section_name) else {
            return;
        };
        match &self.current_subsection {
            Some(sub_name) => section
                .subsections
                .entry(sub_name.clone())
                .or_default()
                .content
                .extend(content),
            None => section.content.extend(content),
        }
    }

    fn reset_buffers(&mut self) {
        self.content.clear();
        self.in_table = false;
        self.table_headers.clear();
        self.table_rows.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> Document {
        Scanner::new(ParseOptions::default()).scan(text)
    }

    #[test]
    fn test_section_and_content() {
        let doc = scan("## Papers\n- [A](https://a.example) note\nplain line\n");
        let section = doc.get_section("Papers").unwrap();
        assert_eq!(
            section.content,
            ["- [A](https://a.example) note", "plain line"]
        );
        assert!(section.table.is_none());
        assert!(!section.has_subsections());
    }

    #[test]
    fn test_subsection_opens_and_collects() {
        let doc = scan("## Educational\n- **Courses**:\n- [C](https://c.example)\n");
        let section = doc.get_section("Educational").unwrap();
        let sub = section.subsections.get("Courses").unwrap();
        assert_eq!(sub.content, ["- [C](https://c.example)"]);
        // Subsection content never duplicates into the parent.
        assert!(section.content.is_empty());
    }

    #[test]
    fn test_table_in_section() {
        let doc = scan("## Models\n| Name | Year |\n|---|---|\n| GPT-4 | 2023 |\n");
        let table = doc.get_section("Models").unwrap().table.as_ref().unwrap();
        assert_eq!(table.headers, ["Name", "Year"]);
        assert_eq!(table.rows, [["GPT-4", "2023"]]);
    }

    #[test]
    fn test_table_in_subsection() {
        let doc = scan(
            "## Tools & Code\n- **Libraries**:\n| Name | Repo |\n|---|---|\n| langchain | [gh](https://g.example) |\n",
        );
        let section = doc.get_section("Tools & Code").unwrap();
        let sub = section.subsections.get("Libraries").unwrap();
        let table = sub.table.as_ref().unwrap();
        assert_eq!(table.headers, ["Name", "Repo"]);
        assert!(section.table.is_none());
    }

    #[test]
    fn test_table_committed_on_content_interruption() {
        let doc = scan(
            "## Models\n| Name |\n|---|\n| GPT-4 |\ntrailing note\n| Other |\n|---|\n| Claude |\n",
        );
        let section = doc.get_section("Models").unwrap();
        // The second table is flushed at EOF and wins.
        let table = section.table.as_ref().unwrap();
        assert_eq!(table.headers, ["Other"]);
        assert_eq!(section.content, ["trailing note"]);
    }

    #[test]
    fn test_header_only_table_not_stored() {
        let doc = scan("## Models\n| Name | Year |\n|---|---|\n");
        assert!(doc.get_section("Models").unwrap().table.is_none());
    }

    #[test]
    fn test_repeated_section_name_replaces() {
        let doc = scan("## Papers\nfirst\n## Other\nx\n## Papers\nsecond\n");
        let section = doc.get_section("Papers").unwrap();
        assert_eq!(section.content, ["second"]);
        let names: Vec<_> = doc.sections.keys().cloned().collect();
        assert_eq!(names, ["Papers", "Other"]);
    }

    #[test]
    fn test_repeated_subsection_content_is_additive() {
        let doc = scan(
            "## Educational\n- **Courses**:\nfirst\n- **Tutorials**:\nmid\n- **Courses**:\nsecond\n",
        );
        let section = doc.get_section("Educational").unwrap();
        let courses = section.subsections.get("Courses").unwrap();
        assert_eq!(courses.content, ["first", "second"]);
    }

    #[test]
    fn test_content_before_first_subsection_dropped() {
        let doc = scan("## Educational\nintro line\n- **Courses**:\n- [C](https://c.example)\n");
        let section = doc.get_section("Educational").unwrap();
        assert!(section.content.is_empty());
        assert!(section.subsections.contains_key("Courses"));
    }

    #[test]
    fn test_lines_before_any_section_dropped() {
        let doc = scan("stray text\n# Title\n## Papers\nkept\n");
        assert_eq!(doc.section_count(), 1);
        assert_eq!(doc.get_section("Papers").unwrap().content, ["kept"]);
    }

    #[test]
    fn test_emoji_line_does_not_interrupt_table() {
        let doc = scan("## Models\n| Name |\n|---|\n| GPT-4 |\n🔥\n| Claude |\n");
        let table = doc.get_section("Models").unwrap().table.as_ref().unwrap();
        assert_eq!(table.rows, [vec!["GPT-4"], vec!["Claude"]]);
    }
}
