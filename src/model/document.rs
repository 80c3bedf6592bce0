//! Document-level types.

use super::Table;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The parsed resource list.
///
/// Sections are keyed by their heading text and iterate in the order of
/// first appearance in the source document. Re-inserting an existing name
/// replaces the section but keeps its original position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Sections keyed by heading text, in source order.
    pub sections: IndexMap<String, Section>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            sections: IndexMap::new(),
        }
    }

    /// Get the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Get a section by name.
    pub fn get_section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Insert a section. A repeated name replaces the previous entry
    /// while keeping its position (last write wins).
    pub fn insert_section(&mut self, name: impl Into<String>, section: Section) {
        self.sections.insert(name.into(), section);
    }

    /// Check whether the document has any sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Count content lines across all sections and subsections.
    pub fn content_line_count(&self) -> usize {
        self.sections
            .values()
            .map(|s| {
                s.content.len()
                    + s.subsections
                        .values()
                        .map(|sub| sub.content.len())
                        .sum::<usize>()
            })
            .sum()
    }

    /// Count tables across all sections and subsections.
    pub fn table_count(&self) -> usize {
        self.sections
            .values()
            .map(|s| {
                usize::from(s.table.is_some())
                    + s.subsections
                        .values()
                        .filter(|sub| sub.table.is_some())
                        .count()
            })
            .sum()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// A top-level `##` section of the resource list.
///
/// A section holds either meaningful top-level content (and possibly a
/// table) or subsections with their own content; subsection content is
/// never duplicated into the parent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Raw content lines belonging directly to the section.
    pub content: Vec<String>,

    /// Subsections keyed by label, in source order.
    pub subsections: IndexMap<String, Subsection>,

    /// Table attached at section level, if any.
    pub table: Option<Table>,
}

impl Section {
    /// Create a new empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the section has any subsections.
    pub fn has_subsections(&self) -> bool {
        !self.subsections.is_empty()
    }

    /// Check whether the section carries no content, table, or subsections.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.subsections.is_empty() && self.table.is_none()
    }
}

/// A bold-labeled sub-grouping (`- **Label**:`) within a section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subsection {
    /// Raw content lines belonging to the subsection.
    pub content: Vec<String>,

    /// Table attached at subsection level, if any.
    pub table: Option<Table>,
}

impl Subsection {
    /// Create a new empty subsection.
    pub fn new() -> Self {
        Self::default()
    }
}
