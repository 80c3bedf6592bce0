//! Table types.

use serde::{Deserialize, Serialize};

/// A pipe table attached to a section or subsection.
///
/// Rows are not normalized against the header: a row may carry more or
/// fewer cells than there are headers, and renderers must tolerate that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Header cells.
    pub headers: Vec<String>,

    /// Data rows. Each row is an ordered list of cell strings.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Get the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on the header row).
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Check if the table has no headers or no rows.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() || self.rows.is_empty()
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        let mut lines = vec![self.headers.join("\t")];
        lines.extend(self.rows.iter().map(|row| row.join("\t")));
        lines.join("\n")
    }
}
