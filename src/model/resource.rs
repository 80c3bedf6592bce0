//! Resource card record.

/// A single linked resource extracted from a content line.
///
/// Resources are ephemeral: they are derived from raw content lines during
/// rendering and are not persisted with the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// Link text.
    pub title: String,

    /// Link target.
    pub url: String,

    /// Trailing description with metadata stripped. May be empty.
    pub description: String,

    /// 4-digit year from a bracketed annotation, if present.
    pub year: Option<String>,

    /// Trailing parenthesized source note, if present.
    pub source: Option<String>,
}

impl Resource {
    /// Create a resource with title and URL only.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: String::new(),
            year: None,
            source: None,
        }
    }

    /// Check whether the resource carries a year or source annotation.
    pub fn has_meta(&self) -> bool {
        self.year.is_some() || self.source.is_some()
    }
}
