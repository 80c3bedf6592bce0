//! # promptshelf
//!
//! Parses the Awesome Prompt Engineering list into structured data and
//! renders it as a categorized, browsable HTML page.
//!
//! The core is a hand-rolled scanner for the list's markdown conventions
//! (section headings, bold-labeled subsections, pipe tables, dash-prefixed
//! links) producing a nested section model, plus an inline formatter and
//! an HTML renderer over a fixed section configuration. Fetching (local
//! file first, remote fallback) and a time-bounded cache wrap that core.
//!
//! ## Quick Start
//!
//! ```no_run
//! use promptshelf::Promptshelf;
//!
//! fn main() -> promptshelf::Result<()> {
//!     let page = Promptshelf::new().load()?.to_html()?;
//!     std::fs::write("index.html", page)?;
//!     Ok(())
//! }
//! ```
//!
//! Parsing alone needs no I/O:
//!
//! ```
//! let doc = promptshelf::parse_str("## Papers\n- [CoT](https://example.com) [2022]\n");
//! assert_eq!(doc.section_count(), 1);
//! ```

pub mod cache;
pub mod error;
pub mod fetch;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use cache::DocumentCache;
pub use error::{Error, Result};
pub use fetch::Fetcher;
pub use model::{Document, Resource, Section, Subsection, Table};
pub use parser::{parse_str, parse_str_with_options, InlineFormatter, ParseOptions, Scanner};
pub use render::{
    error_page, to_html, to_json, HtmlRenderer, JsonFormat, RenderOptions, SectionStyle,
};

/// Builder wiring the cache, fetcher, scanner, and renderer together.
///
/// # Example
///
/// ```no_run
/// use promptshelf::{DocumentCache, Promptshelf};
///
/// let html = Promptshelf::new()
///     .with_cache(DocumentCache::in_temp_dir())
///     .with_local_path("data.md")
///     .load()?
///     .to_html()?;
/// # Ok::<(), promptshelf::Error>(())
/// ```
pub struct Promptshelf {
    parse_options: ParseOptions,
    render_options: RenderOptions,
    fetcher: Fetcher,
    cache: Option<DocumentCache>,
}

impl Promptshelf {
    /// Create a new builder with defaults and no cache.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
            fetcher: Fetcher::new(),
            cache: None,
        }
    }

    /// Set parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Set render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Set the fetcher.
    pub fn with_fetcher(mut self, fetcher: Fetcher) -> Self {
        self.fetcher = fetcher;
        self
    }

    /// Set the local source file tried before the remote URL.
    pub fn with_local_path(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.fetcher = self.fetcher.with_local_path(path);
        self
    }

    /// Set the remote fallback URL.
    pub fn with_remote_url(mut self, url: impl Into<String>) -> Self {
        self.fetcher = self.fetcher.with_remote_url(url);
        self
    }

    /// Enable caching through the given cache.
    pub fn with_cache(mut self, cache: DocumentCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Load the document: cache hit, or fetch, parse, and cache.
    pub fn load(self) -> Result<ShelfResult> {
        if let Some(cache) = &self.cache {
            if let Some(document) = cache.get() {
                return Ok(ShelfResult {
                    document,
                    render_options: self.render_options,
                });
            }
        }

        let text = self.fetcher.load()?;
        let document = parser::parse_str_with_options(&text, self.parse_options);
        if let Some(cache) = &self.cache {
            cache.set(&document);
        }
        Ok(ShelfResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse already-fetched text through this builder's options.
    pub fn parse(self, text: &str) -> ShelfResult {
        let document = parser::parse_str_with_options(text, self.parse_options);
        ShelfResult {
            document,
            render_options: self.render_options,
        }
    }
}

impl Default for Promptshelf {
    fn default() -> Self {
        Self::new()
    }
}

/// A loaded document paired with its render options.
pub struct ShelfResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl ShelfResult {
    /// Render the HTML page.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Render the document as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
