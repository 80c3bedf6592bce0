//! Rendering options and section configuration.

/// Display identity for one section: stable element id and icon glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionStyle {
    /// Section name as it appears in the document.
    pub name: String,

    /// Stable identifier used as the element id.
    pub id: String,

    /// Icon glyph shown next to the heading.
    pub icon: String,
}

impl SectionStyle {
    /// Create a section style.
    pub fn new(name: impl Into<String>, id: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            icon: icon.into(),
        }
    }
}

/// Options for rendering the parsed document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Ordered section configuration. Sections absent from this list are
    /// skipped entirely during rendering.
    pub sections: Vec<SectionStyle>,

    /// Emit a complete HTML page instead of a content fragment.
    pub standalone: bool,

    /// Page title for standalone output.
    pub page_title: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the section configuration.
    pub fn with_sections(mut self, sections: Vec<SectionStyle>) -> Self {
        self.sections = sections;
        self
    }

    /// Append one section style.
    pub fn with_section(mut self, style: SectionStyle) -> Self {
        self.sections.push(style);
        self
    }

    /// Emit a fragment or a complete page.
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set the page title for standalone output.
    pub fn with_page_title(mut self, title: impl Into<String>) -> Self {
        self.page_title = title.into();
        self
    }

    /// Look up the style for a section name.
    pub fn style_for(&self, name: &str) -> Option<&SectionStyle> {
        self.sections.iter().find(|style| style.name == name)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            sections: default_sections(),
            standalone: true,
            page_title: "Awesome Prompt Engineering".to_string(),
        }
    }
}

/// The fixed section order and icons of the upstream list.
pub fn default_sections() -> Vec<SectionStyle> {
    [
        ("Papers", "papers", "📄"),
        ("Tools & Code", "tools", "🛠️"),
        ("Apis", "apis", "🔌"),
        ("Datasets", "datasets", "📊"),
        ("Models", "models", "🤖"),
        ("AI Content Detectors", "detectors", "🔍"),
        ("Educational", "educational", "📚"),
        ("Courses", "courses", "👩‍🏫"),
        ("Tutorials", "tutorials", "📚"),
        ("Videos", "videos", "🎥"),
        ("Books", "books", "📖"),
        ("Communities", "communities", "🤝"),
    ]
    .into_iter()
    .map(|(name, id, icon)| SectionStyle::new(name, id, icon))
    .collect()
}
