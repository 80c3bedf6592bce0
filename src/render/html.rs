//! HTML rendering for the parsed resource list.

use log::debug;

use crate::error::Result;
use crate::model::{Document, Resource, Section, Table};
use crate::parser::{escape_html, ContentItem, InlineFormatter};

use super::RenderOptions;

/// Convert a document to HTML.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
    formatter: InlineFormatter,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            formatter: InlineFormatter::new(),
        }
    }

    /// Render a document to HTML.
    pub fn render(&self, doc: &Document) -> Result<String> {
        let mut body = String::new();

        // Document order, not configuration order; unconfigured sections
        // produce no output block at all.
        for (name, section) in &doc.sections {
            match self.options.style_for(name) {
                Some(style) => self.render_section(&mut body, name, section, style),
                None => debug!("skipping section not in config: {}", name),
            }
        }

        if self.options.standalone {
            Ok(page_shell(&self.options.page_title, &body))
        } else {
            Ok(body)
        }
    }

    fn render_section(
        &self,
        out: &mut String,
        name: &str,
        section: &Section,
        style: &super::SectionStyle,
    ) {
        out.push_str(&format!(
            "<div class=\"category-section\" id=\"{}\">\n",
            escape_html(&style.id)
        ));
        out.push_str(&format!(
            "<div class=\"category-header\"><span class=\"category-icon\">{}</span><h2>{}</h2></div>\n",
            style.icon,
            escape_html(name)
        ));

        if let Some(table) = &section.table {
            self.render_table(out, table);
        }

        if section.has_subsections() {
            let mut grid = String::new();
            for (sub_name, sub) in &section.subsections {
                let items = self.render_items(&sub.content);
                if items.is_empty() {
                    debug!("skipping subsection with no renderable content: {}", sub_name);
                    continue;
                }
                grid.push_str(&format!(
                    "<h3 class=\"subsection-heading\">{}</h3>\n",
                    escape_html(sub_name)
                ));
                grid.push_str(&items);
            }
            if !grid.is_empty() {
                out.push_str("<div class=\"resource-grid\">\n");
                out.push_str(&grid);
                out.push_str("</div>\n");
            }
        } else if !section.content.is_empty() {
            let items = self.render_items(&section.content);
            if !items.is_empty() {
                out.push_str("<div class=\"resource-grid\">\n");
                out.push_str(&items);
                out.push_str("</div>\n");
            }
        }
        // A section with only a table, or nothing at all, ends here: the
        // header (and table, if any) is the whole block.

        out.push_str("</div>\n");
    }

    fn render_table(&self, out: &mut String, table: &Table) {
        out.push_str("<div class=\"table-container\"><table class=\"content-table\">\n<thead><tr>");
        for header in &table.headers {
            out.push_str(&format!("<th>{}</th>", escape_html(header)));
        }
        out.push_str("</tr></thead>\n<tbody>\n");
        // Rows may be ragged; each renders however many cells it has.
        for row in &table.rows {
            out.push_str("<tr>");
            for cell in row {
                out.push_str(&format!("<td>{}</td>", self.formatter.format_cell(cell)));
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</tbody>\n</table></div>\n");
    }

    fn render_items(&self, content: &[String]) -> String {
        let mut out = String::new();
        for line in content {
            match self.formatter.content_item(line) {
                Some(ContentItem::Resource(resource)) => self.render_card(&mut out, &resource),
                Some(ContentItem::Text(text)) => out.push_str(&format!(
                    "<div class=\"resource-card\"><p>{}</p></div>\n",
                    escape_html(&text)
                )),
                None => {}
            }
        }
        out
    }

    fn render_card(&self, out: &mut String, resource: &Resource) {
        out.push_str("<div class=\"resource-card\">");
        out.push_str(&format!(
            "<h3><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></h3>",
            escape_html(&resource.url),
            escape_html(&resource.title)
        ));
        if !resource.description.is_empty() {
            out.push_str(&format!("<p>{}</p>", escape_html(&resource.description)));
        }
        if resource.has_meta() {
            let mut meta = Vec::new();
            if let Some(year) = &resource.year {
                meta.push(format!("📅 {}", escape_html(year)));
            }
            if let Some(source) = &resource.source {
                meta.push(format!("📍 {}", escape_html(source)));
            }
            out.push_str(&format!(
                "<div class=\"resource-meta\">{}</div>",
                meta.join(" • ")
            ));
        }
        out.push_str("</div>\n");
    }
}

/// The full-replacement error state with a manual retry affordance.
pub fn error_page() -> String {
    concat!(
        "<div class=\"empty-state\">\n",
        "<h3>Oops! Something went wrong</h3>\n",
        "<p>Unable to load resources. Please try again later.</p>\n",
        "<button class=\"retry-button\" onclick=\"location.reload()\">Retry</button>\n",
        "</div>\n"
    )
    .to_string()
}

/// Wrap a content fragment in a complete HTML page.
fn page_shell(title: &str, body: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    out.push_str("<style>\n");
    out.push_str("body { font-family: system-ui, sans-serif; max-width: 64em; margin: 2em auto; padding: 0 1em; color: #1a1a2e; }\n");
    out.push_str(".category-header { display: flex; align-items: center; gap: 0.5rem; margin: 2rem 0 1rem; border-bottom: 2px solid #e2e2ef; padding-bottom: 0.5rem; }\n");
    out.push_str(".category-icon { font-size: 1.5rem; }\n");
    out.push_str(".resource-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(20em, 1fr)); gap: 1rem; }\n");
    out.push_str(".subsection-heading { grid-column: 1/-1; color: #55556d; font-size: 1.25rem; margin: 1.5rem 0 1rem; border-bottom: 2px solid #e2e2ef; padding-bottom: 0.75rem; }\n");
    out.push_str(".resource-card { border: 1px solid #e2e2ef; border-radius: 8px; padding: 1rem; }\n");
    out.push_str(".resource-card h3 { margin: 0 0 0.5rem; font-size: 1rem; }\n");
    out.push_str(".resource-meta { color: #55556d; font-size: 0.85rem; margin-top: 0.5rem; }\n");
    out.push_str(".table-container { overflow-x: auto; margin: 1rem 0; }\n");
    out.push_str(".content-table { border-collapse: collapse; width: 100%; }\n");
    out.push_str(".content-table th, .content-table td { border: 1px solid #e2e2ef; padding: 0.5rem 0.75rem; text-align: left; }\n");
    out.push_str(".empty-state { text-align: center; padding: 4rem 1rem; }\n");
    out.push_str(".retry-button { margin-top: 1rem; padding: 0.75rem 1.5rem; background: #5b5bd6; color: white; border: none; border-radius: 6px; cursor: pointer; font-size: 1rem; }\n");
    out.push_str("</style>\n</head>\n<body>\n");
    out.push_str("<div id=\"contentContainer\">\n");
    out.push_str(body);
    out.push_str("</div>\n</body>\n</html>\n");
    out
}
