//! Rendering module for converting the parsed document to output formats.

mod html;
mod json;
mod options;

pub use html::{error_page, to_html, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use options::{default_sections, RenderOptions, SectionStyle};
