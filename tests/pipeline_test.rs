//! End-to-end tests for the parse-then-render pipeline.

use promptshelf::{
    parse_str, to_html, to_json, JsonFormat, Promptshelf, RenderOptions, SectionStyle,
};

/// A miniature source document in the upstream list's shape: badge front
/// matter, a table of contents, sections with tables, subsections, and
/// dash-list resources.
const SAMPLE: &str = "\
<p align=\"center\">badges</p>

# Awesome Prompt Engineering
🔥

## Table of Contents
- [Papers](#papers)
- [Models](#models)

## 📄 Papers
- **Prompt Engineering Techniques**:
  - [Chain-of-Thought](https://example.com/cot) [2022] (NeurIPS)
  - [Self-Consistency](https://example.com/sc), improves CoT [2023] (ICLR)
  - plain note without a link

## 🤖 Models
| Name | Year |
|---|---|
| **GPT-4** | 2023 |
| [Claude](https://claude.ai) | 2023 |

## 👩‍🏫 Courses
[Prompt Course](https://course.example), by DeepLearning.AI

## Secret Section
- [Hidden](https://hidden.example)

## How to Contribute
- ignored entirely
";

#[test]
fn test_sections_in_document_order() {
    let doc = parse_str(SAMPLE);
    let names: Vec<_> = doc.sections.keys().cloned().collect();
    assert_eq!(names, ["Papers", "Models", "Courses", "Secret Section"]);
}

#[test]
fn test_navigation_headers_excluded() {
    let doc = parse_str(SAMPLE);
    assert!(doc.get_section("Table of Contents").is_none());
    assert!(doc.get_section("How to Contribute").is_none());
}

#[test]
fn test_subsection_from_bold_label() {
    // Scenario: `- **Label**:` inside a section opens a subsection.
    let doc = parse_str(SAMPLE);
    let papers = doc.get_section("Papers").unwrap();
    let techniques = papers
        .subsections
        .get("Prompt Engineering Techniques")
        .unwrap();
    assert_eq!(techniques.content.len(), 3);
    assert!(papers.content.is_empty());
}

#[test]
fn test_table_headers_and_rows() {
    let doc = parse_str(SAMPLE);
    let table = doc.get_section("Models").unwrap().table.as_ref().unwrap();
    assert_eq!(table.headers, ["Name", "Year"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], ["**GPT-4**", "2023"]);
}

#[test]
fn test_all_stored_tables_nonempty() {
    let doc = parse_str(SAMPLE);
    for section in doc.sections.values() {
        if let Some(table) = &section.table {
            assert!(!table.headers.is_empty());
            assert!(!table.rows.is_empty());
        }
        for sub in section.subsections.values() {
            if let Some(table) = &sub.table {
                assert!(!table.headers.is_empty());
                assert!(!table.rows.is_empty());
            }
        }
    }
}

#[test]
fn test_reparse_is_idempotent() {
    assert_eq!(parse_str(SAMPLE), parse_str(SAMPLE));
}

#[test]
fn test_unconfigured_section_not_rendered() {
    // "Secret Section" is absent from the default configuration.
    let doc = parse_str(SAMPLE);
    let html = to_html(&doc, &RenderOptions::default()).unwrap();
    assert!(!html.contains("Secret Section"));
    assert!(!html.contains("hidden.example"));
}

#[test]
fn test_rendered_page_structure() {
    let doc = parse_str(SAMPLE);
    let html = to_html(&doc, &RenderOptions::default()).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("id=\"papers\""));
    assert!(html.contains("<h3 class=\"subsection-heading\">Prompt Engineering Techniques</h3>"));
    assert!(html.contains(
        "<a href=\"https://example.com/cot\" target=\"_blank\" rel=\"noopener noreferrer\">Chain-of-Thought</a>"
    ));
    assert!(html.contains("📅 2022 • 📍 NeurIPS"));
    // Bold table cell formatted, link cell hyperlinked.
    assert!(html.contains("<td><strong>GPT-4</strong></td>"));
    assert!(html.contains(
        "<a href=\"https://claude.ai\" target=\"_blank\" rel=\"noopener noreferrer\">Claude</a>"
    ));
    // Dashless course line becomes a card with normalized attribution.
    assert!(html.contains("by DeepLearning.AI"));
    // Plain note renders as a bare paragraph card.
    assert!(html.contains("<p>plain note without a link</p>"));
}

#[test]
fn test_fragment_render_with_custom_config() {
    let doc = parse_str("## Models\n| Name |\n|---|\n| GPT-4 |\n");
    let options = RenderOptions::new()
        .with_sections(vec![SectionStyle::new("Models", "models", "🤖")])
        .with_standalone(false);
    let html = to_html(&doc, &options).unwrap();
    assert!(html.starts_with("<div class=\"category-section\" id=\"models\">"));
    assert!(!html.contains("<!DOCTYPE"));
}

#[test]
fn test_json_round_trip() {
    let doc = parse_str(SAMPLE);
    let json = to_json(&doc, JsonFormat::Compact).unwrap();
    let back: promptshelf::Document = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn test_builder_parse_and_render() {
    let result = Promptshelf::new().parse(SAMPLE);
    assert_eq!(result.document().section_count(), 4);
    let html = result.to_html().unwrap();
    assert!(html.contains("Models"));
}
