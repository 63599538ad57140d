// Template Renderer
// Implements: the pure Document -> PageLayout mapping, the A4 page shell,
// and the eight page styles. Rendering is deterministic and total — an
// all-empty document yields a near-blank page, never an error.

pub mod handlers;
pub mod shared;
pub mod templates;

pub use templates::{catalog, Template, TemplateInfo};

use crate::document::models::{Document, PersonalInfo};
use crate::render::shared::{attribution_mark, escape_html};

/// ISO A4 portrait, the fixed aspect ratio of every page layout.
pub const A4_WIDTH_MM: u32 = 210;
pub const A4_HEIGHT_MM: u32 = 297;

/// A rendered, print-ready page: a complete standalone HTML document plus
/// the export title used as the download filename.
#[derive(Debug, Clone)]
pub struct PageLayout {
    pub template: Template,
    pub title: String,
    pub html: String,
}

/// Export filename convention, kept verbatim from the editor's print flow.
pub fn export_title(personal: &PersonalInfo) -> String {
    format!("{}_{}_CV", personal.first_name, personal.last_name)
}

/// Renders `doc` in the given style. Pure: same document and style always
/// produce identical output.
pub fn render(doc: &Document, template: Template) -> PageLayout {
    let title = export_title(&doc.personal);
    let html = page_document(&title, &template.body(doc));
    PageLayout {
        template,
        title,
        html,
    }
}

/// Base stylesheet shared by all styles: page geometry, print setup, and
/// the attribution stamp. Template-specific styling is inline in each body.
fn page_css() -> String {
    format!(
        "*{{margin:0;padding:0;box-sizing:border-box;}}\
         body{{background:#e5e7eb;}}\
         .a4-paper{{width:{w}mm;min-height:{h}mm;margin:0 auto;background:#ffffff;\
         color:#000000;position:relative;font-family:'Inter',sans-serif;\
         padding-bottom:64px;}}\
         .attribution{{position:absolute;bottom:16px;right:16px;font-size:8px;\
         font-weight:700;color:rgba(0,0,0,0.4);font-family:'Space Grotesk',sans-serif;}}\
         @page{{size:A4 portrait;margin:0;}}\
         @media print{{body{{background:#ffffff;}}.a4-paper{{margin:0;}}}}",
        w = A4_WIDTH_MM,
        h = A4_HEIGHT_MM,
    )
}

/// Wraps a style body in the standalone printable document.
fn page_document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{css}</style>\n</head>\n<body>\n\
         <div class=\"a4-paper\">{body}{mark}</div>\n</body>\n</html>\n",
        title = escape_html(title),
        css = page_css(),
        mark = attribution_mark(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::models::Document;

    #[test]
    fn test_export_title_convention() {
        let mut doc = Document::default();
        doc.personal.first_name = "John".to_string();
        doc.personal.last_name = "Doe".to_string();
        assert_eq!(export_title(&doc.personal), "John_Doe_CV");
        assert_eq!(export_title(&PersonalInfo::default()), "__CV");
    }

    #[test]
    fn test_render_produces_standalone_a4_document() {
        let layout = render(&Document::default(), Template::Modern);
        assert!(layout.html.starts_with("<!DOCTYPE html>"));
        assert!(layout.html.contains("210mm"));
        assert!(layout.html.contains("297mm"));
        assert!(layout.html.contains("size:A4 portrait"));
        assert!(layout.html.contains("class=\"attribution\""));
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut doc = Document::default();
        doc.personal.first_name = "Ada".to_string();
        doc.add_skill();
        doc.update_skill(0, "Rust".to_string());

        for template in Template::ALL {
            let a = render(&doc, template);
            let b = render(&doc, template);
            assert_eq!(a.html, b.html, "{template:?} must render identically");
        }
    }
}
