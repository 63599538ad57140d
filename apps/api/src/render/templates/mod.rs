//! The eight page styles and the style selector.
//!
//! Each style implements the identical contract — the shared derivation
//! rules in `render::shared` decide what appears; the style decides only
//! arrangement and color. The selector falls back to Modern for unknown
//! identifiers; that is documented default behavior, not an error.

pub mod ats;
pub mod classic;
pub mod gengar;
pub mod glalie;
pub mod leafish;
pub mod modern;
pub mod onyx;
pub mod pikachu;

use serde::{Deserialize, Serialize};

use crate::document::models::Document;

/// The fixed set of page styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Modern,
    Classic,
    Ats,
    Onyx,
    Pikachu,
    Glalie,
    Gengar,
    Leafish,
}

/// Catalog entry served to clients for the style picker.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

impl Template {
    /// Registry order; also the catalog order.
    pub const ALL: [Template; 8] = [
        Template::Modern,
        Template::Classic,
        Template::Ats,
        Template::Onyx,
        Template::Pikachu,
        Template::Glalie,
        Template::Gengar,
        Template::Leafish,
    ];

    /// Resolves a style identifier, falling back to Modern when unknown.
    pub fn parse(id: &str) -> Template {
        match id {
            "classic" => Template::Classic,
            "ats" => Template::Ats,
            "onyx" => Template::Onyx,
            "pikachu" => Template::Pikachu,
            "glalie" => Template::Glalie,
            "gengar" => Template::Gengar,
            "leafish" => Template::Leafish,
            _ => Template::Modern,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Template::Modern => "modern",
            Template::Classic => "classic",
            Template::Ats => "ats",
            Template::Onyx => "onyx",
            Template::Pikachu => "pikachu",
            Template::Glalie => "glalie",
            Template::Gengar => "gengar",
            Template::Leafish => "leafish",
        }
    }

    pub fn info(&self) -> TemplateInfo {
        match self {
            Template::Modern => TemplateInfo {
                id: "modern",
                name: "Modern",
                description: "Clean two-column layout with sidebar",
                color: "#4169E1",
            },
            Template::Classic => TemplateInfo {
                id: "classic",
                name: "Classic",
                description: "Traditional centered design",
                color: "#c9a227",
            },
            Template::Ats => TemplateInfo {
                id: "ats",
                name: "ATS-Friendly",
                description: "Optimized for applicant tracking systems",
                color: "#333333",
            },
            Template::Onyx => TemplateInfo {
                id: "onyx",
                name: "Onyx",
                description: "Bold black and white design",
                color: "#000000",
            },
            Template::Pikachu => TemplateInfo {
                id: "pikachu",
                name: "Pikachu",
                description: "Vibrant yellow accent design",
                color: "#fbbf24",
            },
            Template::Glalie => TemplateInfo {
                id: "glalie",
                name: "Glalie",
                description: "Cool blue professional layout",
                color: "#93c5fd",
            },
            Template::Gengar => TemplateInfo {
                id: "gengar",
                name: "Gengar",
                description: "Bold purple creative design",
                color: "#9333ea",
            },
            Template::Leafish => TemplateInfo {
                id: "leafish",
                name: "Leafish",
                description: "Fresh green nature-inspired",
                color: "#10b981",
            },
        }
    }

    /// The style's page body markup (everything inside the A4 shell).
    pub fn body(&self, doc: &Document) -> String {
        match self {
            Template::Modern => modern::body(doc),
            Template::Classic => classic::body(doc),
            Template::Ats => ats::body(doc),
            Template::Onyx => onyx::body(doc),
            Template::Pikachu => pikachu::body(doc),
            Template::Glalie => glalie::body(doc),
            Template::Gengar => gengar::body(doc),
            Template::Leafish => leafish::body(doc),
        }
    }
}

/// All eight styles in registry order.
pub fn catalog() -> Vec<TemplateInfo> {
    Template::ALL.iter().map(Template::info).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::models::{Document, ExperiencePatch};

    fn make_full_doc() -> Document {
        let mut doc = Document::default();
        doc.personal.first_name = "John".to_string();
        doc.personal.last_name = "Doe".to_string();
        doc.personal.email = "john@example.com".to_string();
        doc.personal.summary = "Engineer.".to_string();

        let exp = doc.add_experience();
        doc.update_experience(exp, ExperiencePatch::Role("Engineer".to_string()));
        doc.update_experience(exp, ExperiencePatch::Company("Acme".to_string()));
        doc.update_experience(exp, ExperiencePatch::StartDate("2020".to_string()));
        doc.update_experience(exp, ExperiencePatch::Current(true));
        doc.update_experience(exp, ExperiencePatch::Description("Built things".to_string()));

        doc.add_skill();
        doc.update_skill(0, "Go".to_string());
        doc.add_skill();
        doc.update_skill(1, "SQL".to_string());
        doc
    }

    // ── selector ────────────────────────────────────────────────────────────

    #[test]
    fn test_parse_known_identifiers() {
        for template in Template::ALL {
            assert_eq!(Template::parse(template.id()), template);
        }
    }

    #[test]
    fn test_parse_unknown_falls_back_to_modern() {
        assert_eq!(Template::parse("brutalist"), Template::Modern);
        assert_eq!(Template::parse(""), Template::Modern);
    }

    #[test]
    fn test_catalog_lists_all_eight_in_order() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog[0].id, "modern");
        assert_eq!(catalog[7].id, "leafish");
        assert_eq!(catalog[2].name, "ATS-Friendly");
    }

    // ── shared contract across styles ───────────────────────────────────────

    #[test]
    fn test_all_styles_render_scenario_document() {
        let doc = make_full_doc();
        for template in Template::ALL {
            let body = template.body(&doc);
            assert!(body.contains("John Doe"), "{template:?} missing header name");
            assert!(body.contains("Engineer"), "{template:?} missing role");
            assert!(body.contains("Acme"), "{template:?} missing company");
            assert!(body.contains("2020 - Present"), "{template:?} missing date range");
            assert!(body.contains("Built things"), "{template:?} missing description");
            // Skills in insertion order.
            let go = body.find("Go").expect("skill Go rendered");
            let sql = body.find("SQL").expect("skill SQL rendered");
            assert!(go < sql, "{template:?} must preserve skill order");
        }
    }

    #[test]
    fn test_empty_document_renders_placeholder_and_no_sections() {
        let doc = Document::default();
        for template in Template::ALL {
            let body = template.body(&doc);
            assert!(body.contains("Your Name"), "{template:?} missing placeholder");
            for heading in ["Experience", "Education", "Skills", "Declaration", "Contact"] {
                assert!(
                    !body.contains(heading),
                    "{template:?} rendered empty section heading {heading}"
                );
            }
            assert!(!body.contains("<img"), "{template:?} rendered a photo with none set");
        }
    }

    #[test]
    fn test_declaration_rendered_only_when_enabled() {
        let mut doc = make_full_doc();
        doc.set_declaration(false, "Should not appear".to_string());
        for template in Template::ALL {
            assert!(!template.body(&doc).contains("Should not appear"), "{template:?}");
        }
        doc.set_declaration(true, "All information is accurate.".to_string());
        for template in Template::ALL {
            let body = template.body(&doc);
            assert!(body.contains("Declaration"), "{template:?} missing heading");
            assert!(body.contains("All information is accurate."), "{template:?} missing text");
        }
    }

    #[test]
    fn test_present_shown_even_with_stale_end_date() {
        let mut doc = make_full_doc();
        let id = doc.experience[0].id;
        doc.update_experience(id, ExperiencePatch::EndDate("2099".to_string()));
        for template in Template::ALL {
            let body = template.body(&doc);
            assert!(body.contains("2020 - Present"), "{template:?}");
            assert!(!body.contains("2099"), "{template:?} leaked stored end date");
        }
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut doc = Document::default();
        doc.personal.first_name = "<script>".to_string();
        for template in Template::ALL {
            let body = template.body(&doc);
            assert!(!body.contains("<script>"), "{template:?} did not escape markup");
            assert!(body.contains("&lt;script&gt;"), "{template:?}");
        }
    }

    #[test]
    fn test_multiline_description_keeps_breaks() {
        let mut doc = make_full_doc();
        let id = doc.experience[0].id;
        doc.update_experience(
            id,
            ExperiencePatch::Description("Built things\nShipped things".to_string()),
        );
        for template in Template::ALL {
            let body = template.body(&doc);
            assert!(
                body.contains("Built things<br>Shipped things"),
                "{template:?} collapsed line breaks"
            );
        }
    }
}
