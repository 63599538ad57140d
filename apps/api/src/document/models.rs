//! The CV document aggregate and its mutation operations.
//!
//! A `Document` is a single owned value: value-typed children, no aliasing,
//! no behavior beyond targeted field replacement. Sequence order is
//! insertion order and is also display order — nothing here ever sorts.
//! Operations never fail; unknown entry ids and out-of-range skill indices
//! are silent no-ops.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Boilerplate declaration text restored by `Document::reset`.
pub const DEFAULT_DECLARATION_TEXT: &str = "I hereby declare that all the information \
     provided above is true and accurate to the best of my knowledge.";

// ────────────────────────────────────────────────────────────────────────────
// Value types
// ────────────────────────────────────────────────────────────────────────────

/// Personal details. Empty string means absent; `photo` holds a data URI
/// produced by the photo ingestion collaborator, or empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub website: String,
    pub summary: String,
    pub photo: String,
}

/// One position in the experience sequence. `id` is used only for identity
/// and removal, never interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub role: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

impl ExperienceEntry {
    fn empty() -> Self {
        ExperienceEntry {
            id: Uuid::new_v4(),
            role: String::new(),
            company: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            description: String::new(),
        }
    }
}

/// One entry in the education sequence; same id contract as experience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: Uuid,
    pub degree: String,
    pub field: String,
    pub institution: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
}

impl EducationEntry {
    fn empty() -> Self {
        EducationEntry {
            id: Uuid::new_v4(),
            degree: String::new(),
            field: String::new(),
            institution: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub enabled: bool,
    pub text: String,
}

impl Default for Declaration {
    fn default() -> Self {
        Declaration {
            enabled: false,
            text: DEFAULT_DECLARATION_TEXT.to_string(),
        }
    }
}

/// The complete CV content for one editing session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub personal: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub declaration: Declaration,
}

// ────────────────────────────────────────────────────────────────────────────
// Field patches
// ────────────────────────────────────────────────────────────────────────────

/// Targeted replacement of a single `PersonalInfo` field.
/// Wire shape: `{"field": "first_name", "value": "Ada"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum PersonalPatch {
    FirstName(String),
    LastName(String),
    Email(String),
    Phone(String),
    Location(String),
    Linkedin(String),
    Website(String),
    Summary(String),
    Photo(String),
}

/// Targeted replacement of a single `ExperienceEntry` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ExperiencePatch {
    Role(String),
    Company(String),
    StartDate(String),
    EndDate(String),
    Current(bool),
    Description(String),
}

/// Targeted replacement of a single `EducationEntry` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum EducationPatch {
    Degree(String),
    Field(String),
    Institution(String),
    StartDate(String),
    EndDate(String),
    Current(bool),
}

// ────────────────────────────────────────────────────────────────────────────
// Mutation operations
// ────────────────────────────────────────────────────────────────────────────

impl Document {
    /// Replaces one personal field. No side effects on other fields.
    pub fn apply_personal(&mut self, patch: PersonalPatch) {
        let p = &mut self.personal;
        match patch {
            PersonalPatch::FirstName(v) => p.first_name = v,
            PersonalPatch::LastName(v) => p.last_name = v,
            PersonalPatch::Email(v) => p.email = v,
            PersonalPatch::Phone(v) => p.phone = v,
            PersonalPatch::Location(v) => p.location = v,
            PersonalPatch::Linkedin(v) => p.linkedin = v,
            PersonalPatch::Website(v) => p.website = v,
            PersonalPatch::Summary(v) => p.summary = v,
            PersonalPatch::Photo(v) => p.photo = v,
        }
    }

    /// Appends a fresh empty experience entry and returns its id.
    /// Entries are always appended at the end, never inserted.
    pub fn add_experience(&mut self) -> Uuid {
        let entry = ExperienceEntry::empty();
        let id = entry.id;
        self.experience.push(entry);
        id
    }

    /// Replaces one field of the entry matching `id`.
    /// Returns `false` (no-op) when the id is unknown.
    ///
    /// Setting `current = true` does NOT clear the stored end date; the
    /// renderer substitutes "Present" and the typed value survives a later
    /// un-tick.
    pub fn update_experience(&mut self, id: Uuid, patch: ExperiencePatch) -> bool {
        let Some(entry) = self.experience.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        match patch {
            ExperiencePatch::Role(v) => entry.role = v,
            ExperiencePatch::Company(v) => entry.company = v,
            ExperiencePatch::StartDate(v) => entry.start_date = v,
            ExperiencePatch::EndDate(v) => entry.end_date = v,
            ExperiencePatch::Current(v) => entry.current = v,
            ExperiencePatch::Description(v) => entry.description = v,
        }
        true
    }

    /// Removes the entry matching `id`; no-op when unknown.
    pub fn remove_experience(&mut self, id: Uuid) -> bool {
        let before = self.experience.len();
        self.experience.retain(|e| e.id != id);
        self.experience.len() != before
    }

    /// Appends a fresh empty education entry and returns its id.
    pub fn add_education(&mut self) -> Uuid {
        let entry = EducationEntry::empty();
        let id = entry.id;
        self.education.push(entry);
        id
    }

    /// Replaces one field of the entry matching `id`; no-op when unknown.
    pub fn update_education(&mut self, id: Uuid, patch: EducationPatch) -> bool {
        let Some(entry) = self.education.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        match patch {
            EducationPatch::Degree(v) => entry.degree = v,
            EducationPatch::Field(v) => entry.field = v,
            EducationPatch::Institution(v) => entry.institution = v,
            EducationPatch::StartDate(v) => entry.start_date = v,
            EducationPatch::EndDate(v) => entry.end_date = v,
            EducationPatch::Current(v) => entry.current = v,
        }
        true
    }

    /// Removes the entry matching `id`; no-op when unknown.
    pub fn remove_education(&mut self, id: Uuid) -> bool {
        let before = self.education.len();
        self.education.retain(|e| e.id != id);
        self.education.len() != before
    }

    /// Appends an empty skill string.
    pub fn add_skill(&mut self) {
        self.skills.push(String::new());
    }

    /// Replaces the skill at `index`; out-of-range is a silent no-op.
    pub fn update_skill(&mut self, index: usize, value: String) -> bool {
        match self.skills.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Removes the skill at `index`; out-of-range is a silent no-op.
    pub fn remove_skill(&mut self, index: usize) -> bool {
        if index < self.skills.len() {
            self.skills.remove(index);
            true
        } else {
            false
        }
    }

    /// Replaces the declaration as a unit.
    pub fn set_declaration(&mut self, enabled: bool, text: String) {
        self.declaration = Declaration { enabled, text };
    }

    /// Restores the default empty document, boilerplate declaration included.
    pub fn reset(&mut self) {
        *self = Document::default();
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_doc_with_experience() -> (Document, Uuid) {
        let mut doc = Document::default();
        let id = doc.add_experience();
        doc.update_experience(id, ExperiencePatch::Role("Engineer".to_string()));
        doc.update_experience(id, ExperiencePatch::Company("Acme".to_string()));
        (doc, id)
    }

    // ── defaults ────────────────────────────────────────────────────────────

    #[test]
    fn test_default_document_is_empty() {
        let doc = Document::default();
        assert_eq!(doc.personal, PersonalInfo::default());
        assert!(doc.experience.is_empty());
        assert!(doc.education.is_empty());
        assert!(doc.skills.is_empty());
        assert!(!doc.declaration.enabled);
        assert_eq!(doc.declaration.text, DEFAULT_DECLARATION_TEXT);
    }

    // ── personal ────────────────────────────────────────────────────────────

    #[test]
    fn test_apply_personal_touches_one_field_only() {
        let mut doc = Document::default();
        doc.apply_personal(PersonalPatch::FirstName("Ada".to_string()));
        doc.apply_personal(PersonalPatch::Summary("Systems programmer".to_string()));

        assert_eq!(doc.personal.first_name, "Ada");
        assert_eq!(doc.personal.summary, "Systems programmer");
        assert_eq!(doc.personal.last_name, "");
        assert_eq!(doc.personal.email, "");
    }

    #[test]
    fn test_apply_personal_photo_roundtrip() {
        let mut doc = Document::default();
        doc.apply_personal(PersonalPatch::Photo("data:image/png;base64,AAAA".to_string()));
        assert!(doc.personal.photo.starts_with("data:image/png"));
        doc.apply_personal(PersonalPatch::Photo(String::new()));
        assert!(doc.personal.photo.is_empty());
    }

    // ── experience ──────────────────────────────────────────────────────────

    #[test]
    fn test_add_experience_appends_empty_entry() {
        let mut doc = Document::default();
        let first = doc.add_experience();
        let second = doc.add_experience();

        assert_eq!(doc.experience.len(), 2);
        assert_ne!(first, second, "entry ids must be unique within the sequence");
        assert_eq!(doc.experience[0].id, first, "append order is insertion order");
        assert_eq!(doc.experience[1].id, second);
        assert!(!doc.experience[0].current);
        assert!(doc.experience[0].role.is_empty());
    }

    #[test]
    fn test_add_then_remove_experience_roundtrip() {
        let (mut doc, keep) = make_doc_with_experience();
        let snapshot = doc.experience.clone();

        let added = doc.add_experience();
        assert_eq!(doc.experience.len(), 2);
        assert!(doc.remove_experience(added));

        assert_eq!(doc.experience, snapshot);
        assert_eq!(doc.experience[0].id, keep);
    }

    #[test]
    fn test_update_experience_unknown_id_is_noop() {
        let (mut doc, _) = make_doc_with_experience();
        let snapshot = doc.clone();

        let changed = doc.update_experience(Uuid::new_v4(), ExperiencePatch::Role("X".to_string()));

        assert!(!changed);
        assert_eq!(doc, snapshot);
    }

    #[test]
    fn test_remove_experience_unknown_id_is_noop() {
        let (mut doc, _) = make_doc_with_experience();
        assert!(!doc.remove_experience(Uuid::new_v4()));
        assert_eq!(doc.experience.len(), 1);
    }

    #[test]
    fn test_current_true_keeps_stored_end_date() {
        let (mut doc, id) = make_doc_with_experience();
        doc.update_experience(id, ExperiencePatch::EndDate("2023".to_string()));
        doc.update_experience(id, ExperiencePatch::Current(true));

        let entry = &doc.experience[0];
        assert!(entry.current);
        assert_eq!(entry.end_date, "2023", "stored end date is retained, just not rendered");
    }

    // ── education ───────────────────────────────────────────────────────────

    #[test]
    fn test_education_ops_mirror_experience() {
        let mut doc = Document::default();
        let id = doc.add_education();
        assert!(doc.update_education(id, EducationPatch::Degree("BSc".to_string())));
        assert!(doc.update_education(id, EducationPatch::Field("Physics".to_string())));
        assert!(!doc.update_education(Uuid::new_v4(), EducationPatch::Degree("MSc".to_string())));

        assert_eq!(doc.education[0].degree, "BSc");
        assert_eq!(doc.education[0].field, "Physics");

        assert!(doc.remove_education(id));
        assert!(doc.education.is_empty());
        assert!(!doc.remove_education(id));
    }

    // ── skills ──────────────────────────────────────────────────────────────

    #[test]
    fn test_skill_ops_preserve_order() {
        let mut doc = Document::default();
        doc.add_skill();
        doc.add_skill();
        doc.add_skill();
        assert!(doc.update_skill(0, "Go".to_string()));
        assert!(doc.update_skill(1, "SQL".to_string()));
        assert!(doc.update_skill(2, "Rust".to_string()));

        assert!(doc.remove_skill(1));
        assert_eq!(doc.skills, vec!["Go".to_string(), "Rust".to_string()]);
    }

    #[test]
    fn test_skill_out_of_range_is_noop() {
        let mut doc = Document::default();
        doc.add_skill();
        assert!(!doc.update_skill(5, "nope".to_string()));
        assert!(!doc.remove_skill(5));
        assert_eq!(doc.skills.len(), 1);
    }

    #[test]
    fn test_duplicate_skills_allowed() {
        let mut doc = Document::default();
        doc.add_skill();
        doc.add_skill();
        doc.update_skill(0, "Go".to_string());
        doc.update_skill(1, "Go".to_string());
        assert_eq!(doc.skills, vec!["Go".to_string(), "Go".to_string()]);
    }

    // ── declaration & reset ─────────────────────────────────────────────────

    #[test]
    fn test_set_declaration_replaces_as_unit() {
        let mut doc = Document::default();
        doc.set_declaration(true, "Custom text".to_string());
        assert!(doc.declaration.enabled);
        assert_eq!(doc.declaration.text, "Custom text");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let (mut doc, _) = make_doc_with_experience();
        doc.apply_personal(PersonalPatch::FirstName("Ada".to_string()));
        doc.add_skill();
        doc.set_declaration(true, "Edited".to_string());

        doc.reset();

        assert_eq!(doc, Document::default());
        assert_eq!(doc.declaration.text, DEFAULT_DECLARATION_TEXT);
        assert!(!doc.declaration.enabled);
    }

    // ── wire shape ──────────────────────────────────────────────────────────

    #[test]
    fn test_patch_wire_shape() {
        let patch: PersonalPatch =
            serde_json::from_str(r#"{"field":"first_name","value":"Ada"}"#).unwrap();
        assert!(matches!(patch, PersonalPatch::FirstName(ref v) if v == "Ada"));

        let patch: ExperiencePatch =
            serde_json::from_str(r#"{"field":"current","value":true}"#).unwrap();
        assert!(matches!(patch, ExperiencePatch::Current(true)));
    }
}
