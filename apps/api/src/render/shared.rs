//! Derivation rules shared by all eight page styles.
//!
//! Every style must reproduce these exactly — they decide WHAT appears on
//! the page. The styles themselves only decide arrangement and color.

use crate::document::models::{Document, PersonalInfo};

/// Placeholder shown when first and last name are both blank.
pub const NAME_PLACEHOLDER: &str = "Your Name";

/// Text rendered in place of the end date while a position is current.
pub const PRESENT: &str = "Present";

/// Attribution mark stamped in the bottom-right corner of every page.
pub const ATTRIBUTION: &str = "Europin";

/// `"{first} {last}"` trimmed, or the placeholder when that is empty.
pub fn display_name(personal: &PersonalInfo) -> String {
    let full = format!("{} {}", personal.first_name, personal.last_name);
    let trimmed = full.trim();
    if trimmed.is_empty() {
        NAME_PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Photo render size in px, stepped down as the summary grows so the header
/// keeps its proportions. Boundaries: 200 falls in the middle tier, 100 in
/// the bottom tier.
pub fn photo_size_px(summary: &str) -> u32 {
    let len = summary.chars().count();
    if len > 200 {
        80
    } else if len > 100 {
        96
    } else {
        112
    }
}

/// `"{start} - {end}"`, with the literal `Present` on the right while
/// `current` is set — regardless of the stored end date.
pub fn date_range(start: &str, end: &str, current: bool) -> String {
    let right = if current { PRESENT } else { end };
    format!("{start} - {right}")
}

/// Education title line: `degree` alone, or degree and field joined by
/// `joiner` (`" in "` for most styles, `", "` for Classic).
pub fn degree_line(degree: &str, field: &str, joiner: &str) -> String {
    if field.is_empty() {
        degree.to_string()
    } else {
        format!("{degree}{joiner}{field}")
    }
}

/// True when at least one contact field has content; styles omit the whole
/// contact block otherwise instead of rendering an empty heading.
pub fn has_contact(personal: &PersonalInfo) -> bool {
    !(personal.email.is_empty()
        && personal.phone.is_empty()
        && personal.location.is_empty()
        && personal.linkedin.is_empty()
        && personal.website.is_empty())
}

/// Escape text for HTML body and attribute positions.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text and turn line breaks into `<br>` so multi-line descriptions
/// keep their breaks on the page.
pub fn multiline_html(s: &str) -> String {
    escape_html(s).replace("\r\n", "<br>").replace('\n', "<br>")
}

/// The attribution stamp markup, positioned by the page shell.
pub fn attribution_mark() -> String {
    format!(
        "<div class=\"attribution\">{ATTRIBUTION}</div>"
    )
}

/// Contact items in fixed order: (label, value) for every non-empty field.
/// Styles render these as rows, inline runs, or pills, but never reorder.
pub fn contact_items(personal: &PersonalInfo) -> Vec<(&'static str, &str)> {
    let mut items = Vec::new();
    if !personal.email.is_empty() {
        items.push(("Email", personal.email.as_str()));
    }
    if !personal.phone.is_empty() {
        items.push(("Phone", personal.phone.as_str()));
    }
    if !personal.location.is_empty() {
        items.push(("Location", personal.location.as_str()));
    }
    if !personal.linkedin.is_empty() {
        items.push(("LinkedIn", personal.linkedin.as_str()));
    }
    if !personal.website.is_empty() {
        items.push(("Website", personal.website.as_str()));
    }
    items
}

/// Circular photo `<img>` at the derived size, or empty when no photo is
/// set — layouts close the gap rather than leaving a placeholder.
pub fn photo_img(doc: &Document, extra_style: &str) -> String {
    if doc.personal.photo.is_empty() {
        return String::new();
    }
    let size = photo_size_px(&doc.personal.summary);
    format!(
        "<img src=\"{src}\" alt=\"{alt}\" style=\"width:{size}px;height:{size}px;\
         border-radius:50%;object-fit:cover;{extra_style}\">",
        src = escape_html(&doc.personal.photo),
        alt = escape_html(&display_name(&doc.personal)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::models::Document;

    fn make_personal(first: &str, last: &str) -> PersonalInfo {
        PersonalInfo {
            first_name: first.to_string(),
            last_name: last.to_string(),
            ..PersonalInfo::default()
        }
    }

    // ── display name ────────────────────────────────────────────────────────

    #[test]
    fn test_display_name_joins_and_trims() {
        assert_eq!(display_name(&make_personal("John", "Doe")), "John Doe");
        assert_eq!(display_name(&make_personal("John", "")), "John");
        assert_eq!(display_name(&make_personal("", "Doe")), "Doe");
    }

    #[test]
    fn test_display_name_placeholder_when_blank() {
        assert_eq!(display_name(&make_personal("", "")), NAME_PLACEHOLDER);
        assert_eq!(display_name(&make_personal("  ", " ")), NAME_PLACEHOLDER);
    }

    // ── photo sizing ────────────────────────────────────────────────────────

    #[test]
    fn test_photo_size_step_boundaries() {
        let cases = [(0, 112), (100, 112), (101, 96), (200, 96), (201, 80)];
        for (len, expected) in cases {
            let summary = "x".repeat(len);
            assert_eq!(photo_size_px(&summary), expected, "summary length {len}");
        }
    }

    // ── date ranges ─────────────────────────────────────────────────────────

    #[test]
    fn test_date_range_present_overrides_end_date() {
        assert_eq!(date_range("2020", "2023", false), "2020 - 2023");
        assert_eq!(date_range("2020", "2023", true), "2020 - Present");
        assert_eq!(date_range("2020", "", true), "2020 - Present");
    }

    // ── degree line ─────────────────────────────────────────────────────────

    #[test]
    fn test_degree_line_joins_only_when_field_set() {
        assert_eq!(degree_line("BSc", "Physics", " in "), "BSc in Physics");
        assert_eq!(degree_line("BSc", "Physics", ", "), "BSc, Physics");
        assert_eq!(degree_line("BSc", "", " in "), "BSc");
    }

    // ── contact ─────────────────────────────────────────────────────────────

    #[test]
    fn test_contact_items_order_and_emptiness() {
        let mut p = PersonalInfo::default();
        assert!(!has_contact(&p));
        assert!(contact_items(&p).is_empty());

        p.website = "ada.dev".to_string();
        p.email = "ada@example.com".to_string();
        assert!(has_contact(&p));
        let items = contact_items(&p);
        assert_eq!(items, vec![("Email", "ada@example.com"), ("Website", "ada.dev")]);
    }

    // ── escaping ────────────────────────────────────────────────────────────

    #[test]
    fn test_escape_html_special_chars() {
        assert_eq!(
            escape_html(r#"<b>&"quote"'s</b>"#),
            "&lt;b&gt;&amp;&quot;quote&quot;&#39;s&lt;/b&gt;"
        );
    }

    #[test]
    fn test_multiline_preserves_breaks() {
        assert_eq!(multiline_html("Built things\nShipped things"), "Built things<br>Shipped things");
        assert_eq!(multiline_html("a\r\nb"), "a<br>b");
    }

    // ── photo markup ────────────────────────────────────────────────────────

    #[test]
    fn test_photo_img_empty_when_no_photo() {
        let doc = Document::default();
        assert!(photo_img(&doc, "").is_empty());
    }

    #[test]
    fn test_photo_img_uses_derived_size() {
        let mut doc = Document::default();
        doc.personal.photo = "data:image/png;base64,AAAA".to_string();
        doc.personal.summary = "x".repeat(250);
        let img = photo_img(&doc, "");
        assert!(img.contains("width:80px"));
        assert!(img.contains("data:image/png;base64,AAAA"));
    }
}
