//! Leafish — fresh green design: emerald header band, pill contact row,
//! dotted section headings, two-column body with skills on the right.

use crate::document::models::Document;
use crate::render::shared::{
    contact_items, date_range, degree_line, display_name, escape_html, has_contact,
    multiline_html, photo_img,
};

fn heading(label: &str, dot_color: &str) -> String {
    format!(
        "<h2 style=\"font-size:14px;font-weight:700;text-transform:uppercase;\
         letter-spacing:0.05em;border-bottom:1px solid #000;padding-bottom:8px;\
         margin-bottom:16px;\">\
         <span style=\"display:inline-block;width:8px;height:8px;background:{dot_color};\
         border-radius:50%;margin-right:8px;\"></span>{label}</h2>"
    )
}

pub fn body(doc: &Document) -> String {
    let mut html = String::with_capacity(4096);

    // Emerald header band
    html.push_str("<div style=\"background:#10b981;color:#fff;padding:32px;\">");
    html.push_str("<div style=\"display:flex;align-items:center;gap:24px;\">");
    let photo = photo_img(doc, "border:4px solid #fff;");
    if !photo.is_empty() {
        html.push_str(&photo);
    }
    html.push_str("<div>");
    html.push_str(&format!(
        "<h1 style=\"font-size:30px;font-weight:700;margin-bottom:8px;\
         font-family:'Space Grotesk',sans-serif;\">{}</h1>",
        escape_html(&display_name(&doc.personal))
    ));
    if !doc.personal.summary.is_empty() {
        html.push_str(&format!(
            "<p style=\"font-size:14px;max-width:28rem;\">{}</p>",
            escape_html(&doc.personal.summary)
        ));
    }
    html.push_str("</div></div></div>");

    html.push_str("<div style=\"padding:32px;\">");

    // Contact pill row
    if has_contact(&doc.personal) {
        html.push_str("<div style=\"display:flex;flex-wrap:wrap;gap:8px;margin-bottom:32px;\">");
        for (_, value) in contact_items(&doc.personal) {
            html.push_str(&format!(
                "<span style=\"background:#ecfdf5;border:1px solid #a7f3d0;font-size:12px;\
                 padding:6px 12px;border-radius:9999px;\">{}</span>",
                escape_html(value)
            ));
        }
        html.push_str("</div>");
    }

    // Two columns: experience/education/declaration left, skills right
    html.push_str("<div style=\"display:flex;gap:24px;\">");
    html.push_str("<div style=\"flex:2;\">");

    if !doc.experience.is_empty() {
        html.push_str("<div style=\"margin-bottom:24px;\">");
        html.push_str(&heading("Experience", "#10b981"));
        for exp in &doc.experience {
            html.push_str(&format!(
                "<div style=\"margin-bottom:16px;border-left:2px solid #6ee7b7;\
                 padding-left:16px;\">\
                 <h3 style=\"font-size:15px;font-weight:600;\">{role}</h3>\
                 <div style=\"display:flex;justify-content:space-between;align-items:center;\
                 margin-bottom:4px;\">\
                 <p style=\"font-size:14px;\">{company}</p>\
                 <span style=\"font-size:12px;font-family:monospace;\">{dates}</span></div>\
                 <p style=\"font-size:14px;\">{description}</p></div>",
                role = escape_html(&exp.role),
                company = escape_html(&exp.company),
                dates = escape_html(&date_range(&exp.start_date, &exp.end_date, exp.current)),
                description = multiline_html(&exp.description),
            ));
        }
        html.push_str("</div>");
    }

    if !doc.education.is_empty() {
        html.push_str("<div style=\"margin-bottom:24px;\">");
        html.push_str(&heading("Education", "#14b8a6"));
        for edu in &doc.education {
            html.push_str(&format!(
                "<div style=\"margin-bottom:12px;border-left:2px solid #5eead4;\
                 padding-left:16px;\">\
                 <h3 style=\"font-size:15px;font-weight:600;\">{title}</h3>\
                 <div style=\"display:flex;justify-content:space-between;align-items:center;\">\
                 <p style=\"font-size:14px;\">{institution}</p>\
                 <span style=\"font-size:12px;font-family:monospace;\">{dates}</span></div></div>",
                title = escape_html(&degree_line(&edu.degree, &edu.field, " in ")),
                institution = escape_html(&edu.institution),
                dates = escape_html(&date_range(&edu.start_date, &edu.end_date, edu.current)),
            ));
        }
        html.push_str("</div>");
    }

    if doc.declaration.enabled {
        html.push_str("<div style=\"margin-bottom:24px;\">");
        html.push_str(&heading("Declaration", "#06b6d4"));
        html.push_str(&format!(
            "<p style=\"font-size:14px;\">{}</p>",
            escape_html(&doc.declaration.text)
        ));
        html.push_str("</div>");
    }

    html.push_str("</div>");

    // Right column
    html.push_str("<div style=\"flex:1;\">");
    if !doc.skills.is_empty() {
        html.push_str(&heading("Skills", "#10b981"));
        html.push_str("<div>");
        for skill in &doc.skills {
            html.push_str(&format!(
                "<span style=\"display:inline-block;background:#ecfdf5;border:1px solid #a7f3d0;\
                 font-size:12px;padding:6px 12px;border-radius:8px;margin:0 8px 8px 0;\">{}\
                 </span>",
                escape_html(skill)
            ));
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");

    html.push_str("</div></div>");
    html
}
