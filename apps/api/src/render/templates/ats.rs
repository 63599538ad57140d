//! ATS-Friendly — plain single column, explicit labels, comma-joined
//! skills. No decoration that a tracking-system parser could trip on.

use crate::document::models::Document;
use crate::render::shared::{
    contact_items, date_range, degree_line, display_name, escape_html, has_contact,
    multiline_html, photo_img,
};

fn heading(label: &str) -> String {
    format!(
        "<h2 style=\"font-size:16px;font-weight:700;text-transform:uppercase;\
         border-bottom:1px solid #000;padding-bottom:4px;margin-bottom:8px;\">{label}</h2>"
    )
}

pub fn body(doc: &Document) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<div style=\"padding:32px;\">");

    html.push_str(&format!(
        "<h1 style=\"font-size:28px;font-weight:700;margin-bottom:8px;\">{}</h1>",
        escape_html(&display_name(&doc.personal))
    ));
    if has_contact(&doc.personal) {
        html.push_str("<div style=\"font-size:14px;margin-bottom:16px;\">");
        for (label, value) in contact_items(&doc.personal) {
            html.push_str(&format!(
                "<span style=\"margin-right:16px;\">{label}: {}</span>",
                escape_html(value)
            ));
        }
        html.push_str("</div>");
    }

    let photo = photo_img(doc, "border:1px solid #000;");
    if !photo.is_empty() {
        html.push_str(&format!("<div style=\"margin-bottom:24px;\">{photo}</div>"));
    }

    if !doc.personal.summary.is_empty() {
        html.push_str("<div style=\"margin-bottom:24px;\">");
        html.push_str(&heading("Summary"));
        html.push_str(&format!(
            "<p style=\"font-size:14px;line-height:1.6;\">{}</p>",
            escape_html(&doc.personal.summary)
        ));
        html.push_str("</div>");
    }

    if !doc.experience.is_empty() {
        html.push_str("<div style=\"margin-bottom:24px;\">");
        html.push_str(&heading("Experience"));
        for exp in &doc.experience {
            html.push_str(&format!(
                "<div style=\"margin-bottom:16px;\">\
                 <div style=\"display:flex;justify-content:space-between;align-items:baseline;\">\
                 <h3 style=\"font-size:15px;font-weight:700;\">{role}</h3>\
                 <span style=\"font-size:13px;\">{dates}</span></div>\
                 <p style=\"font-size:14px;margin-bottom:4px;\">{company}</p>\
                 <p style=\"font-size:14px;\">{description}</p></div>",
                role = escape_html(&exp.role),
                dates = escape_html(&date_range(&exp.start_date, &exp.end_date, exp.current)),
                company = escape_html(&exp.company),
                description = multiline_html(&exp.description),
            ));
        }
        html.push_str("</div>");
    }

    if !doc.education.is_empty() {
        html.push_str("<div style=\"margin-bottom:24px;\">");
        html.push_str(&heading("Education"));
        for edu in &doc.education {
            html.push_str(&format!(
                "<div style=\"margin-bottom:12px;\">\
                 <div style=\"display:flex;justify-content:space-between;align-items:baseline;\">\
                 <h3 style=\"font-size:15px;font-weight:700;\">{title}</h3>\
                 <span style=\"font-size:13px;\">{dates}</span></div>\
                 <p style=\"font-size:14px;\">{institution}</p></div>",
                title = escape_html(&degree_line(&edu.degree, &edu.field, " in ")),
                dates = escape_html(&date_range(&edu.start_date, &edu.end_date, edu.current)),
                institution = escape_html(&edu.institution),
            ));
        }
        html.push_str("</div>");
    }

    if !doc.skills.is_empty() {
        html.push_str("<div style=\"margin-bottom:24px;\">");
        html.push_str(&heading("Skills"));
        let joined = doc
            .skills
            .iter()
            .map(|s| escape_html(s))
            .collect::<Vec<_>>()
            .join(", ");
        html.push_str(&format!("<p style=\"font-size:14px;\">{joined}</p>"));
        html.push_str("</div>");
    }

    if doc.declaration.enabled {
        html.push_str("<div style=\"margin-bottom:24px;\">");
        html.push_str(&heading("Declaration"));
        html.push_str(&format!(
            "<p style=\"font-size:14px;\">{}</p>",
            escape_html(&doc.declaration.text)
        ));
        html.push_str("</div>");
    }

    html.push_str("</div>");
    html
}
