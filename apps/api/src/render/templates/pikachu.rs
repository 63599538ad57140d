//! Pikachu — vibrant yellow header band with a black contact strip.

use crate::document::models::Document;
use crate::render::shared::{
    contact_items, date_range, degree_line, display_name, escape_html, has_contact,
    multiline_html, photo_img,
};

fn heading(label: &str) -> String {
    format!(
        "<h2 style=\"font-size:18px;font-weight:700;margin-bottom:16px;\">\
         <span style=\"display:inline-block;width:12px;height:12px;background:#fbbf24;\
         border-radius:2px;margin-right:8px;\"></span>{label}</h2>"
    )
}

pub fn body(doc: &Document) -> String {
    let mut html = String::with_capacity(4096);

    // Yellow header band
    html.push_str("<div style=\"background:#fbbf24;padding:32px;\">");
    html.push_str("<div style=\"display:flex;align-items:center;gap:24px;\">");
    let photo = photo_img(doc, "border:4px solid #000;");
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

    // Black contact strip
    if has_contact(&doc.personal) {
        html.push_str("<div style=\"background:#000;color:#fff;padding:12px 32px;display:flex;\
             flex-wrap:wrap;gap:16px;font-size:12px;\">");
        for (_, value) in contact_items(&doc.personal) {
            html.push_str(&format!("<span>{}</span>", escape_html(value)));
        }
        html.push_str("</div>");
    }

    html.push_str("<div style=\"padding:32px;\">");

    if !doc.experience.is_empty() {
        html.push_str("<div style=\"margin-bottom:24px;\">");
        html.push_str(&heading("Experience"));
        for exp in &doc.experience {
            html.push_str(&format!(
                "<div style=\"margin-bottom:16px;border-left:4px solid #fbbf24;padding-left:16px;\">\
                 <div style=\"display:flex;justify-content:space-between;margin-bottom:4px;\">\
                 <h3 style=\"font-size:16px;font-weight:600;\">{role}</h3>\
                 <span style=\"font-size:12px;font-family:monospace;\">{dates}</span></div>\
                 <p style=\"font-size:14px;font-weight:500;margin-bottom:4px;\">{company}</p>\
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
                "<div style=\"margin-bottom:12px;border-left:4px solid #fbbf24;padding-left:16px;\">\
                 <div style=\"display:flex;justify-content:space-between;margin-bottom:4px;\">\
                 <h3 style=\"font-size:16px;font-weight:600;\">{title}</h3>\
                 <span style=\"font-size:12px;font-family:monospace;\">{dates}</span></div>\
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
        html.push_str("<div>");
        for skill in &doc.skills {
            html.push_str(&format!(
                "<span style=\"display:inline-block;background:#fbbf24;color:#000;font-size:12px;\
                 font-weight:600;padding:4px 12px;border-radius:9999px;margin:0 8px 8px 0;\">{}\
                 </span>",
                escape_html(skill)
            ));
        }
        html.push_str("</div></div>");
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
