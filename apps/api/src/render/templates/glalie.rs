//! Glalie — cool blue professional layout: header row, grey sidebar with
//! contact and skills, wider main column.

use crate::document::models::Document;
use crate::render::shared::{
    contact_items, date_range, degree_line, display_name, escape_html, has_contact,
    multiline_html, photo_img,
};

fn sidebar_heading(label: &str) -> String {
    format!(
        "<h3 style=\"font-size:12px;font-weight:700;text-transform:uppercase;\
         letter-spacing:0.05em;border-bottom:1px solid #000;padding-bottom:4px;\
         margin-bottom:12px;\">{label}</h3>"
    )
}

fn main_heading(label: &str) -> String {
    format!(
        "<h2 style=\"font-size:16px;font-weight:700;color:#1d4ed8;margin-bottom:16px;\
         padding-bottom:8px;border-bottom:2px solid #93c5fd;\">{label}</h2>"
    )
}

pub fn body(doc: &Document) -> String {
    let mut html = String::with_capacity(4096);

    // Header row with name left, photo right
    html.push_str("<div style=\"background:#eff6ff;padding:32px;display:flex;\
         align-items:center;justify-content:space-between;\">");
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
    html.push_str("</div>");
    let photo = photo_img(doc, "border:4px solid #93c5fd;");
    if !photo.is_empty() {
        html.push_str(&photo);
    }
    html.push_str("</div>");

    html.push_str("<div style=\"display:flex;\">");

    // Sidebar
    html.push_str("<div style=\"width:35%;background:#f9fafb;padding:24px;min-height:230mm;\">");
    if has_contact(&doc.personal) {
        html.push_str("<div style=\"margin-bottom:24px;\">");
        html.push_str(&sidebar_heading("Contact"));
        for (_, value) in contact_items(&doc.personal) {
            html.push_str(&format!(
                "<div style=\"font-size:13px;margin-bottom:8px;word-break:break-all;\">{}</div>",
                escape_html(value)
            ));
        }
        html.push_str("</div>");
    }
    if !doc.skills.is_empty() {
        html.push_str("<div>");
        html.push_str(&sidebar_heading("Skills"));
        html.push_str("<div>");
        for skill in &doc.skills {
            html.push_str(&format!(
                "<span style=\"display:inline-block;background:#fff;border:1px solid #000;\
                 border-radius:8px;font-size:12px;padding:6px 12px;margin:0 8px 8px 0;\">{}\
                 </span>",
                escape_html(skill)
            ));
        }
        html.push_str("</div></div>");
    }
    html.push_str("</div>");

    // Main column
    html.push_str("<div style=\"flex:1;padding:24px;\">");

    if !doc.experience.is_empty() {
        html.push_str("<div style=\"margin-bottom:24px;\">");
        html.push_str(&main_heading("Experience"));
        for exp in &doc.experience {
            html.push_str(&format!(
                "<div style=\"margin-bottom:16px;\">\
                 <div style=\"display:flex;justify-content:space-between;margin-bottom:4px;\">\
                 <h3 style=\"font-size:15px;font-weight:600;\">{role}</h3>\
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
        html.push_str(&main_heading("Education"));
        for edu in &doc.education {
            html.push_str(&format!(
                "<div style=\"margin-bottom:12px;\">\
                 <div style=\"display:flex;justify-content:space-between;margin-bottom:4px;\">\
                 <h3 style=\"font-size:15px;font-weight:600;\">{title}</h3>\
                 <span style=\"font-size:12px;font-family:monospace;\">{dates}</span></div>\
                 <p style=\"font-size:14px;\">{institution}</p></div>",
                title = escape_html(&degree_line(&edu.degree, &edu.field, " in ")),
                dates = escape_html(&date_range(&edu.start_date, &edu.end_date, edu.current)),
                institution = escape_html(&edu.institution),
            ));
        }
        html.push_str("</div>");
    }

    if doc.declaration.enabled {
        html.push_str("<div style=\"margin-bottom:24px;\">");
        html.push_str(&main_heading("Declaration"));
        html.push_str(&format!(
            "<p style=\"font-size:14px;\">{}</p>",
            escape_html(&doc.declaration.text)
        ));
        html.push_str("</div>");
    }

    html.push_str("</div></div>");
    html
}
