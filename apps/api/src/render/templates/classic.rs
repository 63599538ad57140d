//! Classic — traditional centered design with uppercase section rules.

use crate::document::models::Document;
use crate::render::shared::{
    contact_items, date_range, degree_line, display_name, escape_html, has_contact,
    multiline_html, photo_img,
};

fn heading(label: &str) -> String {
    format!(
        "<h2 style=\"font-size:18px;font-weight:700;text-transform:uppercase;\
         letter-spacing:0.025em;border-bottom:1px solid #000;padding-bottom:4px;\
         margin-bottom:16px;\">{label}</h2>"
    )
}

pub fn body(doc: &Document) -> String {
    let mut html = String::with_capacity(4096);

    // Centered header
    html.push_str("<div style=\"text-align:center;padding:32px 32px 0;\">");
    html.push_str(&format!(
        "<h1 style=\"font-size:32px;font-weight:700;letter-spacing:0.05em;margin-bottom:12px;\
         font-family:'Space Grotesk',sans-serif;\">{}</h1>",
        escape_html(&display_name(&doc.personal))
    ));
    if has_contact(&doc.personal) {
        let joined = contact_items(&doc.personal)
            .iter()
            .map(|(_, v)| escape_html(v))
            .collect::<Vec<_>>()
            .join(" &middot; ");
        html.push_str(&format!(
            "<div style=\"font-size:14px;margin-bottom:16px;\">{joined}</div>"
        ));
    }
    html.push_str("</div>");

    let photo = photo_img(doc, "border:2px solid #000;");
    if !photo.is_empty() {
        html.push_str(&format!(
            "<div style=\"text-align:center;margin-bottom:24px;\">{photo}</div>"
        ));
    }

    html.push_str("<div style=\"padding:0 32px;\">");

    if !doc.personal.summary.is_empty() {
        html.push_str("<div style=\"margin-bottom:24px;\">");
        html.push_str(&heading("Professional Summary"));
        html.push_str(&format!(
            "<p style=\"font-size:14px;line-height:1.6;\">{}</p>",
            escape_html(&doc.personal.summary)
        ));
        html.push_str("</div>");
    }

    if !doc.experience.is_empty() {
        html.push_str("<div style=\"margin-bottom:24px;\">");
        html.push_str(&heading("Work Experience"));
        for exp in &doc.experience {
            html.push_str(&format!(
                "<div style=\"margin-bottom:16px;\">\
                 <div style=\"display:flex;justify-content:space-between;align-items:baseline;\
                 margin-bottom:4px;\">\
                 <h3 style=\"font-size:16px;font-weight:600;\">{role}</h3>\
                 <span style=\"font-size:12px;font-style:italic;\">{dates}</span></div>\
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
                "<div style=\"margin-bottom:12px;\">\
                 <div style=\"display:flex;justify-content:space-between;align-items:baseline;\
                 margin-bottom:4px;\">\
                 <h3 style=\"font-size:16px;font-weight:600;\">{title}</h3>\
                 <span style=\"font-size:12px;font-style:italic;\">{dates}</span></div>\
                 <p style=\"font-size:14px;\">{institution}</p></div>",
                title = escape_html(&degree_line(&edu.degree, &edu.field, ", ")),
                dates = escape_html(&date_range(&edu.start_date, &edu.end_date, edu.current)),
                institution = escape_html(&edu.institution),
            ));
        }
        html.push_str("</div>");
    }

    if !doc.skills.is_empty() {
        html.push_str("<div style=\"margin-bottom:24px;\">");
        html.push_str(&heading("Skills"));
        html.push_str("<div style=\"font-size:14px;\">");
        let last = doc.skills.len() - 1;
        for (i, skill) in doc.skills.iter().enumerate() {
            let sep = if i < last { " &bull; " } else { "" };
            html.push_str(&format!(
                "<span style=\"margin-right:8px;\">{}{sep}</span>",
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
