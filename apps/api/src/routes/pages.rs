//! The two top-level views: landing page and builder.
//!
//! Navigation carries no state beyond the route itself — every visit to
//! `/builder` starts a fresh session with the default empty document.

use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::render::catalog;
use crate::render::handlers::TemplateQuery;
use crate::state::AppState;

const PAGE_FONT: &str = "font-family:'Inter',sans-serif;";

/// GET /
pub async fn handle_home() -> Html<String> {
    let mut html = String::with_capacity(2048);
    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Europin CV Maker</title>\n</head>\n",
    );
    html.push_str(&format!(
        "<body style=\"{PAGE_FONT}background:#f6f7f6;margin:0;\">\
         <div style=\"max-width:720px;margin:0 auto;padding:64px 24px;\">"
    ));
    html.push_str(
        "<h1 style=\"font-size:40px;font-family:'Space Grotesk',sans-serif;\
         margin-bottom:16px;\">Europin CV Maker</h1>\
         <p style=\"font-size:18px;color:#374151;margin-bottom:32px;\">\
         Create professional, ATS-friendly CVs in minutes. Free online resume \
         builder with multiple templates.</p>",
    );
    html.push_str("<ul style=\"font-size:16px;color:#374151;margin-bottom:32px;line-height:2;\">");
    for feature in [
        "Multiple professional templates",
        "ATS-friendly resume formats",
        "Real-time preview",
        "PDF export",
        "No registration required",
    ] {
        html.push_str(&format!("<li>{feature}</li>"));
    }
    html.push_str("</ul>");
    html.push_str(
        "<a href=\"/builder\" style=\"display:inline-block;background:#4169E1;color:#fff;\
         padding:12px 24px;border-radius:8px;text-decoration:none;font-weight:600;\">\
         Create Your CV</a>",
    );
    html.push_str("</div></body>\n</html>\n");
    Html(html)
}

/// GET /builder
///
/// Starts a fresh editing session and lands on its builder view.
pub async fn handle_builder_start(State(state): State<AppState>) -> Redirect {
    let (id, _) = state.sessions.create().await;
    info!("builder opened with fresh session {id}");
    Redirect::to(&format!("/builder/{id}"))
}

/// GET /builder/:id
///
/// The builder view: chrome with the style picker and export link around the
/// rendered page. Field editing goes through the JSON session API.
pub async fn handle_builder_view(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TemplateQuery>,
) -> Result<Html<String>, AppError> {
    if state.sessions.document(id).await.is_none() {
        return Err(AppError::NotFound(format!("Session {id} not found")));
    }
    let template = query.resolve();

    let mut html = String::with_capacity(4096);
    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Europin Builder</title>\n</head>\n",
    );
    html.push_str(&format!(
        "<body style=\"{PAGE_FONT}background:#f6f7f6;margin:0;\">\
         <header style=\"background:#fff;border-bottom:1px solid #e5e7eb;padding:12px 24px;\
         display:flex;align-items:center;gap:16px;flex-wrap:wrap;\">\
         <a href=\"/\" style=\"color:#374151;text-decoration:none;\">&larr; Back</a>\
         <strong style=\"font-family:'Space Grotesk',sans-serif;\">Europin</strong>"
    ));
    for entry in catalog() {
        let weight = if entry.id == template.id() { "700" } else { "400" };
        html.push_str(&format!(
            "<a href=\"/builder/{id}?template={tid}\" title=\"{desc}\" \
             style=\"color:{color};font-weight:{weight};text-decoration:none;\">{name}</a>",
            tid = entry.id,
            desc = entry.description,
            color = entry.color,
            name = entry.name,
        ));
    }
    html.push_str(&format!(
        "<a href=\"/api/v1/sessions/{id}/export?template={tid}\" \
         style=\"margin-left:auto;background:#4169E1;color:#fff;padding:8px 16px;\
         border-radius:8px;text-decoration:none;\">Download</a></header>",
        tid = template.id(),
    ));
    html.push_str(&format!(
        "<main style=\"padding:24px;\">\
         <iframe src=\"/api/v1/sessions/{id}/preview?template={tid}\" \
         style=\"display:block;margin:0 auto;width:210mm;height:297mm;border:none;\
         box-shadow:0 1px 3px rgba(0,0,0,0.2);background:#fff;\" \
         title=\"CV preview\"></iframe></main>",
        tid = template.id(),
    ));
    html.push_str("</body>\n</html>\n");
    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::session::SessionStore;

    fn make_state() -> AppState {
        AppState {
            sessions: SessionStore::new(),
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                max_photo_bytes: 1024 * 1024,
            },
        }
    }

    #[tokio::test]
    async fn test_home_links_to_builder() {
        let Html(body) = handle_home().await;
        assert!(body.contains("href=\"/builder\""));
        assert!(body.contains("Europin CV Maker"));
    }

    #[tokio::test]
    async fn test_builder_view_lists_all_styles() {
        let state = make_state();
        let (id, _) = state.sessions.create().await;

        let Html(body) = handle_builder_view(
            State(state),
            Path(id),
            Query(TemplateQuery::default()),
        )
        .await
        .expect("session exists");

        for name in ["Modern", "Classic", "ATS-Friendly", "Onyx", "Pikachu", "Glalie", "Gengar", "Leafish"] {
            assert!(body.contains(name), "missing style link {name}");
        }
        assert!(body.contains(&format!("/api/v1/sessions/{id}/preview?template=modern")));
    }

    #[tokio::test]
    async fn test_builder_view_unknown_session() {
        let state = make_state();
        let err = handle_builder_view(
            State(state),
            Path(Uuid::new_v4()),
            Query(TemplateQuery::default()),
        )
        .await;
        assert!(matches!(err, Err(AppError::NotFound(_))));
    }
}
