//! Catalog, preview, and export endpoints.

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::Html;
use axum::Json;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::render::{catalog, render, Template, TemplateInfo};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct TemplateQuery {
    pub template: Option<String>,
}

impl TemplateQuery {
    /// Unknown or missing identifiers fall back to Modern.
    pub fn resolve(&self) -> Template {
        Template::parse(self.template.as_deref().unwrap_or_default())
    }
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateInfo>> {
    Json(catalog())
}

/// GET /api/v1/sessions/:id/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TemplateQuery>,
) -> Result<Html<String>, AppError> {
    let doc = state
        .sessions
        .document(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    Ok(Html(render(&doc, query.resolve()).html))
}

/// GET /api/v1/sessions/:id/export
///
/// Serves the complete printable page with the download filename
/// `{first}_{last}_CV`. PDF rasterization stays with the client's print
/// collaborator.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TemplateQuery>,
) -> Result<(HeaderMap, Html<String>), AppError> {
    let doc = state
        .sessions
        .document(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    let layout = render(&doc, query.resolve());

    let disposition = format!("attachment; filename=\"{}.html\"", layout.title);
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition).map_err(|_| {
            AppError::Validation(
                "export filename contains characters not allowed in a header".to_string(),
            )
        })?,
    );

    info!("session {id} exported as {:?} ({})", layout.template, layout.title);
    Ok((headers, Html(layout.html)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_query_resolution() {
        let none = TemplateQuery { template: None };
        assert_eq!(none.resolve(), Template::Modern);

        let known = TemplateQuery {
            template: Some("gengar".to_string()),
        };
        assert_eq!(known.resolve(), Template::Gengar);

        let unknown = TemplateQuery {
            template: Some("no-such-style".to_string()),
        };
        assert_eq!(unknown.resolve(), Template::Modern);
    }
}
