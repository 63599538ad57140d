pub mod health;
pub mod pages;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post, put},
    Router,
};

use crate::document::handlers as document;
use crate::render::handlers as render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_photo_bytes = state.config.max_photo_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Views
        .route("/", get(pages::handle_home))
        .route("/builder", get(pages::handle_builder_start))
        .route("/builder/:id", get(pages::handle_builder_view))
        // Template catalog
        .route("/api/v1/templates", get(render::handle_list_templates))
        // Sessions
        .route("/api/v1/sessions", post(document::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(document::handle_get_document).delete(document::handle_delete_session),
        )
        .route("/api/v1/sessions/:id/reset", post(document::handle_reset))
        // Personal info & photo
        .route(
            "/api/v1/sessions/:id/personal",
            patch(document::handle_patch_personal),
        )
        .route(
            "/api/v1/sessions/:id/photo",
            post(document::handle_upload_photo).delete(document::handle_remove_photo),
        )
        // Experience
        .route(
            "/api/v1/sessions/:id/experience",
            post(document::handle_add_experience),
        )
        .route(
            "/api/v1/sessions/:id/experience/:entry_id",
            patch(document::handle_update_experience).delete(document::handle_remove_experience),
        )
        // Education
        .route(
            "/api/v1/sessions/:id/education",
            post(document::handle_add_education),
        )
        .route(
            "/api/v1/sessions/:id/education/:entry_id",
            patch(document::handle_update_education).delete(document::handle_remove_education),
        )
        // Skills
        .route("/api/v1/sessions/:id/skills", post(document::handle_add_skill))
        .route(
            "/api/v1/sessions/:id/skills/:index",
            patch(document::handle_update_skill).delete(document::handle_remove_skill),
        )
        // Declaration
        .route(
            "/api/v1/sessions/:id/declaration",
            put(document::handle_set_declaration),
        )
        // Rendered output
        .route(
            "/api/v1/sessions/:id/preview",
            get(render::handle_preview),
        )
        .route("/api/v1/sessions/:id/export", get(render::handle_export))
        .layer(DefaultBodyLimit::max(max_photo_bytes))
        .with_state(state)
}
