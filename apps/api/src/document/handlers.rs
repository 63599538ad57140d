//! Session and document-mutation endpoints, bound 1:1 to the Document
//! Model operations.
//!
//! Only an unknown session is an error. Unknown entry ids and out-of-range
//! skill indices are silent no-ops: the handler still answers 200 with the
//! (unchanged) document, matching the editor's total-operation contract.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::document::models::{
    Document, EducationPatch, ExperiencePatch, PersonalPatch,
};
use crate::errors::AppError;
use crate::photo;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SessionCreated {
    pub session_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub document: Document,
}

#[derive(Serialize)]
pub struct EntryCreated {
    pub entry_id: Uuid,
    pub document: Document,
}

#[derive(Deserialize)]
pub struct SkillValue {
    pub value: String,
}

#[derive(Deserialize)]
pub struct DeclarationRequest {
    pub enabled: bool,
    pub text: String,
}

/// Applies `f` to the session's document and answers with the new state.
async fn mutate<T>(
    state: &AppState,
    id: Uuid,
    f: impl FnOnce(&mut Document) -> T,
) -> Result<(T, Document), AppError> {
    state
        .sessions
        .update(id, |doc| {
            let out = f(doc);
            (out, doc.clone())
        })
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionCreated>) {
    let (session_id, session) = state.sessions.create().await;
    info!("editing session {session_id} started");
    (
        StatusCode::CREATED,
        Json(SessionCreated {
            session_id,
            created_at: session.created_at,
            document: session.document,
        }),
    )
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Document>, AppError> {
    state
        .sessions
        .document(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {id} not found")))
    }
}

/// POST /api/v1/sessions/:id/reset
pub async fn handle_reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Document>, AppError> {
    let (_, doc) = mutate(&state, id, |doc| doc.reset()).await?;
    Ok(Json(doc))
}

/// PATCH /api/v1/sessions/:id/personal
pub async fn handle_patch_personal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<PersonalPatch>,
) -> Result<Json<Document>, AppError> {
    let (_, doc) = mutate(&state, id, |doc| doc.apply_personal(patch)).await?;
    Ok(Json(doc))
}

/// POST /api/v1/sessions/:id/photo
///
/// Reads the uploaded file, encodes it, then performs one bounded `photo`
/// update. Concurrent uploads serialize at the store's write lock, so the
/// last completion wins.
pub async fn handle_upload_photo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<Document>, AppError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Photo(e.to_string()))?
        .ok_or_else(|| AppError::Validation("photo upload requires a file part".to_string()))?;

    let content_type = field.content_type().map(str::to_string);
    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::Photo(e.to_string()))?;
    let data_uri = photo::to_data_uri(content_type.as_deref(), &bytes);

    let (_, doc) = mutate(&state, id, |doc| {
        doc.apply_personal(PersonalPatch::Photo(data_uri))
    })
    .await?;
    Ok(Json(doc))
}

/// DELETE /api/v1/sessions/:id/photo
pub async fn handle_remove_photo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Document>, AppError> {
    let (_, doc) = mutate(&state, id, |doc| {
        doc.apply_personal(PersonalPatch::Photo(String::new()))
    })
    .await?;
    Ok(Json(doc))
}

/// POST /api/v1/sessions/:id/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<EntryCreated>), AppError> {
    let (entry_id, document) = mutate(&state, id, |doc| doc.add_experience()).await?;
    Ok((
        StatusCode::CREATED,
        Json(EntryCreated { entry_id, document }),
    ))
}

/// PATCH /api/v1/sessions/:id/experience/:entry_id
pub async fn handle_update_experience(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
    Json(patch): Json<ExperiencePatch>,
) -> Result<Json<Document>, AppError> {
    let (_, doc) = mutate(&state, id, |doc| doc.update_experience(entry_id, patch)).await?;
    Ok(Json(doc))
}

/// DELETE /api/v1/sessions/:id/experience/:entry_id
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Document>, AppError> {
    let (_, doc) = mutate(&state, id, |doc| doc.remove_experience(entry_id)).await?;
    Ok(Json(doc))
}

/// POST /api/v1/sessions/:id/education
pub async fn handle_add_education(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<EntryCreated>), AppError> {
    let (entry_id, document) = mutate(&state, id, |doc| doc.add_education()).await?;
    Ok((
        StatusCode::CREATED,
        Json(EntryCreated { entry_id, document }),
    ))
}

/// PATCH /api/v1/sessions/:id/education/:entry_id
pub async fn handle_update_education(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
    Json(patch): Json<EducationPatch>,
) -> Result<Json<Document>, AppError> {
    let (_, doc) = mutate(&state, id, |doc| doc.update_education(entry_id, patch)).await?;
    Ok(Json(doc))
}

/// DELETE /api/v1/sessions/:id/education/:entry_id
pub async fn handle_remove_education(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Document>, AppError> {
    let (_, doc) = mutate(&state, id, |doc| doc.remove_education(entry_id)).await?;
    Ok(Json(doc))
}

/// POST /api/v1/sessions/:id/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Document>, AppError> {
    let (_, doc) = mutate(&state, id, |doc| doc.add_skill()).await?;
    Ok(Json(doc))
}

/// PATCH /api/v1/sessions/:id/skills/:index
pub async fn handle_update_skill(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
    Json(req): Json<SkillValue>,
) -> Result<Json<Document>, AppError> {
    let (_, doc) = mutate(&state, id, |doc| doc.update_skill(index, req.value)).await?;
    Ok(Json(doc))
}

/// DELETE /api/v1/sessions/:id/skills/:index
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<Document>, AppError> {
    let (_, doc) = mutate(&state, id, |doc| doc.remove_skill(index)).await?;
    Ok(Json(doc))
}

/// PUT /api/v1/sessions/:id/declaration
pub async fn handle_set_declaration(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<DeclarationRequest>,
) -> Result<Json<Document>, AppError> {
    let (_, doc) = mutate(&state, id, |doc| doc.set_declaration(req.enabled, req.text)).await?;
    Ok(Json(doc))
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
    async fn test_session_lifecycle_via_handlers() {
        let state = make_state();
        let (status, Json(created)) = handle_create_session(State(state.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.document, Document::default());

        let id = created.session_id;
        let Json(doc) = handle_get_document(State(state.clone()), Path(id))
            .await
            .expect("session exists");
        assert_eq!(doc, Document::default());

        let status = handle_delete_session(State(state.clone()), Path(id))
            .await
            .expect("session exists");
        assert_eq!(status, StatusCode::NO_CONTENT);

        let err = handle_get_document(State(state), Path(id)).await;
        assert!(matches!(err, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_entry_mutation_roundtrip_via_handlers() {
        let state = make_state();
        let (_, Json(created)) = handle_create_session(State(state.clone())).await;
        let id = created.session_id;

        let (_, Json(added)) = handle_add_experience(State(state.clone()), Path(id))
            .await
            .expect("session exists");
        assert_eq!(added.document.experience.len(), 1);

        let Json(doc) = handle_update_experience(
            State(state.clone()),
            Path((id, added.entry_id)),
            Json(ExperiencePatch::Role("Engineer".to_string())),
        )
        .await
        .expect("session exists");
        assert_eq!(doc.experience[0].role, "Engineer");

        let Json(doc) = handle_remove_experience(State(state.clone()), Path((id, added.entry_id)))
            .await
            .expect("session exists");
        assert!(doc.experience.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_entry_id_is_noop_not_error() {
        let state = make_state();
        let (_, Json(created)) = handle_create_session(State(state.clone())).await;
        let id = created.session_id;

        let result = handle_update_experience(
            State(state),
            Path((id, Uuid::new_v4())),
            Json(ExperiencePatch::Role("X".to_string())),
        )
        .await;

        let Json(doc) = result.expect("unknown entry id must not be an error");
        assert!(doc.experience.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let state = make_state();
        let err = handle_add_skill(State(state), Path(Uuid::new_v4())).await;
        assert!(matches!(err, Err(AppError::NotFound(_))));
    }
}
