//! Axum route handlers for the notes API.

use super::draft::DraftBody;
use super::error::ApiError;
use axum::extract::{Path, State};
use axum::response::Json;
use notesapp::error::Result as StoreResult;
use notesapp::model::{DeleteOutcome, Note};
use notesapp::store::DataStore;
use serde::Serialize;
use std::sync::Arc;

pub struct AppState {
    pub store: Arc<dyn DataStore>,
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Run a store call on the blocking pool. The call always runs to completion,
/// even if the client goes away.
async fn blocking<T, F>(state: &AppState, context: &'static str, op: F) -> Result<T, ApiError>
where
    F: FnOnce(&dyn DataStore) -> StoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    let store = Arc::clone(&state.store);
    match tokio::task::spawn_blocking(move || op(store.as_ref())).await {
        Ok(result) => result.map_err(|e| ApiError::store(context, e)),
        Err(e) => Err(ApiError::Internal(format!("{}: {}", context, e))),
    }
}

// GET /api/notes
pub async fn list_notes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = blocking(&state, "Failed to read notes", |store| store.list_notes()).await?;
    Ok(Json(notes))
}

// POST /api/notes
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    DraftBody(draft): DraftBody,
) -> Result<Json<Note>, ApiError> {
    let note = blocking(&state, "Failed to save note", move |store| {
        store.create_note(draft)
    })
    .await?;
    log::info!("Created note {}", note.id);
    Ok(Json(note))
}

// DELETE /api/notes/:id
pub async fn delete_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    let target = id.clone();
    let outcome = blocking(&state, "Failed to delete note", move |store| {
        store.delete_note(&target)
    })
    .await?;
    match outcome {
        DeleteOutcome::Removed => log::info!("Deleted note {}", id),
        DeleteOutcome::NotFound => log::debug!("Delete for unknown note {}", id),
    }
    Ok(Json(MessageBody {
        message: "Note deleted",
    }))
}
