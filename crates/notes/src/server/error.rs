//! HTTP error mapping for the notes API.

use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use notesapp::error::NotesError;
use serde::Serialize;

/// Errors returned by route handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A store operation failed. Only `context` reaches the client.
    #[error("{context}")]
    Store {
        context: &'static str,
        #[source]
        source: NotesError,
    },

    /// The request body could not be read as a note draft.
    #[error("Invalid request body: {0}")]
    BadRequest(String),

    /// A blocking store task did not complete.
    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn store(context: &'static str, source: NotesError) -> Self {
        ApiError::Store { context, source }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            Self::Store { context, source } => log::error!("{}: {}", context, source),
            Self::Internal(message) => log::error!("{}", message),
            Self::BadRequest(message) => log::debug!("Rejected request: {}", message),
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
