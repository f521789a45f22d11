//! Request body extraction for `POST /api/notes`.
//!
//! Clients have always been able to send a note as JSON or as an HTML form.
//! A body with no content type (or one that is neither) has never been read
//! at all: it creates an empty note rather than failing.

use super::error::ApiError;
use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{Form, FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use notesapp::model::NoteDraft;

pub struct DraftBody(pub NoteDraft);

enum BodyKind {
    Json,
    Form,
    Ignored,
}

fn body_kind(req: &Request) -> BodyKind {
    let Some(content_type) = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return BodyKind::Ignored;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    if mime == "application/json" || mime.ends_with("+json") {
        BodyKind::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Ignored
    }
}

#[async_trait]
impl<S> FromRequest<S> for DraftBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Form => {
                let Form(draft) = Form::<NoteDraft>::from_request(req, state).await?;
                Ok(DraftBody(draft))
            }
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::BadRequest(e.body_text()))?;
                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Ok(DraftBody(NoteDraft::default()));
                }
                let draft = serde_json::from_slice(&bytes)
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                Ok(DraftBody(draft))
            }
            BodyKind::Ignored => {
                log::debug!("Ignoring body without a JSON or form content type");
                Ok(DraftBody(NoteDraft::default()))
            }
        }
    }
}
