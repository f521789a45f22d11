//! # Domain Model
//!
//! A [`Note`] is the unit of storage and transfer: an `id` assigned by the
//! store plus a free-form `title` and `text`. A [`NoteDraft`] is what a client
//! submits to create one, before an id exists.
//!
//! ## Shape Normalization
//!
//! Both types carry exactly the fields listed above. Decoding is lenient in two
//! ways, and strict in one:
//!
//! - **Absent fields** decode as empty strings. A `POST` with `{}` creates a
//!   note with an empty title and text.
//! - **Unknown fields** (including a client-supplied `id` on a draft) are
//!   dropped. They never reach the backing file.
//! - **Wrong types** (e.g. `"title": 42`) are a decode error.
//!
//! Because [`NoteDraft`] has no `id` field at all, there is no code path by
//! which a caller can choose the identity of a note.
//!
//! ## Files From Older Deployments
//!
//! Earlier versions of the service stored whatever JSON a client posted.
//! Stored notes are therefore read more leniently than drafts: a `title` or
//! `text` that is a number or boolean is kept as its text form, and `null`
//! reads as empty. Arrays and objects in those fields are still rejected.
//!
//! A stored note without an `id` (e.g. a hand-written seed file of
//! `[{"title": ..., "text": ...}]`) is **not** repaired. Inventing ids while
//! loading would hand out a different id on every read until the next save,
//! so such a file is reported as `CorruptStore` and the server will not start
//! on it. Add ids to the file (any unique non-empty strings) to migrate it.

use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    #[serde(default, deserialize_with = "stored_text")]
    pub title: String,
    #[serde(default, deserialize_with = "stored_text")]
    pub text: String,
}

fn stored_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected text, found {}", other))),
    }
}

impl Note {
    pub fn from_draft(id: String, draft: NoteDraft) -> Self {
        Self {
            id,
            title: draft.title,
            text: draft.text,
        }
    }
}

/// Client-supplied content for a new note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Result of a delete. Both variants are successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed,
    NotFound,
}
