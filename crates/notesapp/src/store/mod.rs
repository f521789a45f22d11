//! # Storage Layer
//!
//! The whole note collection is one JSON document. This module turns that
//! document into a store that is safe to share between concurrent requests.
//!
//! ## Layering
//!
//! - [`backend::StorageBackend`]: raw I/O of the full collection (`load`/`save`).
//!   Knows nothing about ids or locking.
//! - [`note_store::NoteStore`]: the [`DataStore`] implementation. Assigns ids
//!   and serializes every read-modify-write cycle.
//!
//! ## Why a Writer Lock
//!
//! `create` and `delete` both load the collection, change it, and save it back.
//! Two unsynchronized cycles can both load the same starting state, and the
//! second save then erases the first one's change (a *lost update*).
//! `NoteStore` holds one mutex across the entire cycle, so each mutation sees
//! every mutation before it.
//!
//! `list` does not take the lock. Backends replace content atomically
//! (temp file + rename on disk), so a reader never observes a half-written
//! collection.
//!
//! ## Failure Semantics
//!
//! - Missing file: empty collection. The first save creates it.
//! - Undecodable file: `CorruptStore`. Never treated as empty; the next save
//!   would otherwise wipe whatever was there.
//! - I/O failure: `StorageUnavailable`. No retries here; a failed save leaves
//!   the previous file untouched.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production, over [`fs_backend::FsBackend`].
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! db/
//! ├── db.json                  # [{"id": ..., "title": ..., "text": ...}, ...]
//! └── .db.json-{uuid}.tmp      # transient, only during a save
//! ```

use crate::error::Result;
use crate::model::{DeleteOutcome, Note, NoteDraft};

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod note_store;

/// Abstract interface for note storage.
///
/// Implementations synchronize internally, so every method takes `&self` and
/// a store can be shared behind an `Arc`.
pub trait DataStore: Send + Sync {
    /// All notes, in insertion order.
    fn list_notes(&self) -> Result<Vec<Note>>;

    /// Assign a fresh id to `draft`, append it and persist.
    /// Returns only after the note is durably recorded.
    fn create_note(&self, draft: NoteDraft) -> Result<Note>;

    /// Remove the note with `id`. Deleting an unknown id succeeds with
    /// [`DeleteOutcome::NotFound`] and writes nothing.
    fn delete_note(&self, id: &str) -> Result<DeleteOutcome>;
}
