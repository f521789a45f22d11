use super::backend::StorageBackend;
use super::DataStore;
use crate::error::{NotesError, Result};
use crate::id::{IdGenerator, UuidGenerator};
use crate::model::{DeleteOutcome, Note, NoteDraft};
use log::{debug, warn};
use std::sync::{Mutex, MutexGuard, PoisonError};

pub struct NoteStore<B: StorageBackend, G: IdGenerator = UuidGenerator> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    ids: G,
    /// Held for the whole load-mutate-save cycle of every mutation.
    writer: Mutex<()>,
}

impl<B: StorageBackend> NoteStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self::with_parts(backend, UuidGenerator)
    }
}

impl<B: StorageBackend, G: IdGenerator> NoteStore<B, G> {
    pub fn with_parts(backend: B, ids: G) -> Self {
        Self {
            backend,
            ids,
            writer: Mutex::new(()),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    // The guard protects no data, and the file is only ever replaced
    // atomically, so a panic in an earlier cycle leaves nothing to repair.
    fn lock_writer(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, notes: &[Note]) -> Result<()> {
        self.backend.save(notes).map_err(|e| {
            warn!("Failed to save notes to {}: {}", self.backend.location(), e);
            e
        })
    }
}

impl<B: StorageBackend, G: IdGenerator> DataStore for NoteStore<B, G> {
    fn list_notes(&self) -> Result<Vec<Note>> {
        // No writer lock: saves are atomic replaces, so this sees a whole
        // collection from before or after any concurrent mutation.
        self.backend.load()
    }

    fn create_note(&self, draft: NoteDraft) -> Result<Note> {
        let _writer = self.lock_writer();
        let mut notes = self.backend.load()?;

        let id = self.ids.next_id();
        if id.is_empty() {
            return Err(NotesError::InvalidId);
        }
        if notes.iter().any(|n| n.id == id) {
            return Err(NotesError::DuplicateId(id));
        }

        let note = Note::from_draft(id, draft);
        notes.push(note.clone());
        self.persist(&notes)?;

        debug!(
            "Created note {} ({} total) in {}",
            note.id,
            notes.len(),
            self.backend.location()
        );
        Ok(note)
    }

    fn delete_note(&self, id: &str) -> Result<DeleteOutcome> {
        let _writer = self.lock_writer();
        let mut notes = self.backend.load()?;

        let before = notes.len();
        notes.retain(|n| n.id != id);
        if notes.len() == before {
            debug!("Delete of unknown note {} is a no-op", id);
            return Ok(DeleteOutcome::NotFound);
        }

        self.persist(&notes)?;
        debug!("Deleted note {} from {}", id, self.backend.location());
        Ok(DeleteOutcome::Removed)
    }
}
