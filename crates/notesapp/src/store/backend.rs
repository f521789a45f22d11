use crate::error::{Corruption, NotesError, Result};
use crate::model::Note;
use std::collections::HashSet;
use std::io;
use std::path::Path;

/// Abstract interface for raw collection I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while NoteStore handles the "what" (id assignment, write serialization).
pub trait StorageBackend: Send + Sync {
    /// Load the whole collection.
    /// Returns an empty collection if nothing has been saved yet.
    /// Returns `CorruptStore` if stored content cannot be decoded.
    fn load(&self) -> Result<Vec<Note>>;

    /// Replace the whole collection.
    /// MUST be atomic (e.g. write to tmp then rename): a concurrent `load`
    /// sees either the previous collection or this one, never a mix.
    fn save(&self, notes: &[Note]) -> Result<()>;

    /// Where the collection lives, for log and error messages.
    fn location(&self) -> String;
}

/// Serialize a collection the way it is laid out on disk: a pretty-printed
/// JSON array, two-space indent.
pub(crate) fn encode(location: &Path, notes: &[Note]) -> Result<String> {
    serde_json::to_string_pretty(notes)
        .map_err(|e| NotesError::storage(location, io::Error::from(e)))
}

/// Decode stored content. Whitespace-only content counts as an empty
/// collection (a freshly touched file).
///
/// Content that decodes but breaks the collection invariants (an empty id,
/// two notes sharing an id) is corrupt too: serving it would let a single
/// delete remove several notes.
pub(crate) fn decode(location: &Path, content: &str) -> Result<Vec<Note>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let notes: Vec<Note> =
        serde_json::from_str(content).map_err(|e| NotesError::corrupt(location, e))?;
    validate(&notes).map_err(|e| NotesError::corrupt(location, e))?;
    Ok(notes)
}

fn validate(notes: &[Note]) -> std::result::Result<(), Corruption> {
    let mut seen = HashSet::with_capacity(notes.len());
    for (index, note) in notes.iter().enumerate() {
        if note.id.is_empty() {
            return Err(Corruption::EmptyId { index });
        }
        if !seen.insert(note.id.as_str()) {
            return Err(Corruption::DuplicateId(note.id.clone()));
        }
    }
    Ok(())
}
