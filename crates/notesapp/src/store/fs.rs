use super::fs_backend::FsBackend;
use super::note_store::NoteStore;
use std::path::{Path, PathBuf};

/// Production store: notes in a single JSON file.
pub type FileStore = NoteStore<FsBackend>;

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        NoteStore::with_backend(FsBackend::new(path))
    }

    pub fn path(&self) -> &Path {
        self.backend.path()
    }
}
