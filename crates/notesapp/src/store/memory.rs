use super::mem_backend::MemBackend;
use super::note_store::NoteStore;

pub type InMemoryStore = NoteStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        NoteStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Note, NoteDraft};
    use crate::store::DataStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        pub notes: Vec<Note>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                notes: Vec::new(),
            }
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let draft = NoteDraft::new(format!("Note {}", i + 1), format!("Text {}", i + 1));
                let note = self.store.create_note(draft).unwrap();
                self.notes.push(note);
            }
            self
        }

        pub fn with_note(mut self, title: &str, text: &str) -> Self {
            let note = self.store.create_note(NoteDraft::new(title, text)).unwrap();
            self.notes.push(note);
            self
        }
    }

}
