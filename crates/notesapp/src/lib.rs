//! # notesapp
//!
//! A note store persisted as a single JSON file, safe to share between
//! concurrent callers.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Callers (the `notes` HTTP server, tests)                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  DataStore: list / create / delete
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  NoteStore (store/note_store.rs)                            │
//! │  - assigns ids (id.rs)                                      │
//! │  - one writer at a time across load → mutate → save         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  StorageBackend: load / save
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  FsBackend (store/fs_backend.rs)                            │
//! │  - whole collection as one JSON array                       │
//! │  - atomic replace: tmp file, fsync, rename                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is synchronous and UI agnostic. Async callers should run
//! store operations on a blocking thread.
//!
//! ## Example
//!
//! ```no_run
//! use notesapp::model::NoteDraft;
//! use notesapp::store::fs::FileStore;
//! use notesapp::store::DataStore;
//!
//! let store = FileStore::new("db/db.json");
//! let note = store.create_note(NoteDraft::new("Groceries", "eggs, milk"))?;
//! assert!(store.list_notes()?.contains(&note));
//! store.delete_note(&note.id)?;
//! # Ok::<(), notesapp::error::NotesError>(())
//! ```

pub mod config;
pub mod error;
pub mod id;
pub mod model;
pub mod store;

#[cfg(test)]
pub mod test_utils;
