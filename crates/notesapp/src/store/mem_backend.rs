use super::backend::{decode, encode, StorageBackend};
use crate::error::{NotesError, Result};
use crate::model::Note;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::Duration;

const LOCATION: &str = "memory://notes";

/// In-memory storage backend for testing.
///
/// Keeps the collection as encoded JSON, so loads and saves go through the
/// same codec as the filesystem backend. `None` means nothing was ever saved.
/// Uses a `Mutex` rather than `RefCell` because the store is shared across
/// threads.
#[derive(Default)]
pub struct MemBackend {
    content: Mutex<Option<String>>,
    simulate_write_error: AtomicBool,
    save_delay_ms: AtomicU64,
    saves: AtomicUsize,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw stored content, e.g. to exercise corrupt-store handling.
    pub fn with_content(raw: &str) -> Self {
        let backend = Self::default();
        *backend.lock_content() = Some(raw.to_string());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    /// Sleep between reading the old state and publishing the new one.
    /// Widens the window in which an unsynchronized writer would lose updates.
    pub fn set_save_delay(&self, delay: Duration) {
        self.save_delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// The stored content exactly as last saved.
    pub fn raw(&self) -> Option<String> {
        self.lock_content().clone()
    }

    fn lock_content(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.content.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn location_path() -> PathBuf {
        PathBuf::from(LOCATION)
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Vec<Note>> {
        match self.lock_content().as_deref() {
            Some(raw) => decode(Path::new(LOCATION), raw),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(NotesError::storage(
                Self::location_path(),
                io::Error::other("Simulated write error"),
            ));
        }
        let encoded = encode(Path::new(LOCATION), notes)?;

        let delay = self.save_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            thread::sleep(Duration::from_millis(delay));
        }

        *self.lock_content() = Some(encoded);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn location(&self) -> String {
        LOCATION.to_string()
    }
}
