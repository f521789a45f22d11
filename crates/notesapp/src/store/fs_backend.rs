use super::backend::{decode, encode, StorageBackend};
use crate::error::{NotesError, Result};
use crate::model::Note;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem backend: the whole collection lives in one JSON file.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| NotesError::storage(dir, e))?;
        }
        Ok(())
    }

    fn tmp_path(&self, dir: &Path) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("notes");
        dir.join(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

fn write_synced(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}

// Persist the rename itself. Not every platform lets you open a directory.
#[cfg(unix)]
fn sync_dir(dir: &Path) {
    if let Err(e) = File::open(dir).and_then(|d| d.sync_all()) {
        log::debug!("directory sync skipped for {}: {}", dir.display(), e);
    }
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) {}

impl StorageBackend for FsBackend {
    fn load(&self) -> Result<Vec<Note>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(NotesError::storage(&self.path, e)),
        };
        decode(&self.path, &content)
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        let content = encode(&self.path, notes)?;
        let dir = self.parent_dir();
        self.ensure_dir(&dir)?;

        // Atomic write
        let tmp_path = self.tmp_path(&dir);
        let written = write_synced(&tmp_path, content.as_bytes())
            .and_then(|_| fs::rename(&tmp_path, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(NotesError::storage(&self.path, e));
        }
        sync_dir(&dir);

        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
