use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::store::TodoStore;
use crate::model::task::Task;

/// The fixed slot the whole collection is saved under
pub const TASKS_FILE: &str = "tasks.json";

/// Error type for store I/O operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("not a tally directory: no tally/config.toml found (run `tl init`)")]
    NotAProject,
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config.toml: {0}")]
    ConfigParseError(#[from] toml::de::Error),
    #[error("could not serialize tasks: {0}")]
    SerializeError(#[from] serde_json::Error),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Discover the tally root by walking up from the given directory,
/// looking for a `tally/` subdirectory with a config.
pub fn discover_root(start: &Path) -> Result<PathBuf, StoreError> {
    let mut current = start.to_path_buf();
    loop {
        let tally_dir = current.join("tally");
        if tally_dir.is_dir() && tally_dir.join("config.toml").exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(StoreError::NotAProject);
        }
    }
}

/// Read the saved collection from the fixed slot.
///
/// A missing file means a fresh start. An unreadable or malformed file is
/// logged to stderr and treated as empty.
pub fn read_tasks(tally_dir: &Path) -> Vec<Task> {
    let path = tally_dir.join(TASKS_FILE);
    if !path.exists() {
        return Vec::new();
    }
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!(
                "warning: could not read {}: {} (starting with an empty list)",
                path.display(),
                e
            );
            return Vec::new();
        }
    };
    match serde_json::from_str(&content) {
        Ok(tasks) => tasks,
        Err(e) => {
            eprintln!(
                "warning: could not parse {}: {} (starting with an empty list)",
                path.display(),
                e
            );
            Vec::new()
        }
    }
}

/// Load the store from the fixed slot. The result is clean (not dirty).
pub fn load_store(tally_dir: &Path) -> TodoStore {
    TodoStore::from_tasks(read_tasks(tally_dir))
}

/// Overwrite the fixed slot with the current snapshot.
pub fn write_tasks(tally_dir: &Path, tasks: &[Task]) -> Result<(), StoreError> {
    let path = tally_dir.join(TASKS_FILE);
    let content = serde_json::to_string_pretty(tasks)?;
    atomic_write(&path, content.as_bytes())?;
    Ok(())
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
