//! Persistence of the library document

use crate::error::StorageError;
use crate::types::PersistedLibrary;
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Where the library document lives.
///
/// Only finalized values cross this boundary; editor and reader sessions are
/// never stored.
#[async_trait]
pub trait LibraryStore: Send + Sync {
    /// Load the library, `None` if nothing has been saved yet
    async fn load(&self) -> StorageResult<Option<PersistedLibrary>>;

    /// Replace the stored library
    async fn save(&self, library: &PersistedLibrary) -> StorageResult<()>;

    /// Load the library or start an empty one
    async fn load_or_default(&self) -> StorageResult<PersistedLibrary> {
        Ok(self.load().await?.unwrap_or_default())
    }
}

/// Library stored as a single JSON file
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl LibraryStore for JsonFileStore {
    async fn load(&self) -> StorageResult<Option<PersistedLibrary>> {
        // A missing file is an empty library, not an error
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::BackendError(e.to_string())),
        };
        serde_json::from_str(&data).map(Some).map_err(|e| {
            StorageError::BackendError(format!("{}: {}", self.path.display(), e))
        })
    }

    /// Writes to a temp file then renames to avoid partial writes
    async fn save(&self, library: &PersistedLibrary) -> StorageResult<()> {
        let data = serde_json::to_string_pretty(library)
            .map_err(|e| StorageError::BackendError(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::BackendError(e.to_string()))?;
        }

        // Same directory, so the rename stays on one filesystem
        let temp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, &data)
            .await
            .map_err(|e| StorageError::BackendError(e.to_string()))?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| StorageError::BackendError(e.to_string()))?;

        tracing::debug!(path = %self.path.display(), books = library.books.len(), "saved library");
        Ok(())
    }
}

/// In-memory library store (for testing)
#[derive(Default)]
pub struct MemoryStore {
    data: std::sync::RwLock<Option<PersistedLibrary>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LibraryStore for MemoryStore {
    async fn load(&self) -> StorageResult<Option<PersistedLibrary>> {
        self.data
            .read()
            .map(|data| data.clone())
            .map_err(|e| StorageError::BackendError(e.to_string()))
    }

    async fn save(&self, library: &PersistedLibrary) -> StorageResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| StorageError::BackendError(e.to_string()))?;
        *data = Some(library.clone());
        Ok(())
    }
}

/// Read and parse a JSON file handed over for import
pub async fn read_import_file(path: impl AsRef<Path>) -> crate::Result<Value> {
    let path = path.as_ref();
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(StorageError::NotFound(path.display().to_string()).into())
        }
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_str(&text)?)
}
