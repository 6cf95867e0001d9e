//! Error types for Quire Core

use thiserror::Error;

/// Result type alias using QuireError
pub type Result<T> = std::result::Result<T, QuireError>;

/// Top-level error type for all Quire operations
#[derive(Debug, Error)]
pub enum QuireError {
    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),

    #[error("Reader error: {0}")]
    Reader(#[from] ReaderError),

    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    #[error("Library error: {0}")]
    Library(#[from] LibraryError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the page editor.
///
/// Every variant leaves the editor session as it was before the call, apart
/// from the draft commit that the failing transition performed first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("The cover page cannot be deleted")]
    ProtectedPage,

    #[error("A book needs at least {minimum} page(s)")]
    MinimumPages { minimum: usize },

    #[error("A book needs a title")]
    EmptyTitle,

    #[error("The cover needs content or an image")]
    EmptyCover,

    #[error("Page {index} does not exist (book has {len} pages)")]
    PageOutOfRange { index: usize, len: usize },
}

/// Errors raised by reader navigation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReaderError {
    #[error("Page {index} does not exist (book has {len} pages)")]
    PageOutOfRange { index: usize, len: usize },
}

/// Errors raised while normalizing an imported book payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("Invalid import format: {0}")]
    InvalidFormat(String),
}

/// Errors raised by library document operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("Invalid library backup: {0}")]
    InvalidBackup(String),
}

/// Errors that occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Backend error: {0}")]
    BackendError(String),
}
