//! Quire Core Library
//!
//! Page addressing for books made of a cover followed by content pages, and
//! the two state machines built on it: the page editor used while authoring a
//! book and the reader that turns through it one spread at a time. Storage and
//! import helpers around them live here as well.

pub mod color;
pub mod editor;
pub mod error;
pub mod import;
pub mod reader;
pub mod spread;
pub mod storage;
pub mod types;

pub use editor::{EditorSession, PageDraft};
pub use error::{
    EditorError, ImportError, LibraryError, QuireError, ReaderError, Result, StorageError,
};
pub use import::{normalize_import, ImportedBook};
pub use reader::{Direction, ReaderSession, ReaderView, Visible};
pub use types::{Book, Page, PersistedLibrary, Theme};
