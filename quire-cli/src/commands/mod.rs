//! CLI command implementations

mod delete;
mod edit;
mod import;
mod library;
mod list;
mod new;
mod read;

pub use delete::delete;
pub use edit::{edit, BookEdits};
pub use import::import;
pub use library::{export, profile, restore, theme};
pub use list::{list, show};
pub use new::{new_book, NewBook};
pub use read::read;

use anyhow::{Context, Result};
use quire_core::storage::LibraryStore;
use quire_core::{Book, PersistedLibrary};

/// Load the library, treating a missing file as an empty library
pub(crate) async fn load_library(store: &dyn LibraryStore) -> Result<PersistedLibrary> {
    store
        .load_or_default()
        .await
        .context("Failed to load library")
}

pub(crate) async fn save_library(store: &dyn LibraryStore, library: &PersistedLibrary) -> Result<()> {
    store.save(library).await.context("Failed to save library")
}

/// Find a book by id or fail with a readable message
pub(crate) fn find_book<'a>(library: &'a PersistedLibrary, id: &str) -> Result<&'a Book> {
    library
        .book(id)
        .with_context(|| format!("No book with id '{}' in the library", id))
}
