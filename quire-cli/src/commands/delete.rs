//! Delete command implementation

use super::{load_library, save_library};
use anyhow::{Context, Result};
use quire_core::storage::LibraryStore;

/// Remove a book from the library
pub async fn delete(store: &dyn LibraryStore, id: &str) -> Result<()> {
    let mut library = load_library(store).await?;
    let book = library
        .remove_book(id)
        .with_context(|| format!("No book with id '{}' in the library", id))?;
    save_library(store, &library).await?;
    println!("Deleted book {}: {}", book.id, book.title);
    Ok(())
}
