//! Import command implementation

use super::{load_library, save_library};
use anyhow::{Context, Result};
use quire_core::storage::{read_import_file, LibraryStore};
use quire_core::EditorSession;
use std::path::Path;

/// Import a `{ title, pages }` JSON file as a new book
pub async fn import(store: &dyn LibraryStore, input: &Path, title: Option<&str>) -> Result<()> {
    let payload = read_import_file(input)
        .await
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let mut session = EditorSession::new();
    session
        .load_from_import(&payload)
        .with_context(|| format!("Failed to import {}", input.display()))?;
    if let Some(title) = title {
        session.set_title(title);
    }

    let book = session
        .save(session.current_draft())
        .context("Imported book is not valid")?;

    let mut library = load_library(store).await?;
    println!(
        "Imported book {}: {} ({} pages)",
        book.id,
        book.title,
        book.page_count()
    );
    library.upsert_book(book);
    save_library(store, &library).await
}
