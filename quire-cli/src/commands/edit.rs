//! Edit command implementation

use super::{find_book, load_library, save_library};
use anyhow::{bail, Context, Result};
use quire_core::storage::LibraryStore;
use quire_core::EditorSession;

/// Arguments of the `edit` command
pub struct BookEdits {
    pub title: Option<String>,
    pub pages: Option<usize>,
    pub set_pages: Vec<(usize, String)>,
    pub cover_image: Option<String>,
    pub delete_pages: Vec<usize>,
}

/// Apply edits to a stored book and save it back under the same id
pub async fn edit(store: &dyn LibraryStore, id: &str, edits: BookEdits) -> Result<()> {
    let mut library = load_library(store).await?;
    let mut session = EditorSession::edit(find_book(&library, id)?);

    if let Some(title) = edits.title {
        session.set_title(title);
    }
    if let Some(pages) = edits.pages {
        session.set_target_page_count(pages)?;
    }

    // `draft` plays the part of the page editor's text box
    let mut draft = session.current_draft();
    if let Some(url) = edits.cover_image {
        draft.cover_image_url = Some(url);
    }

    for (index, text) in edits.set_pages {
        if index >= session.page_count() {
            bail!(
                "Page {} does not exist (book has {} pages)",
                index,
                session.page_count()
            );
        }
        let delta = index as isize - session.current_index() as isize;
        session.navigate(draft, delta);
        draft = session.current_draft();
        draft.content = text;
    }

    // Highest index first so the remaining indices still point at the
    // pages the user meant
    let mut delete_pages = edits.delete_pages;
    delete_pages.sort_unstable_by(|a, b| b.cmp(a));
    delete_pages.dedup();
    for index in delete_pages {
        session
            .delete_page(draft, index)
            .with_context(|| format!("Cannot delete page {}", index))?;
        draft = session.current_draft();
    }

    let book = session.save(draft).context("Failed to save book")?;
    println!(
        "Updated book {}: {} ({} pages)",
        book.id,
        book.title,
        book.page_count()
    );
    library.upsert_book(book);
    save_library(store, &library).await
}
