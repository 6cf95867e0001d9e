//! New command implementation

use super::{load_library, save_library};
use anyhow::{Context, Result};
use quire_core::storage::LibraryStore;
use quire_core::{EditorSession, PageDraft};

/// Arguments of the `new` command
pub struct NewBook {
    pub title: String,
    pub pages: usize,
    pub cover: String,
    pub cover_image: Option<String>,
    pub page_texts: Vec<String>,
}

/// Create a book page by page, the way the editor is driven interactively
pub async fn new_book(store: &dyn LibraryStore, args: NewBook) -> Result<()> {
    let mut library = load_library(store).await?;

    let mut session = EditorSession::new();
    session.set_title(args.title);
    // Grow the book if more page texts were given than pages requested
    let count = args.pages.max(args.page_texts.len() + 1);
    session.set_target_page_count(count)?;

    let mut draft = PageDraft {
        content: args.cover,
        cover_image_url: args.cover_image,
    };
    for text in args.page_texts {
        session.navigate(draft, 1);
        draft = PageDraft::new(text);
    }

    let book = session.save(draft).context("Failed to save book")?;
    println!(
        "Created book {}: {} ({} pages)",
        book.id,
        book.title,
        book.page_count()
    );
    library.upsert_book(book);
    save_library(store, &library).await
}
