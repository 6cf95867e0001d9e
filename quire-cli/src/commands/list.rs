//! List and show command implementations

use super::{find_book, load_library};
use anyhow::Result;
use quire_core::spread::{is_cover, spread_count};
use quire_core::storage::LibraryStore;
use serde::Serialize;

/// One line of the library listing
#[derive(Serialize)]
struct BookSummary<'a> {
    id: &'a str,
    title: &'a str,
    pages: usize,
    spreads: usize,
}

/// List every book in the library
pub async fn list(store: &dyn LibraryStore, json: bool) -> Result<()> {
    let library = load_library(store).await?;
    let summaries: Vec<_> = library
        .books
        .iter()
        .map(|book| BookSummary {
            id: &book.id,
            title: &book.title,
            pages: book.page_count(),
            spreads: spread_count(book.page_count()),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if !library.user_name.is_empty() {
        println!(
            "{} {}, {}",
            library.custom_welcome_message, library.library_title, library.user_name
        );
    } else {
        println!("{} {}", library.custom_welcome_message, library.library_title);
    }
    if summaries.is_empty() {
        println!("No books yet.");
    }
    for summary in &summaries {
        println!("{}  {}  ({} pages)", summary.id, summary.title, summary.pages);
    }
    Ok(())
}

/// Display a book and all of its pages
pub async fn show(store: &dyn LibraryStore, id: &str, json: bool) -> Result<()> {
    let library = load_library(store).await?;
    let book = find_book(&library, id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(book)?);
        return Ok(());
    }

    println!("Title:       {}", book.title);
    println!("Id:          {}", book.id);
    println!("Pages:       {}", book.page_count());
    println!("Spreads:     {}", spread_count(book.page_count()));
    if let Some(url) = &book.cover().cover_image_url {
        println!("Cover image: {}", url);
    }
    if let Some(color) = &book.cover_color {
        println!("Cover color: {}", color);
    }
    for (index, page) in book.pages().iter().enumerate() {
        let label = if is_cover(index) {
            "Cover".to_string()
        } else {
            format!("Page {}", index)
        };
        println!();
        println!("[{}]", label);
        println!("{}", page.content);
    }
    Ok(())
}
