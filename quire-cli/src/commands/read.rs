//! Read command implementation

use super::{find_book, load_library};
use anyhow::{Context, Result};
use quire_core::storage::LibraryStore;
use quire_core::{Direction, Page, ReaderSession, Visible};

/// Open a book on its cover, apply the requested moves and print the view
pub async fn read(
    store: &dyn LibraryStore,
    id: &str,
    page: Option<usize>,
    turns: &[Direction],
    all: bool,
) -> Result<()> {
    let library = load_library(store).await?;
    let book = find_book(&library, id)?;
    let mut reader = ReaderSession::open(book);

    println!("{}", book.title);

    if all {
        print_view(&reader);
        while reader.turn_page(Direction::Forward) {
            print_view(&reader);
        }
        reader.close();
        return Ok(());
    }

    if let Some(index) = page {
        reader
            .go_to_page(index)
            .with_context(|| format!("Cannot open page {}", index))?;
    }
    for &direction in turns {
        if !reader.turn_page(direction) {
            tracing::info!(
                "Already at the {} of the book",
                match direction {
                    Direction::Forward => "end",
                    Direction::Backward => "start",
                }
            );
        }
    }

    print_view(&reader);
    let back = if reader.can_turn(Direction::Backward) { "yes" } else { "no" };
    let next = if reader.can_turn(Direction::Forward) { "yes" } else { "no" };
    println!();
    println!("back: {}  next: {}", back, next);
    reader.close();
    Ok(())
}

fn print_view(reader: &ReaderSession<'_>) {
    println!();
    println!("== {} ==", reader.page_label());
    match reader.visible() {
        Visible::Cover(cover) => {
            if let Some(url) = &cover.cover_image_url {
                println!("(cover image: {})", url);
            } else if let Some(color) = &reader.book().cover_color {
                println!("(cover color: {})", color);
            }
            print_page(cover);
        }
        Visible::Spread { left, right } => {
            print_page(left);
            println!("--");
            match right {
                Some(right) => print_page(right),
                None => println!("(the end)"),
            }
        }
    }
}

fn print_page(page: &Page) {
    if page.is_blank() {
        println!("(blank)");
    } else {
        println!("{}", page.content);
    }
}
