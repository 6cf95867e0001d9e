//! Core data model: pages, books and the persisted library

mod book;
mod library;
mod page;

pub use book::Book;
pub(crate) use book::new_book_id;
pub use library::{PersistedLibrary, Theme, DEFAULT_LIBRARY_TITLE, DEFAULT_WELCOME_MESSAGE};
pub(crate) use page::normalize_url;
pub use page::Page;
