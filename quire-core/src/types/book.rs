//! The Book type - a cover page followed by content pages

use super::page::enforce_cover_layout;
use super::Page;
use crate::error::EditorError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A finalized book.
///
/// `pages[0]` is the cover and there is always at least one page. Content
/// pages never carry a cover image. [`Book::from_parts`] and deserialization
/// also reject a blank title, so a `Book` read from disk holds every rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", try_from = "RawBook")]
pub struct Book {
    /// Unique, stable identifier
    pub id: String,

    /// Book title
    pub title: String,

    /// Cover followed by content pages
    pages: Vec<Page>,

    /// Background colour used when the cover has no image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_color: Option<String>,
}

/// Wire form of a book, validated into [`Book`]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBook {
    id: String,
    title: String,
    pages: Vec<Page>,
    #[serde(default)]
    cover_color: Option<String>,
}

impl TryFrom<RawBook> for Book {
    type Error = EditorError;

    fn try_from(raw: RawBook) -> Result<Self, Self::Error> {
        Book::from_parts(raw.id, raw.title, raw.pages, raw.cover_color)
    }
}

impl Book {
    /// Create a single-page book with a fresh id
    pub fn new(title: impl Into<String>, cover: Page) -> Self {
        let mut pages = vec![cover];
        enforce_cover_layout(&mut pages);
        Self {
            id: new_book_id(),
            title: title.into(),
            pages,
            cover_color: None,
        }
    }

    /// Assemble a book from its parts, enforcing the title and page layout
    pub fn from_parts(
        id: impl Into<String>,
        title: impl Into<String>,
        mut pages: Vec<Page>,
        cover_color: Option<String>,
    ) -> Result<Self, EditorError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(EditorError::EmptyTitle);
        }
        if pages.is_empty() {
            return Err(EditorError::MinimumPages { minimum: 1 });
        }
        enforce_cover_layout(&mut pages);
        Ok(Self {
            id: id.into(),
            title,
            pages,
            cover_color,
        })
    }

    /// Append a content page
    pub fn with_page(mut self, content: impl Into<String>) -> Self {
        self.pages.push(Page::content(content));
        self
    }

    /// Set the fallback cover colour
    pub fn with_cover_color(mut self, color: impl Into<String>) -> Self {
        self.cover_color = Some(color.into());
        self
    }

    /// All pages, cover first
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// The cover page
    pub fn cover(&self) -> &Page {
        &self.pages[0]
    }

    /// Pages after the cover
    pub fn content_pages(&self) -> &[Page] {
        &self.pages[1..]
    }

    /// Page at `index`, if present
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Total number of pages including the cover
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get the book title
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Generate a fresh book identifier
pub(crate) fn new_book_id() -> String {
    format!("book-{}", Uuid::new_v4())
}
