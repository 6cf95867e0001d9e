//! Page editor state machine.
//!
//! An [`EditorSession`] holds the draft of a single book while it is being
//! authored: its title, its pages and the index of the page being edited.
//! The text box for the current page lives in the presentation layer, so every
//! transition takes the box's current contents as a [`PageDraft`] and writes it
//! back before moving. A transition cannot be made without handing over the
//! draft.
//!
//! The session never touches stored books. [`EditorSession::edit`] deep-copies
//! the book it is given and [`EditorSession::save`] returns a new [`Book`] for
//! the caller to insert or replace by id.

use crate::color::random_cover_color;
use crate::error::{EditorError, ImportError};
use crate::import::normalize_import;
use crate::spread::{is_cover, COVER_INDEX};
use crate::types::{new_book_id, normalize_url, Book, Page};
use serde_json::Value;

/// Smallest page count a book can be cut down to by deleting pages: the cover
/// plus one content page.
pub const MIN_PAGES_AFTER_DELETE: usize = 2;

/// The presentation layer's view of the page being edited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageDraft {
    /// Text currently in the page editor
    pub content: String,

    /// Cover image URL field; only read while the cover is being edited
    pub cover_image_url: Option<String>,
}

impl PageDraft {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            cover_image_url: None,
        }
    }

    pub fn with_cover_image(mut self, url: impl Into<String>) -> Self {
        self.cover_image_url = Some(url.into());
        self
    }
}

impl From<&str> for PageDraft {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for PageDraft {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

impl From<&Page> for PageDraft {
    fn from(page: &Page) -> Self {
        Self {
            content: page.content.clone(),
            cover_image_url: page.cover_image_url.clone(),
        }
    }
}

/// Identity of the stored book an editing session will replace
#[derive(Debug, Clone, PartialEq, Eq)]
struct EditTarget {
    id: String,
    cover_color: Option<String>,
}

/// Draft state of a book being created or edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    title: String,
    pages: Vec<Page>,
    current: usize,
    target: Option<EditTarget>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Start a new book: an untitled draft holding a blank cover
    pub fn new() -> Self {
        Self {
            title: String::new(),
            pages: vec![Page::blank()],
            current: COVER_INDEX,
            target: None,
        }
    }

    /// Start editing an existing book. The pages are copied, so the stored
    /// book is unaffected until the result of [`save`](Self::save) replaces it.
    pub fn edit(book: &Book) -> Self {
        tracing::debug!(id = %book.id, pages = book.page_count(), "editing book");
        Self {
            title: book.title.clone(),
            pages: book.pages().to_vec(),
            current: COVER_INDEX,
            target: Some(EditTarget {
                id: book.id.clone(),
                cover_color: book.cover_color.clone(),
            }),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Pages of the draft, cover first
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Index of the page being edited
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_page(&self) -> &Page {
        &self.pages[self.current]
    }

    /// The stored contents of the current page, for loading into the editor
    pub fn current_draft(&self) -> PageDraft {
        PageDraft::from(self.current_page())
    }

    /// Id of the book being edited, `None` when creating a new one
    pub fn editing_id(&self) -> Option<&str> {
        self.target.as_ref().map(|t| t.id.as_str())
    }

    pub fn is_editing_existing(&self) -> bool {
        self.target.is_some()
    }

    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current + 1 < self.pages.len()
    }

    /// Whether [`delete_page`](Self::delete_page) would accept the current page
    pub fn can_delete_current(&self) -> bool {
        !is_cover(self.current) && self.pages.len() > MIN_PAGES_AFTER_DELETE
    }

    /// Declare how many pages the book should have, cover included.
    ///
    /// Missing pages are appended blank; surplus pages are cut from the end.
    /// The cover is never removed. Editing restarts at the cover.
    pub fn set_target_page_count(&mut self, count: usize) -> Result<(), EditorError> {
        if count < 1 {
            return Err(EditorError::MinimumPages { minimum: 1 });
        }
        tracing::debug!(from = self.pages.len(), to = count, "setting page count");
        self.pages.resize_with(count, Page::blank);
        self.current = COVER_INDEX;
        Ok(())
    }

    /// Write the presentation layer's draft into the current page. While the
    /// cover is being edited the cover image URL is written too.
    pub fn commit_draft(&mut self, draft: PageDraft) {
        let page = &mut self.pages[self.current];
        page.content = draft.content;
        if is_cover(self.current) {
            page.cover_image_url = normalize_url(draft.cover_image_url);
        }
    }

    /// Leave per-page editing to go back to the title and page count step
    pub fn return_to_setup(&mut self, draft: PageDraft) {
        self.commit_draft(draft);
    }

    /// Commit the draft, then move the cursor by `delta`, clamped to the page
    /// range. Returns the new index.
    pub fn navigate(&mut self, draft: PageDraft, delta: isize) -> usize {
        self.commit_draft(draft);
        let last = self.pages.len() - 1;
        let target = if delta < 0 {
            self.current.saturating_sub(delta.unsigned_abs())
        } else {
            self.current.saturating_add(delta.unsigned_abs())
        };
        let target = target.min(last);
        if target != self.current {
            tracing::debug!(from = self.current, to = target, "editor navigate");
        }
        self.current = target;
        target
    }

    /// Commit the draft, then delete page `index`. The cursor lands on the
    /// page that took its place, or on the new last page. Returns the new
    /// cursor index.
    pub fn delete_page(&mut self, draft: PageDraft, index: usize) -> Result<usize, EditorError> {
        self.commit_draft(draft);

        if is_cover(index) {
            return Err(EditorError::ProtectedPage);
        }
        if self.pages.len() <= MIN_PAGES_AFTER_DELETE {
            return Err(EditorError::MinimumPages {
                minimum: MIN_PAGES_AFTER_DELETE,
            });
        }
        if index >= self.pages.len() {
            return Err(EditorError::PageOutOfRange {
                index,
                len: self.pages.len(),
            });
        }

        self.pages.remove(index);
        self.current = index.min(self.pages.len() - 1);
        tracing::debug!(index, remaining = self.pages.len(), "deleted page");
        Ok(self.current)
    }

    /// Replace the draft with a normalized import payload and restart at the
    /// cover. The session is untouched if the payload is rejected.
    pub fn load_from_import(&mut self, payload: &Value) -> Result<(), ImportError> {
        let imported = normalize_import(payload)?;
        self.title = imported.title;
        self.pages = imported.pages;
        self.current = COVER_INDEX;
        Ok(())
    }

    /// Commit the draft and produce the finished book.
    ///
    /// The title must not be blank and the cover needs either text or an
    /// image. A new book gets a fresh id; an edited book keeps its id and
    /// cover colour. A book with neither a cover image nor a colour is given a
    /// random colour.
    pub fn save(&mut self, draft: PageDraft) -> Result<Book, EditorError> {
        self.commit_draft(draft);

        let title = self.title.trim();
        if title.is_empty() {
            return Err(EditorError::EmptyTitle);
        }
        let cover = &self.pages[COVER_INDEX];
        if cover.is_blank() && !cover.has_cover_image() {
            return Err(EditorError::EmptyCover);
        }

        let (id, cover_color) = match &self.target {
            Some(target) => (target.id.clone(), target.cover_color.clone()),
            None => (new_book_id(), None),
        };
        let cover_color = match cover_color {
            Some(color) => Some(color),
            None if !cover.has_cover_image() => Some(random_cover_color()),
            None => None,
        };

        let book = Book::from_parts(id, title, self.pages.clone(), cover_color)?;
        tracing::debug!(id = %book.id, pages = book.page_count(), "saved book");
        Ok(book)
    }
}
