//! Reader navigation state machine.
//!
//! A book opens on its cover, shown alone. Turning forward moves to the
//! spread `(1, 2)`, then `(3, 4)` and so on. Turning backward from the first
//! spread returns to the cover. Both ends are hard stops: turning past them
//! leaves the view where it is.

use crate::error::ReaderError;
use crate::spread::{is_spread_left, right_of, spread_left_for, FIRST_SPREAD_LEFT};
use crate::types::{Book, Page};
use std::fmt;
use std::str::FromStr;

/// Direction of a page turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Map a keyboard key name to a turn direction
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(Direction::Forward),
            "ArrowLeft" => Some(Direction::Backward),
            _ => None,
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "forward" | "f" | "next" => Ok(Direction::Forward),
            "backward" | "b" | "prev" => Ok(Direction::Backward),
            other => Err(format!(
                "'{}' is not a direction (expected forward or backward)",
                other
            )),
        }
    }
}

/// What the reader is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderView {
    /// The cover, alone
    Cover,
    /// A spread whose left page is `left` (always odd)
    Spread { left: usize },
}

/// The pages currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visible<'a> {
    Cover(&'a Page),
    /// `right` is `None` when the left page is the last page of the book
    Spread {
        left: &'a Page,
        right: Option<&'a Page>,
    },
}

/// The view a turn would lead to, or `None` when the turn is not possible
pub fn next_view(view: ReaderView, direction: Direction, len: usize) -> Option<ReaderView> {
    match (view, direction) {
        (ReaderView::Cover, Direction::Forward) => is_spread_left(FIRST_SPREAD_LEFT, len)
            .then_some(ReaderView::Spread {
                left: FIRST_SPREAD_LEFT,
            }),
        (ReaderView::Cover, Direction::Backward) => None,
        (ReaderView::Spread { left }, Direction::Forward) => {
            let next = left + 2;
            (next < len).then_some(ReaderView::Spread { left: next })
        }
        (ReaderView::Spread { left }, Direction::Backward) if left <= FIRST_SPREAD_LEFT => {
            Some(ReaderView::Cover)
        }
        (ReaderView::Spread { left }, Direction::Backward) => {
            Some(ReaderView::Spread { left: left - 2 })
        }
    }
}

/// Reading state for one open book. The book is borrowed and never changed.
#[derive(Debug, Clone)]
pub struct ReaderSession<'a> {
    book: &'a Book,
    view: ReaderView,
}

impl<'a> ReaderSession<'a> {
    /// Open a book on its cover
    pub fn open(book: &'a Book) -> Self {
        tracing::debug!(id = %book.id, pages = book.page_count(), "opened book");
        Self {
            book,
            view: ReaderView::Cover,
        }
    }

    pub fn book(&self) -> &'a Book {
        self.book
    }

    pub fn view(&self) -> ReaderView {
        self.view
    }

    /// Whether a turn in `direction` would change the view
    pub fn can_turn(&self, direction: Direction) -> bool {
        next_view(self.view, direction, self.book.page_count()).is_some()
    }

    /// Turn a page. Returns `false` and leaves the view alone at either end.
    pub fn turn_page(&mut self, direction: Direction) -> bool {
        match next_view(self.view, direction, self.book.page_count()) {
            Some(view) => {
                tracing::debug!(?direction, from = ?self.view, to = ?view, "turned page");
                self.view = view;
                true
            }
            None => false,
        }
    }

    /// Jump to the cover (index 0) or to the spread holding page `index`
    pub fn go_to_page(&mut self, index: usize) -> Result<ReaderView, ReaderError> {
        let len = self.book.page_count();
        if index >= len {
            return Err(ReaderError::PageOutOfRange { index, len });
        }
        self.view = match spread_left_for(index) {
            Some(left) => ReaderView::Spread { left },
            None => ReaderView::Cover,
        };
        Ok(self.view)
    }

    /// The pages on screen
    pub fn visible(&self) -> Visible<'a> {
        let pages = self.book.pages();
        match self.view {
            ReaderView::Cover => Visible::Cover(self.book.cover()),
            ReaderView::Spread { left } => Visible::Spread {
                left: &pages[left],
                right: right_of(left, pages.len()).map(|i| &pages[i]),
            },
        }
    }

    /// Human-readable position, e.g. "Cover", "Pages 1-2" or "Page 5"
    pub fn page_label(&self) -> String {
        self.to_string()
    }

    /// Close the book, releasing the borrow
    pub fn close(self) {
        tracing::debug!(id = %self.book.id, "closed book");
    }
}

impl fmt::Display for ReaderSession<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.view {
            ReaderView::Cover => write!(f, "Cover"),
            ReaderView::Spread { left } => match right_of(left, self.book.page_count()) {
                Some(right) => write!(f, "Pages {}-{}", left, right),
                None => write!(f, "Page {}", left),
            },
        }
    }
}
