//! The persisted library document: user settings plus every saved book

use super::Book;
use crate::color::is_hex_color;
use crate::error::LibraryError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default library heading
pub const DEFAULT_LIBRARY_TITLE: &str = "Lulu's Library";

/// Default welcome line shown above the library heading
pub const DEFAULT_WELCOME_MESSAGE: &str = "Welcome to";

/// Colour theme of the library
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Normal,
    Caldas,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Normal => Theme::Caldas,
            Theme::Caldas => Theme::Normal,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Normal => "normal",
            Theme::Caldas => "caldas",
        }
    }
}

/// Everything that is written to the persistence store.
///
/// Loading is lenient: missing fields fall back to their defaults. Use
/// [`PersistedLibrary::from_backup_json`] for the strict check applied to
/// user-supplied backup files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedLibrary {
    pub user_name: String,
    pub library_title: String,
    pub custom_welcome_message: String,
    pub current_theme: Theme,
    pub books: Vec<Book>,
}

impl Default for PersistedLibrary {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            library_title: DEFAULT_LIBRARY_TITLE.to_string(),
            custom_welcome_message: DEFAULT_WELCOME_MESSAGE.to_string(),
            current_theme: Theme::default(),
            books: Vec::new(),
        }
    }
}

impl PersistedLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a book by id
    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Insert a book, or replace the stored book with the same id in place.
    /// Returns `true` when an existing book was replaced.
    pub fn upsert_book(&mut self, book: Book) -> bool {
        match self.books.iter_mut().find(|b| b.id == book.id) {
            Some(existing) => {
                tracing::debug!(id = %book.id, "replacing book");
                *existing = book;
                true
            }
            None => {
                tracing::debug!(id = %book.id, "adding book");
                self.books.push(book);
                false
            }
        }
    }

    /// Remove a book by id
    pub fn remove_book(&mut self, id: &str) -> Option<Book> {
        let idx = self.books.iter().position(|b| b.id == id)?;
        Some(self.books.remove(idx))
    }

    /// Switch between the two themes, returning the new one
    pub fn toggle_theme(&mut self) -> Theme {
        self.current_theme = self.current_theme.toggled();
        self.current_theme
    }

    pub fn set_user_name(&mut self, name: &str) -> Result<(), LibraryError> {
        self.user_name = non_empty(name, "User name")?;
        Ok(())
    }

    pub fn set_library_title(&mut self, title: &str) -> Result<(), LibraryError> {
        self.library_title = non_empty(title, "Library title")?;
        Ok(())
    }

    /// The welcome message may be cleared
    pub fn set_welcome_message(&mut self, message: &str) {
        self.custom_welcome_message = message.trim().to_string();
    }

    /// Serialize the whole library as a pretty-printed backup
    pub fn to_backup_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a backup file, checking its structure field by field before
    /// accepting it.
    pub fn from_backup_json(text: &str) -> Result<Self, LibraryError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| LibraryError::InvalidBackup(format!("not valid JSON: {}", e)))?;
        validate_backup(&value)?;
        serde_json::from_value(value).map_err(|e| LibraryError::InvalidBackup(e.to_string()))
    }
}

fn non_empty(value: &str, field: &'static str) -> Result<String, LibraryError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(LibraryError::EmptyField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn validate_backup(value: &Value) -> Result<(), LibraryError> {
    let invalid = |msg: String| LibraryError::InvalidBackup(msg);

    let root = value
        .as_object()
        .ok_or_else(|| invalid("expected a JSON object".to_string()))?;

    for field in ["userName", "libraryTitle", "customWelcomeMessage", "currentTheme"] {
        if !root.get(field).is_some_and(Value::is_string) {
            return Err(invalid(format!("missing or non-string field '{}'", field)));
        }
    }

    let books = root
        .get("books")
        .and_then(Value::as_array)
        .ok_or_else(|| invalid("missing 'books' array".to_string()))?;

    for book in books {
        let title = book.get("title").and_then(Value::as_str);
        let pages = book.get("pages").and_then(Value::as_array);
        let (Some(title), Some(pages), true) =
            (title, pages, book.get("id").is_some_and(Value::is_string))
        else {
            let name = title.unwrap_or("Unknown");
            return Err(invalid(format!(
                "book \"{}\" is missing required fields",
                name
            )));
        };
        if title.trim().is_empty() {
            return Err(invalid("a book has an empty title".to_string()));
        }
        let color_ok = book
            .get("coverColor")
            .map_or(true, |c| c.is_null() || c.as_str().is_some_and(is_hex_color));
        if !color_ok {
            return Err(invalid(format!(
                "cover colour of book \"{}\" is not a #RRGGBB value",
                title
            )));
        }

        for page in pages {
            let content_ok = page.get("content").is_some_and(Value::is_string);
            let url_ok = page
                .get("coverImageUrl")
                .map_or(true, |url| url.is_string());
            if !content_ok || !url_ok {
                return Err(invalid(format!(
                    "page data in book \"{}\" is malformed",
                    title
                )));
            }
        }
    }

    Ok(())
}
