//! A single page of a book

use serde::{Deserialize, Serialize};

/// One page of a book.
///
/// Only the cover (index 0) may carry an image URL. Content pages are built
/// with [`Page::content`] and [`Page::strip_cover_image`] clears the field
/// whenever a page is placed after the cover.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Page text (markdown, rendered by the presentation layer)
    #[serde(default)]
    pub content: String,

    /// Cover image URL, meaningful on the cover only
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_url"
    )]
    pub cover_image_url: Option<String>,
}

impl Page {
    /// Create a cover page. A blank URL is treated as no image.
    pub fn cover(content: impl Into<String>, cover_image_url: Option<String>) -> Self {
        Self {
            content: content.into(),
            cover_image_url: normalize_url(cover_image_url),
        }
    }

    /// Create a content page
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            cover_image_url: None,
        }
    }

    /// A blank page
    pub fn blank() -> Self {
        Self::default()
    }

    /// Whether this page has a cover image set
    pub fn has_cover_image(&self) -> bool {
        self.cover_image_url.is_some()
    }

    /// Whether the page text is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Drop any cover image, turning this into a plain content page
    pub fn strip_cover_image(&mut self) {
        self.cover_image_url = None;
    }
}

/// Trim a URL and map blank values to `None`
pub(crate) fn normalize_url(url: Option<String>) -> Option<String> {
    url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty())
}

fn deserialize_url<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let url = Option::<String>::deserialize(deserializer)?;
    Ok(normalize_url(url))
}

/// Enforce the cover-first layout on a page list: the first page keeps its
/// image, every later page loses it.
pub(crate) fn enforce_cover_layout(pages: &mut [Page]) {
    if let Some((cover, rest)) = pages.split_first_mut() {
        cover.cover_image_url = normalize_url(cover.cover_image_url.take());
        rest.iter_mut().for_each(Page::strip_cover_image);
    }
}
