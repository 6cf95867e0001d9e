//! Import normalizer: turns an externally supplied `{ title, pages }` payload
//! into the cover-first page list the editor works on.

use crate::error::ImportError;
use crate::types::Page;
use serde_json::Value;

/// A normalized import payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedBook {
    pub title: String,
    pub pages: Vec<Page>,
}

/// Normalize an already-parsed import payload.
///
/// The first element becomes the cover and keeps its `coverImageUrl`. Later
/// elements become content pages and keep only their `content`. A missing or
/// non-string `content` reads as empty. An empty page list yields a single
/// blank cover.
pub fn normalize_import(payload: &Value) -> Result<ImportedBook, ImportError> {
    let object = payload
        .as_object()
        .ok_or_else(|| ImportError::InvalidFormat("expected a JSON object".to_string()))?;

    let title = match object.get("title") {
        Some(Value::String(title)) if !title.trim().is_empty() => title.clone(),
        Some(Value::String(_)) => {
            return Err(ImportError::InvalidFormat("'title' is empty".to_string()));
        }
        Some(_) => {
            return Err(ImportError::InvalidFormat(
                "'title' must be a string".to_string(),
            ));
        }
        None => return Err(ImportError::InvalidFormat("missing 'title'".to_string())),
    };

    let raw_pages = object
        .get("pages")
        .and_then(Value::as_array)
        .ok_or_else(|| ImportError::InvalidFormat("'pages' must be an array".to_string()))?;

    let pages = if raw_pages.is_empty() {
        vec![Page::blank()]
    } else {
        raw_pages
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                let content = string_field(raw, "content").unwrap_or_default();
                if i == 0 {
                    Page::cover(content, string_field(raw, "coverImageUrl"))
                } else {
                    Page::content(content)
                }
            })
            .collect()
    };

    tracing::debug!(title = %title, pages = pages.len(), "normalized import");
    Ok(ImportedBook { title, pages })
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cover_keeps_image_content_pages_do_not() {
        let imported = normalize_import(&json!({
            "title": "T",
            "pages": [
                {"content": "A", "coverImageUrl": "u"},
                {"content": "B", "coverImageUrl": "ignored"}
            ]
        }))
        .unwrap();

        assert_eq!(imported.title, "T");
        assert_eq!(imported.pages[0], Page::cover("A", Some("u".to_string())));
        assert_eq!(imported.pages[1], Page::content("B"));
    }

    #[test]
    fn test_empty_pages_synthesize_cover() {
        let imported = normalize_import(&json!({"title": "Blank", "pages": []})).unwrap();
        assert_eq!(imported.pages, vec![Page::blank()]);
    }

    #[test]
    fn test_missing_content_reads_empty() {
        let imported =
            normalize_import(&json!({"title": "T", "pages": [{}, {"content": 7}]})).unwrap();
        assert!(imported.pages.iter().all(Page::is_blank));
    }

    #[test]
    fn test_rejects_bad_title() {
        for payload in [
            json!({"pages": []}),
            json!({"title": 3, "pages": []}),
            json!({"title": "  ", "pages": []}),
        ] {
            assert!(matches!(
                normalize_import(&payload),
                Err(ImportError::InvalidFormat(_))
            ));
        }
    }

    #[test]
    fn test_rejects_non_array_pages() {
        for payload in [
            json!({"title": "T"}),
            json!({"title": "T", "pages": {"0": {}}}),
            json!(["not", "an", "object"]),
        ] {
            assert!(matches!(
                normalize_import(&payload),
                Err(ImportError::InvalidFormat(_))
            ));
        }
    }
}
