//! Snapshot tests for quire-core using insta
//!
//! These tests pin the persisted JSON shape of a book and the sequence of
//! views a reader walks through, so format or navigation changes show up as
//! snapshot diffs.

use quire_core::{Book, Direction, Page, ReaderSession};

/// Helper to create a sample book for testing
fn sample_book() -> Book {
    let pages = vec![
        Page::cover(
            "# The Little Quire",
            Some("https://example.com/cover.png".to_string()),
        ),
        Page::content("Once upon a time."),
        Page::content("The end."),
    ];
    // Use a fixed id and colour for reproducible snapshots
    Book::from_parts("book-fixed", "The Little Quire", pages, Some("#789ABC".to_string())).unwrap()
}

#[test]
fn test_book_json_snapshot() {
    let json = serde_json::to_string_pretty(&sample_book()).unwrap();
    insta::assert_snapshot!(json, @r###"
    {
      "id": "book-fixed",
      "title": "The Little Quire",
      "pages": [
        {
          "content": "# The Little Quire",
          "coverImageUrl": "https://example.com/cover.png"
        },
        {
          "content": "Once upon a time."
        },
        {
          "content": "The end."
        }
      ],
      "coverColor": "#789ABC"
    }
    "###);
}

#[test]
fn test_reader_walk_snapshot() {
    let book = sample_book().with_page("Epilogue");
    let mut reader = ReaderSession::open(&book);

    let mut transcript = vec![format!("open -> {}", reader.page_label())];
    for direction in [
        Direction::Forward,
        Direction::Forward,
        Direction::Forward,
        Direction::Backward,
        Direction::Backward,
        Direction::Backward,
    ] {
        let moved = reader.turn_page(direction);
        transcript.push(format!(
            "{:?} -> {} (moved: {})",
            direction,
            reader.page_label(),
            moved
        ));
    }

    insta::assert_snapshot!(transcript.join("\n"), @r###"
    open -> Cover
    Forward -> Pages 1-2 (moved: true)
    Forward -> Page 3 (moved: true)
    Forward -> Page 3 (moved: false)
    Backward -> Pages 1-2 (moved: true)
    Backward -> Cover (moved: true)
    Backward -> Cover (moved: false)
    "###);
}
