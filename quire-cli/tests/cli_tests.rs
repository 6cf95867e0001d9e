//! Integration tests for the Quire CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Command bound to a library file inside `dir`
fn quire(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("quire-cli").unwrap();
    cmd.arg("--library").arg(library_path(dir));
    cmd.env_remove("QUIRE_LIBRARY");
    cmd
}

fn library_path(dir: &TempDir) -> PathBuf {
    dir.path().join("library.json")
}

/// Write a file for testing
fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

fn read_library(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// Create a book through the CLI and return its id
fn create_book(dir: &TempDir, args: &[&str]) -> String {
    quire(dir).arg("new").args(args).assert().success();
    let library = read_library(&library_path(dir));
    let books = library["books"].as_array().unwrap();
    books.last().unwrap()["id"].as_str().unwrap().to_string()
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("quire-cli").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("read"))
        .stdout(predicate::str::contains("export"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("quire-cli").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quire"));
}

#[test]
fn test_read_help() {
    let mut cmd = Command::cargo_bin("quire-cli").unwrap();
    cmd.args(["read", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Read a book"))
        .stdout(predicate::str::contains("--turn"))
        .stdout(predicate::str::contains("--page"));
}

#[test]
fn test_new_requires_title() {
    let dir = TempDir::new().unwrap();
    quire(&dir)
        .args(["new", "--pages", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--title"));
}

#[test]
fn test_new_rejects_zero_pages() {
    let dir = TempDir::new().unwrap();
    quire(&dir)
        .args(["new", "--title", "Zero", "--pages", "0", "--cover", "C"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1 page"));
}

#[test]
fn test_new_with_empty_cover_fails() {
    let dir = TempDir::new().unwrap();
    quire(&dir)
        .args(["new", "--title", "Blank", "--page", "Body"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cover needs content or an image"));
    assert!(!library_path(&dir).exists());
}

#[test]
fn test_new_and_list() {
    let dir = TempDir::new().unwrap();
    quire(&dir)
        .args([
            "new", "--title", "My Book", "--cover", "Cover", "--page", "One", "--page", "Two",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created book"))
        .stdout(predicate::str::contains("(3 pages)"));

    let output = quire(&dir).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());
    let list: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(list[0]["title"], "My Book");
    assert_eq!(list[0]["pages"], 3);
    assert_eq!(list[0]["spreads"], 1);
}

#[test]
fn test_list_empty_library() {
    let dir = TempDir::new().unwrap();
    quire(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Lulu's Library"))
        .stdout(predicate::str::contains("No books yet."));
}

#[test]
fn test_import_book() {
    let dir = TempDir::new().unwrap();
    let input = write_file(
        &dir,
        "book.json",
        r#"{"title": "T", "pages": [{"content": "A", "coverImageUrl": "u"}, {"content": "B", "coverImageUrl": "x"}]}"#,
    );

    quire(&dir)
        .arg("import")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported book"));

    let library = read_library(&library_path(&dir));
    let pages = &library["books"][0]["pages"];
    assert_eq!(pages[0]["content"], "A");
    assert_eq!(pages[0]["coverImageUrl"], "u");
    assert_eq!(pages[1]["content"], "B");
    assert!(pages[1].get("coverImageUrl").is_none());
}

#[test]
fn test_import_invalid_format() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "book.json", r#"{"title": "T", "pages": "nope"}"#);

    quire(&dir)
        .arg("import")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid import format"));
}

#[test]
fn test_import_nonexistent_file() {
    let dir = TempDir::new().unwrap();
    quire(&dir)
        .args(["import", "/nonexistent/book.json"])
        .assert()
        .failure();
}

#[test]
fn test_read_turns_pages() {
    let dir = TempDir::new().unwrap();
    let id = create_book(
        &dir,
        &[
            "--title", "Reader", "--cover", "Front", "--page", "p1", "--page", "p2", "--page",
            "p3", "--page", "p4",
        ],
    );

    quire(&dir)
        .args(["read", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("== Cover =="))
        .stdout(predicate::str::contains("back: no  next: yes"));

    quire(&dir)
        .args(["read", id.as_str(), "--turn", "forward", "--turn", "forward", "--turn", "forward"])
        .assert()
        .success()
        .stdout(predicate::str::contains("== Pages 3-4 =="))
        .stdout(predicate::str::contains("back: yes  next: no"));

    quire(&dir)
        .args(["read", id.as_str(), "--turn", "forward", "--turn", "backward"])
        .assert()
        .success()
        .stdout(predicate::str::contains("== Cover =="));
}

#[test]
fn test_read_all_shows_end_placeholder() {
    let dir = TempDir::new().unwrap();
    let id = create_book(
        &dir,
        &["--title", "Odd", "--cover", "Front", "--page", "p1", "--page", "p2", "--page", "p3"],
    );

    quire(&dir)
        .args(["read", id.as_str(), "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("== Pages 1-2 =="))
        .stdout(predicate::str::contains("== Page 3 =="))
        .stdout(predicate::str::contains("(the end)"));
}

#[test]
fn test_read_page_out_of_range() {
    let dir = TempDir::new().unwrap();
    let id = create_book(&dir, &["--title", "Short", "--cover", "Front"]);

    quire(&dir)
        .args(["read", id.as_str(), "--page", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot open page 9"));
}

#[test]
fn test_edit_cover_is_protected() {
    let dir = TempDir::new().unwrap();
    let id = create_book(
        &dir,
        &["--title", "Guarded", "--cover", "Front", "--page", "a", "--page", "b"],
    );

    quire(&dir)
        .args(["edit", id.as_str(), "--delete-page", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cover page cannot be deleted"));
}

#[test]
fn test_edit_keeps_id_and_applies_changes() {
    let dir = TempDir::new().unwrap();
    let id = create_book(
        &dir,
        &["--title", "Before", "--cover", "Front", "--page", "a", "--page", "b", "--page", "c"],
    );

    quire(&dir)
        .args([
            "edit",
            id.as_str(),
            "--title",
            "After",
            "--set-page",
            "1=A!",
            "--delete-page",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated book"));

    let library = read_library(&library_path(&dir));
    let books = library["books"].as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["id"], id.as_str());
    assert_eq!(books[0]["title"], "After");
    let contents: Vec<_> = books[0]["pages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["content"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(contents, vec!["Front", "A!", "c"]);
}

#[test]
fn test_edit_minimum_pages() {
    let dir = TempDir::new().unwrap();
    let id = create_book(&dir, &["--title", "Pair", "--cover", "Front", "--page", "a"]);

    quire(&dir)
        .args(["edit", id.as_str(), "--delete-page", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2 page(s)"));
}

#[test]
fn test_delete_book() {
    let dir = TempDir::new().unwrap();
    let id = create_book(&dir, &["--title", "Gone", "--cover", "Front"]);

    quire(&dir)
        .args(["delete", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted book"));

    quire(&dir)
        .args(["show", id.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No book with id"));
}

#[test]
fn test_export_and_restore() {
    let dir = TempDir::new().unwrap();
    create_book(&dir, &["--title", "Backed Up", "--cover", "Front"]);
    let backup = dir.path().join("backup.json");

    quire(&dir)
        .args(["export", "--output"])
        .arg(&backup)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 books"));

    let other = TempDir::new().unwrap();
    quire(&other)
        .arg("restore")
        .arg(&backup)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    quire(&other)
        .arg("restore")
        .arg(&backup)
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored 1 books"));

    quire(&other)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Backed Up"));
}

#[test]
fn test_restore_rejects_malformed_backup() {
    let dir = TempDir::new().unwrap();
    let backup = write_file(&dir, "backup.json", r#"{"userName": "Ana", "books": []}"#);

    quire(&dir)
        .arg("restore")
        .arg(&backup)
        .arg("--yes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid library backup"));
}

#[test]
fn test_profile_and_theme() {
    let dir = TempDir::new().unwrap();
    quire(&dir)
        .args(["profile", "--name", "Lulu", "--library-title", "Shelf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name:    Lulu"))
        .stdout(predicate::str::contains("Library: Shelf"));

    quire(&dir)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: caldas"));

    quire(&dir)
        .args(["profile", "--name", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("User name cannot be empty"));
}
