//! Library-wide commands: backup, restore, profile and theme

use super::{load_library, save_library};
use anyhow::{bail, Context, Result};
use quire_core::storage::LibraryStore;
use quire_core::PersistedLibrary;
use std::path::Path;

/// Write the library as a backup file, or to stdout
pub async fn export(store: &dyn LibraryStore, output: Option<&Path>) -> Result<()> {
    let library = load_library(store).await?;
    let json = library.to_backup_json()?;

    match output {
        Some(path) => {
            tokio::fs::write(path, json)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "Exported {} books to {}",
                library.books.len(),
                path.display()
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}

/// Replace the library with the contents of a backup file
pub async fn restore(store: &dyn LibraryStore, input: &Path, confirmed: bool) -> Result<()> {
    let text = tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let library = PersistedLibrary::from_backup_json(&text)
        .with_context(|| format!("Failed to restore from {}", input.display()))?;

    if !confirmed {
        bail!("Restoring replaces the current library; pass --yes to confirm");
    }

    save_library(store, &library).await?;
    println!("Restored {} books", library.books.len());
    Ok(())
}

/// Update the profile fields that were given, then print the profile
pub async fn profile(
    store: &dyn LibraryStore,
    name: Option<&str>,
    library_title: Option<&str>,
    welcome: Option<&str>,
) -> Result<()> {
    let mut library = load_library(store).await?;
    let changed = name.is_some() || library_title.is_some() || welcome.is_some();

    if let Some(name) = name {
        library.set_user_name(name)?;
    }
    if let Some(title) = library_title {
        library.set_library_title(title)?;
    }
    if let Some(welcome) = welcome {
        library.set_welcome_message(welcome);
    }
    if changed {
        save_library(store, &library).await?;
    }

    println!("Name:    {}", library.user_name);
    println!("Library: {}", library.library_title);
    println!("Welcome: {}", library.custom_welcome_message);
    println!("Theme:   {}", library.current_theme.as_str());
    Ok(())
}

/// Toggle the library theme
pub async fn theme(store: &dyn LibraryStore) -> Result<()> {
    let mut library = load_library(store).await?;
    let theme = library.toggle_theme();
    save_library(store, &library).await?;
    println!("Theme: {}", theme.as_str());
    Ok(())
}
