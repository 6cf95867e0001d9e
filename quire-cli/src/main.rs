//! Quire CLI - write paged books and read them a spread at a time

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use quire_core::storage::JsonFileStore;
use quire_core::Direction;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the library file
const LIBRARY_ENV: &str = "QUIRE_LIBRARY";

/// Library file used when neither `--library` nor `QUIRE_LIBRARY` is set
const DEFAULT_LIBRARY_FILE: &str = "./quire_library.json";

/// Parse and validate a page count (must be at least 1, the cover)
fn parse_page_count(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("a book needs at least 1 page".to_string())
    } else {
        Ok(n)
    }
}

/// Parse an `INDEX=TEXT` page assignment
fn parse_page_assignment(s: &str) -> Result<(usize, String), String> {
    let (index, text) = s
        .split_once('=')
        .ok_or_else(|| format!("'{}' should look like INDEX=TEXT", s))?;
    let index = index
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid page index", index))?;
    Ok((index, text.to_string()))
}

#[derive(Parser)]
#[command(name = "quire")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Library file [default: $QUIRE_LIBRARY or ./quire_library.json]
    #[arg(long, global = true)]
    library: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new book
    New {
        /// Book title
        #[arg(short, long)]
        title: String,

        /// Total number of pages, cover included
        #[arg(short = 'n', long, default_value = "2", value_parser = parse_page_count)]
        pages: usize,

        /// Cover text
        #[arg(long, default_value = "")]
        cover: String,

        /// Cover image URL
        #[arg(long)]
        cover_image: Option<String>,

        /// Content page text, in order (repeatable)
        #[arg(long = "page")]
        page_texts: Vec<String>,
    },

    /// Import a book from a JSON file with a title and a list of pages
    Import {
        /// Input file path
        input: PathBuf,

        /// Use this title instead of the one in the file
        #[arg(long)]
        title: Option<String>,
    },

    /// List the books in the library
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display a book's pages
    Show {
        /// Book id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit an existing book
    Edit {
        /// Book id
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// Resize the book to this many pages, cover included
        #[arg(short = 'n', long, value_parser = parse_page_count)]
        pages: Option<usize>,

        /// Replace the text of a page (repeatable)
        #[arg(long = "set-page", value_name = "INDEX=TEXT", value_parser = parse_page_assignment)]
        set_pages: Vec<(usize, String)>,

        /// New cover image URL (empty to remove)
        #[arg(long)]
        cover_image: Option<String>,

        /// Delete a page by index (repeatable)
        #[arg(long = "delete-page", value_name = "INDEX")]
        delete_pages: Vec<usize>,
    },

    /// Delete a book from the library
    Delete {
        /// Book id
        id: String,
    },

    /// Read a book, turning pages from the cover
    Read {
        /// Book id
        id: String,

        /// Jump to the spread holding this page first
        #[arg(long)]
        page: Option<usize>,

        /// Turn a page: forward or backward (repeatable)
        #[arg(long = "turn", value_name = "DIRECTION")]
        turns: Vec<Direction>,

        /// Print every view from the cover to the last spread
        #[arg(long)]
        all: bool,
    },

    /// Export the whole library as a backup file
    Export {
        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Restore the library from a backup file, replacing its contents
    Restore {
        /// Backup file path
        input: PathBuf,

        /// Confirm overwriting the current library
        #[arg(long)]
        yes: bool,
    },

    /// Show or change the library profile
    Profile {
        /// Reader's name
        #[arg(long)]
        name: Option<String>,

        /// Library heading
        #[arg(long)]
        library_title: Option<String>,

        /// Welcome line shown above the heading
        #[arg(long)]
        welcome: Option<String>,
    },

    /// Switch between the normal and caldas themes
    Theme,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "quire_cli=debug,quire_core=debug"
    } else {
        "quire_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let library_path = cli
        .library
        .or_else(|| std::env::var_os(LIBRARY_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LIBRARY_FILE));
    tracing::debug!(path = %library_path.display(), "using library");
    let store = JsonFileStore::new(library_path);

    match cli.command {
        Commands::New {
            title,
            pages,
            cover,
            cover_image,
            page_texts,
        } => {
            commands::new_book(
                &store,
                commands::NewBook {
                    title,
                    pages,
                    cover,
                    cover_image,
                    page_texts,
                },
            )
            .await
        }

        Commands::Import { input, title } => {
            commands::import(&store, &input, title.as_deref()).await
        }

        Commands::List { json } => commands::list(&store, json).await,

        Commands::Show { id, json } => commands::show(&store, &id, json).await,

        Commands::Edit {
            id,
            title,
            pages,
            set_pages,
            cover_image,
            delete_pages,
        } => {
            commands::edit(
                &store,
                &id,
                commands::BookEdits {
                    title,
                    pages,
                    set_pages,
                    cover_image,
                    delete_pages,
                },
            )
            .await
        }

        Commands::Delete { id } => commands::delete(&store, &id).await,

        Commands::Read {
            id,
            page,
            turns,
            all,
        } => commands::read(&store, &id, page, &turns, all).await,

        Commands::Export { output } => commands::export(&store, output.as_deref()).await,

        Commands::Restore { input, yes } => commands::restore(&store, &input, yes).await,

        Commands::Profile {
            name,
            library_title,
            welcome,
        } => {
            commands::profile(
                &store,
                name.as_deref(),
                library_title.as_deref(),
                welcome.as_deref(),
            )
            .await
        }

        Commands::Theme => commands::theme(&store).await,
    }
}
