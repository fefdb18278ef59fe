//! Quotable CLI — browse, favorite, and share quotes from the terminal

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use quotable::catalog::{Quote, QuoteCatalog, QuoteId, StaticCatalog};
use quotable_app::app::controller::EMPTY_MESSAGE;
use quotable_app::app::{FavoritesBoard, Notice, QuoteBoard};
use quotable_app::data::{FileStore, Settings, Theme};
use quotable_app::error::Result;
use quotable_app::platform::{CommandShareSheet, SystemClipboard};

#[derive(Parser)]
#[command(name = "quotable", about = "Daily inspiration from the terminal", version)]
struct Cli {
    /// Storage file (defaults to the user config directory)
    #[arg(long, global = true, env = "QUOTABLE_STORE")]
    store: Option<PathBuf>,

    /// JSON catalog to use instead of the built-in quotes
    #[arg(long, global = true, env = "QUOTABLE_CATALOG")]
    catalog: Option<PathBuf>,

    /// Command that receives shared text on stdin
    #[arg(long, global = true, env = "QUOTABLE_SHARE_COMMAND")]
    share_command: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List quotes, optionally filtered by category
    List {
        #[arg(short, long, default_value = "All")]
        category: String,
    },
    /// List filter categories
    Categories,
    /// List favorite quotes
    Favorites,
    /// Add or remove a quote from favorites
    Toggle { id: u32 },
    /// Remove a quote from favorites
    Remove { id: u32 },
    /// Share a quote (copies to the clipboard when sharing is unavailable)
    Share { id: u32 },
    /// Show or change the theme preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the current theme
    Show,
    /// Switch between dark and light
    Toggle,
    /// Set the theme (system, light, dark)
    Set { theme: String },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let store = match cli.store {
        Some(path) => FileStore::new(path),
        None => FileStore::open_default()?,
    };
    tracing::debug!(path = ?store.path(), "using store");

    let catalog = match &cli.catalog {
        Some(path) => StaticCatalog::load_from(path)?,
        None => StaticCatalog::builtin(),
    };

    let sheet = CommandShareSheet::new(cli.share_command);
    let clipboard = SystemClipboard::new();

    match cli.command {
        Command::List { category } => {
            let mut board = QuoteBoard::mount(&catalog, &store);
            board.select_category(category);
            let quotes = board.visible_quotes();
            if quotes.is_empty() {
                println!("No quotes in category '{}'.", board.selected_category());
            }
            for quote in quotes {
                print_quote(quote, board.is_favorite(quote.id));
            }
        }
        Command::Categories => {
            let board = QuoteBoard::mount(&catalog, &store);
            for category in board.categories() {
                println!("{}", category);
            }
        }
        Command::Favorites => {
            let page = FavoritesBoard::mount(&catalog, &store);
            println!("{}", page.headline());
            if page.is_empty() {
                println!("{}", EMPTY_MESSAGE);
            }
            for quote in page.quotes() {
                print_quote(quote, true);
            }
        }
        Command::Toggle { id } => {
            let mut board = QuoteBoard::mount(&catalog, &store);
            let notice = board.toggle_favorite(QuoteId(id))?;
            print_notice(notice);
        }
        Command::Remove { id } => {
            let mut page = FavoritesBoard::mount(&catalog, &store);
            print_notice(page.remove(QuoteId(id)));
        }
        Command::Share { id } => {
            let board = QuoteBoard::mount(&catalog, &store);
            let notice = board.share_quote(QuoteId(id), &sheet, &clipboard)?;
            if notice.is_error() {
                // Still give the user the text to copy by hand
                if let Some(quote) = catalog.get(QuoteId(id)) {
                    println!("{}", quote.share_text());
                }
            }
            print_notice(notice);
        }
        Command::Theme { action } => {
            let mut settings = Settings::load(&store);
            match action.unwrap_or(ThemeAction::Show) {
                ThemeAction::Show => println!("{}", settings.theme()),
                ThemeAction::Toggle => {
                    let theme = settings.toggle_theme();
                    println!("Theme: {}", theme);
                }
                ThemeAction::Set { theme } => {
                    let theme: Theme = theme.parse()?;
                    settings.set_theme(theme);
                    println!("Theme: {}", theme);
                }
            }
        }
    }

    Ok(())
}

fn print_quote(quote: &Quote, favorite: bool) {
    let marker = if favorite { "♥" } else { " " };
    println!("{} [{}] \u{201c}{}\u{201d}", marker, quote.id, quote.text);
    println!("      - {} ({})", quote.author, quote.category);
}

fn print_notice(notice: Notice) {
    if notice.is_error() {
        eprintln!("{}", notice.title());
    } else {
        println!("{}", notice.title());
    }
}
