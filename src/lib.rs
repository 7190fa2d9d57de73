//! # Corpus
//!
//! A terminal browser for a small SQLite-backed collection of articles.
//!
//! ## Architecture
//!
//! ```text
//! Store → Screens (list, detail, help) → Navigator → Terminal
//! ```
//!
//! Terminal input becomes logical [`Action`](tui::event::Action)s through the
//! configured keybindings. The [`Navigator`](tui::navigator::Navigator) moves
//! between screens on registered transitions and hands each event to the
//! active screen, which renders itself to styled text for the shell to paint.
//!
//! ## Quick Start
//!
//! ```bash
//! # Browse (seeds sample articles on first run)
//! corpus
//!
//! # Print articles by one author
//! corpus list --author author-3
//!
//! # Print one article wrapped to 60 columns
//! corpus show 4 --width 60
//!
//! # Start over with 20 samples
//! corpus seed --count 20 --reset
//! ```

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) owns the opened store and knows where the
/// data directory lives.
pub mod app;

/// Command-line interface using clap.
///
/// - `tui` - Launch the browser (default)
/// - `list [--author ID] [--json]` - Print articles newest first
/// - `show <ID> [--width N]` - Print one article
/// - `seed [--count N] [--reset]` - Insert sample articles
pub mod cli;

/// Configuration loaded from `~/.config/corpus/config.toml`:
/// colors, keybindings, store, ui and log settings.
pub mod config;

/// Core domain model: [`Article`](domain::Article).
pub mod domain;

/// SQLite persistence layer.
///
/// - [`Store`](store::Store): Trait defining storage operations
/// - [`SqliteStore`](store::SqliteStore): SQLite implementation
/// - [`seed`](store::seed): Sample data
pub mod store;

/// Width-aware wrapping, truncation and excerpts.
pub mod text;

/// Terminal user interface built with ratatui.
pub mod tui;
