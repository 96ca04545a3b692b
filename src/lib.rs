//! Favourites store for a media-center plugin.
//!
//! Keeps the user's favourite movies, TV shows and anime in a single
//! `favourites.json` file and exposes add, remove, list and clear operations,
//! both as a library (`management::FavouritesStore`) and through the
//! `popfavs` command-line interface.
//!
//! # Modules
//!
//! - `cli` - Command implementations used by the binary
//! - `config` - Configuration management and environment variables
//! - `logging` - Diagnostic log setup
//! - `management` - The file-backed favourites store and its host collaborators
//! - `types` - Categories, entries and the favourites document
//! - `utils` - Argument parsers and table helpers

pub mod cli;
pub mod config;
pub mod logging;
pub mod management;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Boxes any error that is `Send + Sync` so command functions can use `?`
/// on store, configuration and I/O errors alike.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Favourites file: {}", path.display());
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used by the terminal host to display user notifications.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal errors in the binary; library code returns `Result`.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("No anime list in favourites file");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
