//! # CLI Module
//!
//! Command implementations for the `popfavs` binary. Each command builds on
//! [`crate::management::FavouritesStore`] and reports results through the
//! terminal output macros.
//!
//! ## Commands
//!
//! - [`add`] - Adds an id to a category
//! - [`remove`] - Removes an id from a category
//! - [`list`] - Prints one category, or all of them, as a table
//! - [`clear`] - Empties a category or resets the whole file
//! - [`path`] - Shows where the favourites file lives
//!
//! ## Usage
//!
//! ```bash
//! popfavs add movies tt1234567
//! popfavs list movies
//! popfavs remove movies tt1234567
//! popfavs clear all
//! ```
//!
//! Errors are returned as [`crate::Res`] and turned into a fatal message by
//! the binary.

mod favourites;
mod path;

pub use favourites::add;
pub use favourites::clear;
pub use favourites::list;
pub use favourites::remove;
pub use path::path;
