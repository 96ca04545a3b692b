use crate::types::{Category, ClearTarget, FavouriteEntry, FavouriteTableRow};

/// clap value parser for a category argument.
pub fn parse_category(s: &str) -> Result<Category, String> {
    s.parse::<Category>().map_err(|e| e.to_string())
}

/// clap value parser for the `clear` argument: a category or `all`.
pub fn parse_clear_target(s: &str) -> Result<ClearTarget, String> {
    s.parse::<ClearTarget>().map_err(|e| e.to_string())
}

pub fn favourite_table_rows(category: Category, entries: &[FavouriteEntry]) -> Vec<FavouriteTableRow> {
    entries
        .iter()
        .map(|fav| FavouriteTableRow {
            category: category.to_string(),
            id: fav.id.clone(),
        })
        .collect()
}
