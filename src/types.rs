use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tabled::Tabled;

use crate::management::FavouritesError;

/// Fixed grouping under which favourites are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Movies,
    TvShows,
    Anime,
}

impl Category {
    /// All categories, in the order they appear in the favourites file.
    pub const ALL: [Category; 3] = [Category::Movies, Category::TvShows, Category::Anime];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Movies => "movies",
            Category::TvShows => "tvshows",
            Category::Anime => "anime",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FavouritesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "movies" => Ok(Category::Movies),
            "tvshows" => Ok(Category::TvShows),
            "anime" => Ok(Category::Anime),
            _ => Err(FavouritesError::InvalidCategory(s.to_string())),
        }
    }
}

/// What a clear operation should empty: one category or the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearTarget {
    All,
    Category(Category),
}

impl fmt::Display for ClearTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClearTarget::All => f.write_str("all"),
            ClearTarget::Category(category) => category.fmt(f),
        }
    }
}

impl FromStr for ClearTarget {
    type Err = FavouritesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(ClearTarget::All);
        }
        s.parse().map(ClearTarget::Category)
    }
}

impl From<Category> for ClearTarget {
    fn from(category: Category) -> Self {
        ClearTarget::Category(category)
    }
}

/// A single favourited item, identified only by its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavouriteEntry {
    pub id: String,
}

impl FavouriteEntry {
    pub fn new(id: impl fmt::Display) -> Self {
        Self { id: id.to_string() }
    }
}

/// In-memory form of `favourites.json`.
///
/// A category is `None` when the file on disk lacks its key. Unknown
/// top-level keys are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FavouritesDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movies: Option<Vec<FavouriteEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvshows: Option<Vec<FavouriteEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anime: Option<Vec<FavouriteEntry>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FavouritesDocument {
    /// Document with every category present and empty.
    pub fn skeleton() -> Self {
        Self {
            movies: Some(Vec::new()),
            tvshows: Some(Vec::new()),
            anime: Some(Vec::new()),
            extra: Map::new(),
        }
    }

    pub fn get(&self, category: Category) -> Option<&Vec<FavouriteEntry>> {
        match category {
            Category::Movies => self.movies.as_ref(),
            Category::TvShows => self.tvshows.as_ref(),
            Category::Anime => self.anime.as_ref(),
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut Option<Vec<FavouriteEntry>> {
        match category {
            Category::Movies => &mut self.movies,
            Category::TvShows => &mut self.tvshows,
            Category::Anime => &mut self.anime,
        }
    }

    pub fn set(&mut self, category: Category, entries: Vec<FavouriteEntry>) {
        *self.slot_mut(category) = Some(entries);
    }

    pub fn contains(&self, category: Category, id: &str) -> bool {
        self.get(category)
            .is_some_and(|entries| entries.iter().any(|fav| fav.id == id))
    }

    /// Appends `id` to the category unless an entry with that id exists.
    ///
    /// A category missing from the document is created. Returns whether an
    /// entry was appended.
    pub fn add_entry(&mut self, category: Category, id: &str) -> bool {
        let entries = self.slot_mut(category).get_or_insert_with(Vec::new);
        if entries.iter().any(|fav| fav.id == id) {
            return false;
        }
        entries.push(FavouriteEntry::new(id));
        true
    }

    /// Drops every entry with the given id and returns how many were removed.
    ///
    /// A category missing from the document stays missing.
    pub fn remove_entry(&mut self, category: Category, id: &str) -> usize {
        match self.slot_mut(category) {
            Some(entries) => {
                let before = entries.len();
                entries.retain(|fav| fav.id != id);
                before - entries.len()
            }
            None => 0,
        }
    }

    /// Total number of entries across all fixed categories.
    pub fn count(&self) -> usize {
        Category::ALL
            .iter()
            .map(|c| self.get(*c).map_or(0, |entries| entries.len()))
            .sum()
    }
}

#[derive(Tabled)]
pub struct FavouriteTableRow {
    pub category: String,
    pub id: String,
}
