use std::{
    fmt,
    io::Error,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use crate::{
    config,
    management::Host,
    types::{Category, ClearTarget, FavouriteEntry, FavouritesDocument},
};

/// How long add/remove notifications stay on screen.
pub const NOTIFICATION_DURATION_MS: u32 = 5000;

const INDENT: &[u8] = b"   ";

#[derive(Debug)]
pub enum FavouritesError {
    IoError(Error),
    ParseError(serde_json::Error),
    InvalidCategory(String),
}

impl fmt::Display for FavouritesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FavouritesError::IoError(e) => write!(f, "favourites file I/O failed: {}", e),
            FavouritesError::ParseError(e) => write!(f, "favourites file is not valid JSON: {}", e),
            FavouritesError::InvalidCategory(name) => write!(
                f,
                "unknown category '{}', expected one of movies, tvshows, anime",
                name
            ),
        }
    }
}

impl std::error::Error for FavouritesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FavouritesError::IoError(e) => Some(e),
            FavouritesError::ParseError(e) => Some(e),
            FavouritesError::InvalidCategory(_) => None,
        }
    }
}

impl From<Error> for FavouritesError {
    fn from(err: Error) -> Self {
        FavouritesError::IoError(err)
    }
}

/// File-backed favourites, one JSON document at a fixed path.
///
/// Nothing is cached between calls: every operation reloads the file, applies
/// its change and rewrites the whole document. There is no locking, so two
/// processes mutating the same file concurrently can lose an update (the last
/// writer wins).
pub struct FavouritesStore<H: Host> {
    path: PathBuf,
    addon_name: String,
    host: H,
}

impl<H: Host> FavouritesStore<H> {
    pub fn new(path: impl Into<PathBuf>, host: H) -> Self {
        Self {
            path: path.into(),
            addon_name: config::DEFAULT_ADDON_NAME.to_string(),
            host,
        }
    }

    /// Store at `config::favourites_path()`, titled with `config::addon_name()`.
    pub fn from_config(host: H) -> Self {
        Self::new(config::favourites_path(), host).with_addon_name(config::addon_name())
    }

    /// Sets the title used for user notifications.
    pub fn with_addon_name(mut self, addon_name: impl Into<String>) -> Self {
        self.addon_name = addon_name.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub async fn exists(&self) -> bool {
        async_fs::metadata(&self.path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }

    /// Reads the document, writing the skeleton first if the file is absent.
    pub async fn load(&self) -> Result<FavouritesDocument, FavouritesError> {
        if !self.exists().await {
            self.create_skeleton_file().await?;
        }

        let json = async_fs::read_to_string(&self.path)
            .await
            .map_err(|e| FavouritesError::IoError(e))?;
        serde_json::from_str(&json).map_err(|e| FavouritesError::ParseError(e))
    }

    /// Overwrites the file with `favourites`, indented by three spaces.
    pub async fn save(&self, favourites: &FavouritesDocument) -> Result<(), FavouritesError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent)
                    .await
                    .map_err(|e| FavouritesError::IoError(e))?;
            }
        }

        let json = render(favourites)?;
        async_fs::write(&self.path, json)
            .await
            .map_err(|e| FavouritesError::IoError(e))
    }

    pub async fn create_skeleton_file(&self) -> Result<(), FavouritesError> {
        self.save(&FavouritesDocument::skeleton()).await?;
        info!(path = %self.path.display(), "favourites file created");
        Ok(())
    }

    /// Adds `id` to `category` unless it is already there.
    ///
    /// The file is rewritten and the user notified even when nothing changed.
    pub async fn add_favourite(
        &self,
        category: Category,
        id: impl fmt::Display,
    ) -> Result<(), FavouritesError> {
        let id = id.to_string();
        let mut favourites = self.load().await?;
        debug!(?favourites, "add_favourite: loaded");

        let added = favourites.add_entry(category, &id);
        debug!(?favourites, added, "add_favourite: updated");

        self.save(&favourites).await?;
        self.host.notify_user(
            &self.addon_name,
            &format!("{} favourite has been added", category),
            NOTIFICATION_DURATION_MS,
        );
        Ok(())
    }

    /// Removes every entry of `category` whose id equals `id`, then asks the
    /// host to refresh its view.
    pub async fn remove_favourite(
        &self,
        category: Category,
        id: impl fmt::Display,
    ) -> Result<(), FavouritesError> {
        let id = id.to_string();
        let mut favourites = self.load().await?;
        debug!(?favourites, "remove_favourite: loaded");

        let removed = favourites.remove_entry(category, &id);
        debug!(?favourites, removed, "remove_favourite: updated");

        self.save(&favourites).await?;
        self.host.notify_user(
            &self.addon_name,
            &format!("{} favourite has been removed", category),
            NOTIFICATION_DURATION_MS,
        );
        self.host.refresh_container();
        Ok(())
    }

    /// Entries of `category`, or `None` when the file has no such key.
    pub async fn get_favourites(
        &self,
        category: Category,
    ) -> Result<Option<Vec<FavouriteEntry>>, FavouritesError> {
        let favourites = self.load().await?;
        debug!(?favourites, %category, "get_favourites");
        Ok(favourites.get(category).cloned())
    }

    /// Empties one category, or resets the whole file to the skeleton.
    ///
    /// Resetting drops any unknown top-level keys the file carried.
    pub async fn clear_favourites(
        &self,
        target: impl Into<ClearTarget>,
    ) -> Result<(), FavouritesError> {
        match target.into() {
            ClearTarget::All => self.create_skeleton_file().await,
            ClearTarget::Category(category) => {
                let mut favourites = self.load().await?;
                favourites.set(category, Vec::new());
                self.save(&favourites).await
            }
        }
    }
}

fn render(favourites: &FavouritesDocument) -> Result<Vec<u8>, FavouritesError> {
    let mut json = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut json, PrettyFormatter::with_indent(INDENT));
    favourites
        .serialize(&mut serializer)
        .map_err(|e| FavouritesError::ParseError(e))?;
    Ok(json)
}
