mod favourites;
mod host;

pub use favourites::FavouritesError;
pub use favourites::FavouritesStore;
pub use favourites::NOTIFICATION_DURATION_MS;
pub use host::Host;
pub use host::TerminalHost;
