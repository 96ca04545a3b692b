use crate::{
    Res, info,
    management::{FavouritesStore, Host},
};

/// Prints the favourites file location and whether it exists yet.
pub async fn path<H: Host>(store: &FavouritesStore<H>) -> Res<()> {
    info!("Favourites file: {}", store.path().display());
    if !store.exists().await {
        info!("The file will be created on first use.");
    }
    Ok(())
}
