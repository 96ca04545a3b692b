use tabled::Table;

use crate::{
    Res, info,
    management::{FavouritesStore, Host},
    types::{Category, ClearTarget, FavouriteTableRow},
    utils, warning,
};

pub async fn add<H: Host>(store: &FavouritesStore<H>, category: Category, id: &str) -> Res<()> {
    store.add_favourite(category, id).await?;
    Ok(())
}

pub async fn remove<H: Host>(store: &FavouritesStore<H>, category: Category, id: &str) -> Res<()> {
    store.remove_favourite(category, id).await?;
    Ok(())
}

/// Prints the favourites of `category`, or of every category when `None`.
pub async fn list<H: Host>(store: &FavouritesStore<H>, category: Option<Category>) -> Res<()> {
    let categories = match category {
        Some(c) => vec![c],
        None => Category::ALL.to_vec(),
    };

    let mut table_rows: Vec<FavouriteTableRow> = Vec::new();
    for category in categories {
        match store.get_favourites(category).await? {
            Some(entries) => table_rows.extend(utils::favourite_table_rows(category, &entries)),
            None => warning!(
                "No {} list in {}",
                category,
                store.path().display()
            ),
        }
    }

    if table_rows.is_empty() {
        info!("No favourites yet.");
        return Ok(());
    }

    println!("{}", Table::new(table_rows));
    Ok(())
}

pub async fn clear<H: Host>(store: &FavouritesStore<H>, target: ClearTarget) -> Res<()> {
    store.clear_favourites(target).await?;
    match target {
        ClearTarget::All => info!("All favourites cleared."),
        ClearTarget::Category(category) => info!("{} favourites cleared.", category),
    }
    Ok(())
}
