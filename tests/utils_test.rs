use popfavs::types::{Category, ClearTarget, FavouriteEntry};
use popfavs::utils::*;

#[test]
fn test_parse_category() {
    assert_eq!(parse_category("movies"), Ok(Category::Movies));

    let err = parse_category("books").unwrap_err();
    assert!(err.contains("books"));
    assert!(err.contains("movies, tvshows, anime"));
}

#[test]
fn test_parse_clear_target() {
    assert_eq!(parse_clear_target("all"), Ok(ClearTarget::All));
    assert_eq!(
        parse_clear_target("tvshows"),
        Ok(ClearTarget::Category(Category::TvShows))
    );
    assert!(parse_clear_target("").is_err());
}

#[test]
fn test_favourite_table_rows() {
    let entries = vec![FavouriteEntry::new("tt1"), FavouriteEntry::new(42)];

    let rows = favourite_table_rows(Category::Movies, &entries);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].category, "movies");
    assert_eq!(rows[0].id, "tt1");
    assert_eq!(rows[1].id, "42");

    assert!(favourite_table_rows(Category::Anime, &[]).is_empty());
}
