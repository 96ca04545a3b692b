use popfavs::config::*;

#[test]
fn test_data_dir_is_app_specific() {
    assert!(data_dir().ends_with("popfavs"));
}

#[test]
fn test_favourites_path_is_inside_profile_dir() {
    let path = favourites_path();

    assert!(path.ends_with(FAVOURITES_FILE_NAME));
    assert_eq!(path.parent().unwrap(), profile_dir());
}

#[test]
fn test_addon_name_is_never_empty() {
    assert!(!addon_name().trim().is_empty());
}
