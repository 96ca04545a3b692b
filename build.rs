//! Build script for the popfavs favourites CLI.
//!
//! Copies the `.env.example` configuration template from the crate root into
//! the user's local data directory, next to where the application looks for
//! its `.env` file and keeps `favourites.json`.

use std::{env, fs, path::PathBuf};

/// Copies the configuration template into the local data directory.
///
/// # Destination Location
///
/// - Linux: `~/.local/share/popfavs/.env.example`
/// - macOS: `~/Library/Application Support/popfavs/.env.example`
/// - Windows: `%LOCALAPPDATA%/popfavs/.env.example`
///
/// A missing template only produces a cargo warning. Directory creation and
/// copy failures abort the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("popfavs");
    fs::create_dir_all(&out_dir)?;

    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
