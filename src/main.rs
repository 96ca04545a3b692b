use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use popfavs::{
    cli, config, error, logging,
    management::{FavouritesStore, TerminalHost},
    types::{Category, ClearTarget},
    utils,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Directory holding favourites.json (overrides POPFAVS_PROFILE_DIR)
    #[clap(long, global = true)]
    profile_dir: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add an id to a category
    Add(EntryOptions),

    /// Remove an id from a category
    Remove(EntryOptions),

    /// List favourites of one category, or all of them
    List(ListOptions),

    /// Empty a category, or reset everything with `all`
    Clear(ClearOptions),

    /// Show the location of the favourites file
    Path,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct EntryOptions {
    /// movies, tvshows or anime
    #[clap(value_parser = utils::parse_category)]
    pub category: Category,

    /// Identifier of the item, e.g. an IMDb id
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ListOptions {
    /// movies, tvshows or anime; omit to list every category
    #[clap(value_parser = utils::parse_category)]
    pub category: Option<Category>,
}

#[derive(Parser, Debug, Clone)]
pub struct ClearOptions {
    /// movies, tvshows, anime or all
    #[clap(value_parser = utils::parse_clear_target)]
    pub target: ClearTarget,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let store = match cli.profile_dir {
        Some(dir) => FavouritesStore::new(dir.join(config::FAVOURITES_FILE_NAME), TerminalHost)
            .with_addon_name(config::addon_name()),
        None => FavouritesStore::from_config(TerminalHost),
    };

    let result = match cli.command {
        Command::Add(opt) => cli::add(&store, opt.category, &opt.id).await,
        Command::Remove(opt) => cli::remove(&store, opt.category, &opt.id).await,
        Command::List(opt) => cli::list(&store, opt.category).await,
        Command::Clear(opt) => cli::clear(&store, opt.target).await,
        Command::Path => cli::path(&store).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{}", e);
    }
}
