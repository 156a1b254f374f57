//! shelfview - Terminal Book Catalog Browser

use anyhow::{Context, Result};
use clap::{value_parser, Arg, Command};
use shelfview::config::Config;
use shelfview::render::TerminalUI;
use shelfview::theme::{SchemePreference, ThemeController, ThemeMode};
use shelfview::{Application, Catalog};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    let matches = Command::new("shelfview")
        .version(shelfview::VERSION)
        .about("Browse a book catalog in the terminal")
        .long_about(
            "shelfview shows a paginated list of books that can be filtered by title, author \
             and genre. Without a catalog file it opens the bundled sample catalog.",
        )
        .arg(
            Arg::new("catalog")
                .help("Path to a JSON catalog file")
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("page-size")
                .long("page-size")
                .short('p')
                .help("Number of books revealed per page")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .short('t')
                .help("Start in the day or night theme")
                .value_parser(["day", "night"]),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file instead of the default location")
                .value_parser(value_parser!(PathBuf)),
        )
        .get_matches();

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let theme_flag = matches
        .get_one::<String>("theme")
        .map(|value| value.parse::<ThemeMode>())
        .transpose()?;

    let config = config.with_overrides(
        matches.get_one::<usize>("page-size").copied(),
        theme_flag,
        matches.get_one::<PathBuf>("catalog").cloned(),
    );
    config.validate()?;

    let catalog = match &config.catalog {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => Catalog::sample()?,
    };
    let catalog = match config.page_size {
        Some(page_size) => catalog.with_page_size(page_size)?,
        None => catalog,
    };

    let theme = ThemeController::from_preference(config.theme, SchemePreference::detect());

    let ui_renderer = Box::new(TerminalUI::new()?);
    let mut app = Application::new(catalog, theme, ui_renderer);

    app.run().await?;

    Ok(())
}
