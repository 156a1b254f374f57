//! User configuration.
//!
//! Read from `<config dir>/shelfview/config.toml` when the `config` feature is enabled. Every
//! field is optional; command-line flags override whatever the file says.
//!
//! ```toml
//! page_size = 24
//! theme = "night"
//! catalog = "/home/me/books.json"
//! ```

use crate::error::{Result, ShelfError};
use crate::theme::ThemeMode;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Previews per page
    pub page_size: Option<usize>,
    /// Theme to start in, instead of the terminal's preference
    pub theme: Option<ThemeMode>,
    /// Catalog file to load instead of the bundled sample
    pub catalog: Option<PathBuf>,
}

impl Config {
    /// Location of the user's config file, if the platform has a config directory.
    #[cfg(feature = "config")]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shelfview").join("config.toml"))
    }

    /// Load the user's config file, or defaults when there is none.
    pub fn load() -> Result<Self> {
        #[cfg(feature = "config")]
        {
            match Self::default_path() {
                Some(path) => Self::load_from(path),
                None => Ok(Self::default()),
            }
        }
        #[cfg(not(feature = "config"))]
        {
            Ok(Self::default())
        }
    }

    /// Load a specific config file. A missing file yields defaults.
    #[cfg(feature = "config")]
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)
            .map_err(|err| ShelfError::file_error(format!("reading {}", path.display()), err))?;
        let config: Config = toml::from_str(&text)
            .map_err(|err| ShelfError::config(format!("{}: {}", path.display(), err)))?;
        config.validate()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    #[cfg(not(feature = "config"))]
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Err(ShelfError::config(format!(
            "cannot read {}: built without the `config` feature",
            path.as_ref().display()
        )))
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == Some(0) {
            return Err(ShelfError::config("page_size must be at least 1"));
        }
        Ok(())
    }

    /// Overlay command-line values; any value given on the command line wins.
    pub fn with_overrides(
        self,
        page_size: Option<usize>,
        theme: Option<ThemeMode>,
        catalog: Option<PathBuf>,
    ) -> Self {
        Self {
            page_size: page_size.or(self.page_size),
            theme: theme.or(self.theme),
            catalog: catalog.or(self.catalog),
        }
    }
}
