//! Day/night theme controller.
//!
//! The whole interface is colored from two tokens, `dark` and `light`. Switching modes swaps
//! them. The initial mode is read once from the host at startup and never re-read.

use crate::error::ShelfError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

const INK: Rgb = Rgb(10, 10, 20);
const PAPER: Rgb = Rgb(255, 255, 255);

/// The two process-wide color tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTokens {
    pub dark: Rgb,
    pub light: Rgb,
}

impl ColorTokens {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Night => Self {
                dark: PAPER,
                light: INK,
            },
            ThemeMode::Day => Self {
                dark: INK,
                light: PAPER,
            },
        }
    }
}

/// Theme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Night,
    #[default]
    Day,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Night => "night",
            ThemeMode::Day => "day",
        }
    }

    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Night => ThemeMode::Day,
            ThemeMode::Day => ThemeMode::Night,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ShelfError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "night" => Ok(ThemeMode::Night),
            "day" => Ok(ThemeMode::Day),
            other => Err(ShelfError::invalid_argument(format!(
                "unknown theme '{other}', expected 'day' or 'night'"
            ))),
        }
    }
}

/// The host's ambient light-scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemePreference {
    Dark,
    Light,
    Unknown,
}

impl SchemePreference {
    /// Read the preference from the environment.
    ///
    /// Terminals such as rxvt, Konsole and iTerm export `COLORFGBG="fg;bg"`; background color
    /// indices 0-6 and 8 are dark.
    pub fn detect() -> Self {
        Self::from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
    }

    pub fn from_colorfgbg(value: Option<&str>) -> Self {
        let Some(bg) = value.and_then(|v| v.rsplit(';').next()) else {
            return SchemePreference::Unknown;
        };
        match bg.trim().parse::<u8>() {
            Ok(0..=6) | Ok(8) => SchemePreference::Dark,
            Ok(_) => SchemePreference::Light,
            Err(_) => SchemePreference::Unknown,
        }
    }

    /// Dark-preferred maps to night, anything else to day.
    pub fn initial_mode(self) -> ThemeMode {
        match self {
            SchemePreference::Dark => ThemeMode::Night,
            SchemePreference::Light | SchemePreference::Unknown => ThemeMode::Day,
        }
    }
}

/// Holds the active mode and its tokens.
#[derive(Debug, Clone)]
pub struct ThemeController {
    mode: ThemeMode,
    tokens: ColorTokens,
}

impl ThemeController {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            tokens: ColorTokens::for_mode(mode),
        }
    }

    /// Startup mode: an explicit choice wins, otherwise the host preference.
    pub fn from_preference(explicit: Option<ThemeMode>, preference: SchemePreference) -> Self {
        let mode = explicit.unwrap_or_else(|| preference.initial_mode());
        log::debug!("initial theme {mode} (explicit={explicit:?}, host={preference:?})");
        Self::new(mode)
    }

    /// Switch modes and return the new tokens.
    pub fn apply(&mut self, mode: ThemeMode) -> ColorTokens {
        self.mode = mode;
        self.tokens = ColorTokens::for_mode(mode);
        self.tokens
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn tokens(&self) -> ColorTokens {
        self.tokens
    }
}
