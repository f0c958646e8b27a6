// locale.rs — locale codes and the persisted language preference
//
// The site ships in exactly two languages. The active one is a single value
// kept in prefs.toml under the user config directory; a missing or
// unrecognized value falls back to Russian, the site's original language.
//
// Selection order for a run: explicit override (CLI) -> PORTFOLIO_LANG
// environment variable -> stored preference.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const PREFS_FILE: &str = "prefs.toml";
const APP_DIR: &str = "portfolio-site";

/// Environment override for the active locale.
pub const LANG_ENV: &str = "PORTFOLIO_LANG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }

    /// Uppercase code shown in the language switcher label.
    pub fn label(self) -> &'static str {
        match self {
            Locale::Ru => "RU",
            Locale::En => "EN",
        }
    }

    /// The other supported locale.
    pub fn toggled(self) -> Locale {
        match self {
            Locale::Ru => Locale::En,
            Locale::En => Locale::Ru,
        }
    }

    /// Exact-match parse of a locale code. Anything but "ru"/"en" is None.
    pub fn parse(code: &str) -> Option<Locale> {
        match code {
            "ru" => Some(Locale::Ru),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Prefs {
    lang: Option<String>,
}

/// File-backed store for the language preference. One slot, one value.
#[derive(Debug, Clone)]
pub struct LocaleStore {
    path: PathBuf,
}

impl LocaleStore {
    /// Store under the user config directory, or the working directory when
    /// the platform reports none.
    pub fn open_default() -> Self {
        let path = dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(PREFS_FILE))
            .unwrap_or_else(|| PathBuf::from(PREFS_FILE));
        Self { path }
    }

    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored preference. A missing file, unreadable file, or a
    /// value outside the supported set all yield the default locale.
    pub fn get(&self) -> Locale {
        let Ok(text) = fs::read_to_string(&self.path) else {
            return Locale::default();
        };
        let prefs: Prefs = toml::from_str(&text).unwrap_or_default();
        prefs
            .lang
            .as_deref()
            .and_then(Locale::parse)
            .unwrap_or_default()
    }

    /// Persist `locale`, creating parent directories as needed.
    pub fn set(&self, locale: Locale) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| self.store_err(source))?;
        }
        let prefs = Prefs {
            lang: Some(locale.as_str().to_owned()),
        };
        let text = toml::to_string(&prefs)
            .map_err(|e| self.store_err(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
        fs::write(&self.path, text).map_err(|source| self.store_err(source))?;
        Ok(())
    }

    /// Flip the stored preference and return the new value. The caller is
    /// expected to re-render everything afterwards.
    pub fn toggle(&self) -> Result<Locale> {
        let next = self.get().toggled();
        self.set(next)?;
        Ok(next)
    }

    fn store_err(&self, source: std::io::Error) -> Error {
        Error::Store {
            path: self.path.clone(),
            source,
        }
    }
}

/// Locale for this run: explicit override, then the environment, then the
/// stored preference.
pub fn resolve(override_locale: Option<Locale>, store: &LocaleStore) -> Locale {
    if let Some(locale) = override_locale {
        return locale;
    }
    if let Ok(value) = std::env::var(LANG_ENV) {
        if let Some(locale) = Locale::parse(value.trim()) {
            return locale;
        }
    }
    store.get()
}
