//! Link settings.
//!
//! The settings record is owned by the host: it is stored as camelCase JSON
//! (`bibleLanguage`, `defaultVersion`, ...) and merged over the defaults, so a
//! file written by an older version with missing keys still loads. Environment
//! variables (and a `.env` file) can override individual fields.

use std::env;
use std::path::{Path, PathBuf};

use dotenv::dotenv;
use serde::{Deserialize, Serialize};

use crate::bible::BibleLanguage;
use crate::constants::settings as keys;
use crate::error::{Error, Result};

/// Settings read by the link command on every invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Book-name vocabulary used by the parser.
    pub bible_language: BibleLanguage,
    /// Version assumed when the selection names none.
    pub default_version: String,
    /// Encode spaces in the URI as `+` rather than `%20`.
    pub encode_spaces_to_plus: bool,
    /// URL template with `{{verse}}`/`{{version}}` placeholders, or
    /// `{{book}}`/`{{chapter}}`/`{{verse}}`/`{{version}}`.
    pub link_template: String,
    /// Require the book to be a known name in `bible_language`.
    pub validate_book_name: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bible_language: BibleLanguage::En,
            default_version: String::new(),
            encode_spaces_to_plus: true,
            link_template: String::new(),
            validate_book_name: false,
        }
    }
}

impl Settings {
    /// Load the settings file from the default location, then apply
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let mut settings = Self::load_from_path(Self::settings_path()?)?;
        settings.apply_env();
        Ok(settings)
    }

    /// Load settings from a JSON file. A missing file yields the defaults.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
        let settings: Self =
            serde_json::from_str(&content).map_err(|e| Error::settings(e, path.to_path_buf()))?;

        tracing::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(|e| Error::io(e, parent.to_path_buf()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| Error::settings(e, path.to_path_buf()))?;
        fs_err::write(path, content).map_err(|e| Error::io(e, path.to_path_buf()))?;

        tracing::info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Default settings file: `<config dir>/verselink/settings.json`.
    pub fn settings_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(keys::CONFIG_DIR_NAME).join(keys::FILE_NAME))
            .ok_or_else(|| {
                Error::config(
                    "Could not determine the user configuration directory",
                    "Pass an explicit settings file path",
                )
            })
    }

    /// Expand `~` and environment variables in a user-supplied path.
    pub fn expand_path(path: &str) -> PathBuf {
        shellexpand::full(path).map_or_else(
            |_| PathBuf::from(shellexpand::tilde(path).as_ref()),
            |expanded| PathBuf::from(expanded.as_ref()),
        )
    }

    /// Apply overrides from the process environment and a `.env` file.
    pub fn apply_env(&mut self) {
        dotenv().ok();
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply overrides from any key lookup. Unparseable booleans are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(code) = lookup(keys::ENV_LANGUAGE) {
            self.bible_language = BibleLanguage::from_code(&code);
        }

        if let Some(version) = lookup(keys::ENV_DEFAULT_VERSION) {
            self.default_version = version;
        }

        if let Some(link_template) = lookup(keys::ENV_LINK_TEMPLATE) {
            self.link_template = link_template;
        }

        if let Some(value) = lookup(keys::ENV_ENCODE_SPACES_TO_PLUS) {
            match parse_flag(&value) {
                Some(flag) => self.encode_spaces_to_plus = flag,
                None => tracing::warn!(
                    "Ignoring {}={value:?}: not a boolean",
                    keys::ENV_ENCODE_SPACES_TO_PLUS
                ),
            }
        }

        if let Some(value) = lookup(keys::ENV_VALIDATE_BOOK_NAME) {
            match parse_flag(&value) {
                Some(flag) => self.validate_book_name = flag,
                None => tracing::warn!(
                    "Ignoring {}={value:?}: not a boolean",
                    keys::ENV_VALIDATE_BOOK_NAME
                ),
            }
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
