// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project-local `.ionide` settings.
//!
//! ```text
//! <workspace>/.ionide (TOML)
//!   read_to_string --> config::File::from_str(Toml) --> Settings
//!
//! load_or_default(root, |s| s.fake?.command, "build.sh")
//!   missing file | parse error | absent field  --> default
//! ```
//!
//! # Example file
//!
//! ```toml
//! [Fake]
//! linuxPrefix = "mono"
//! command = "build.sh"
//! build = "Build"
//! test = "Test"
//!
//! [WebPreview]
//! host = "localhost"
//! port = 8083
//! startString = "listener started"
//! parameters = ["--fsiargs", "-d:WATCH"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::ConfigError;

/// File name looked up in the workspace root.
pub const SETTINGS_FILE: &str = ".ionide";

// Section and key names carry lowercase aliases: the config layer may fold
// keys to lowercase.

/// Contents of a `.ionide` file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(rename = "Fake", alias = "fake", skip_serializing_if = "Option::is_none")]
    pub fake: Option<FakeSettings>,
    #[serde(
        rename = "WebPreview",
        alias = "webpreview",
        skip_serializing_if = "Option::is_none"
    )]
    pub web_preview: Option<WebPreviewSettings>,
}

/// `[Fake]` section: how to run the FAKE build script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FakeSettings {
    #[serde(rename = "linuxPrefix", alias = "linuxprefix")]
    pub linux_prefix: Option<String>,
    pub command: Option<String>,
    pub build: Option<String>,
    pub test: Option<String>,
}

/// `[WebPreview]` section: the preview server started through FAKE.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebPreviewSettings {
    #[serde(rename = "linuxPrefix", alias = "linuxprefix")]
    pub linux_prefix: Option<String>,
    pub command: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub script: Option<String>,
    pub build: Option<String>,
    #[serde(rename = "startString", alias = "startstring")]
    pub start_string: Option<String>,
    pub parameters: Option<Vec<String>>,
    #[serde(rename = "startingPage", alias = "startingpage")]
    pub starting_page: Option<String>,
}

impl Settings {
    /// Location of the settings file for `root`.
    #[must_use]
    pub fn path(root: &Path) -> PathBuf {
        root.join(SETTINGS_FILE)
    }

    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if the text is not valid TOML or does
    /// not fit the settings schema.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Self::parse_named(content, "<string>")
    }

    /// Reads and parses `<root>/.ionide`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` when the file is absent,
    /// `ConfigError::ReadError` when it cannot be read and
    /// `ConfigError::ParseError` when it cannot be parsed.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = Self::path(root);
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse_named(&content, &path.display().to_string())
    }

    fn parse_named(content: &str, name: &str) -> Result<Self, ConfigError> {
        use config::{File, FileFormat};

        config::Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(|e| ConfigError::ParseError {
                path: name.to_string(),
                message: e.to_string(),
            })
    }
}

/// Loads `<root>/.ionide` and returns the field picked by `selector`.
///
/// Falls back to `default` when the file is missing or malformed, or the
/// selector yields `None`. Never fails.
///
/// # Example
///
/// ```no_run
/// use ionide_rs::settings::load_or_default;
/// use std::path::Path;
///
/// let command = load_or_default(
///     Path::new("."),
///     |s| s.fake.as_ref()?.command.clone(),
///     "build.sh".to_string(),
/// );
/// ```
pub fn load_or_default<T, F>(root: &Path, selector: F, default: T) -> T
where
    F: FnOnce(&Settings) -> Option<T>,
{
    match Settings::load(root) {
        Ok(settings) => selector(&settings).unwrap_or(default),
        Err(e) => {
            debug!(error = %e, "settings unavailable, using default");
            default
        }
    }
}
