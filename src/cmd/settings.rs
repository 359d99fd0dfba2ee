// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings command implementation.

use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::settings::Settings;

/// Prints the workspace settings as pretty JSON.
///
/// A missing file prints the empty settings; a broken one is reported.
///
/// # Errors
///
/// Returns an error if `.ionide` exists but cannot be read or parsed.
pub fn run_settings_command(root: &Path) -> Result<()> {
    let settings = match Settings::load(root) {
        Ok(settings) => settings,
        Err(ConfigError::NotFound(path)) => {
            tracing::info!(%path, "no settings file");
            Settings::default()
        }
        Err(e) => return Err(e.into()),
    };
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}
