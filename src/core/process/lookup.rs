// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Executable lookup via PATH, cached per process.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{OnceLock, PoisonError, RwLock};

static EXECUTABLE_CACHE: OnceLock<RwLock<BTreeMap<String, PathBuf>>> = OnceLock::new();

fn exe_cache() -> &'static RwLock<BTreeMap<String, PathBuf>> {
    EXECUTABLE_CACHE.get_or_init(|| RwLock::new(BTreeMap::new()))
}

/// Finds the full path to an executable in PATH.
///
/// Hits are cached; misses are not, so a tool installed later is found.
#[must_use]
pub fn find_on_path(program: &str) -> Option<PathBuf> {
    if let Some(path) = exe_cache()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(program)
    {
        return Some(path.clone());
    }

    let path = which::which(program).ok()?;
    exe_cache()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(program.to_string(), path.clone());
    Some(path)
}

/// Turns a user-supplied location into a launchable path.
///
/// Anything that looks like a path is kept as given; a bare name is looked
/// up in PATH and kept as given when not found (the launch then reports it).
#[must_use]
pub fn resolve_location(location: &str) -> PathBuf {
    let path = Path::new(location);
    if path.components().count() > 1 || path.is_absolute() || path.exists() {
        return path.to_path_buf();
    }
    find_on_path(location).unwrap_or_else(|| path.to_path_buf())
}
