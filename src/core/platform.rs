// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Host platform selection.
//!
//! Windows is the primary platform: a tool location is directly executable
//! there. On POSIX hosts a prefix command (e.g. `mono`) may be needed to run
//! the same location.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating system family a launcher targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Posix,
}

impl Platform {
    /// Platform of the running binary.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Returns true on the platform where locations run without a prefix.
    #[must_use]
    pub const fn is_primary(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Shell program and flags used for raw command strings.
    #[must_use]
    pub const fn shell(self) -> (&'static str, &'static [&'static str]) {
        match self {
            Self::Windows => ("cmd.exe", &["/d", "/s", "/c"]),
            Self::Posix => ("/bin/sh", &["-c"]),
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::Posix => write!(f, "posix"),
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "windows" | "win" => Ok(Self::Windows),
            "posix" | "unix" | "linux" | "macos" => Ok(Self::Posix),
            _ => Err(format!("expected 'windows' or 'posix', got '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Platform;

    #[test]
    fn test_primary_platform() {
        assert!(Platform::Windows.is_primary());
        assert!(!Platform::Posix.is_primary());
    }

    #[test]
    fn test_platform_parse() {
        assert_eq!("Windows".parse::<Platform>(), Ok(Platform::Windows));
        assert_eq!("linux".parse::<Platform>(), Ok(Platform::Posix));
        assert!("beos".parse::<Platform>().is_err());
    }

    #[test]
    fn test_shell_selection() {
        assert_eq!(Platform::Posix.shell(), ("/bin/sh", &["-c"][..]));
        assert_eq!(Platform::Windows.shell().0, "cmd.exe");
    }
}
