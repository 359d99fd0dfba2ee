// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Options shared by every command.
//!
//! ```text
//! --workspace DIR   <- root for .ionide and default cwd (default: current dir)
//! --platform P      <- windows | posix (default: host)
//! --log-level N     <- stderr verbosity 0-5
//! --log-file FILE   <- also log to FILE at debug
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::core::platform::Platform;
use crate::logging::{LogConfig, LogLevel};

#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Workspace root directory.
    #[arg(short = 'w', long = "workspace", value_name = "DIR", global = true)]
    pub workspace: Option<PathBuf>,

    /// Platform rules to apply (windows runs tools directly, posix honours prefixes).
    #[arg(long, value_name = "PLATFORM", global = true)]
    pub platform: Option<Platform>,

    /// Console log level (0=off, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", global = true,
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// `--workspace`, else the current directory.
    #[must_use]
    pub fn workspace_root(&self) -> PathBuf {
        self.workspace
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_default()
    }

    /// Logging setup requested on the command line.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        let console_level = self
            .log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or_default();

        LogConfig::builder()
            .with_console_level(console_level)
            .maybe_with_log_file(self.log_file.clone())
            .build()
    }
}
