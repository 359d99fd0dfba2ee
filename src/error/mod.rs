// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//! anyhow::Result      handlers and the binary
//!   ProcessError      SpawnFailed, Wait, NonZeroExit, Terminated
//!   ConfigError       NotFound, ReadError, ParseError, InvalidValue
//! ```
//!
//! Process errors never abort the caller: observers receive them by
//! reference and `exec` hands them back as data.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed while waiting for the process to finish.
    #[error("failed waiting for process '{command}': {source}")]
    Wait {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// Process was terminated by a signal.
    #[error("process '{command}' was terminated by {signal}")]
    Terminated { command: String, signal: String },
}

impl ProcessError {
    /// Command line the error refers to.
    #[must_use]
    pub fn command(&self) -> &str {
        match self {
            Self::SpawnFailed { command, .. }
            | Self::Wait { command, .. }
            | Self::NonZeroExit { command, .. }
            | Self::Terminated { command, .. } => command,
        }
    }
}

// --- Config Errors ---

/// Settings-file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings file does not exist.
    #[error("config file not found: {0}")]
    NotFound(String),

    /// Failed to read the settings file.
    #[error("failed to read config file '{path}': {message}")]
    ReadError { path: String, message: String },

    /// Failed to parse the settings file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// A value is outside its accepted range.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

#[cfg(test)]
mod tests;
