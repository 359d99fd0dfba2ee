// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command-line interface built with clap derive.
//!
//! # Command Structure
//!
//! ```text
//! ionide [global options] <command>
//!   split <LINE>
//!   run <LOCATION> [--prefix P] [--args S] [--in-dir]
//!   exec <LOCATION> [--prefix P] [--args S]
//!   shell <LOCATION> [--prefix P] [--args S]
//!   settings
//!   fake [TARGET]
//!   version
//! ```

pub mod global;
pub mod launch;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::launch::{FakeArgs, LaunchArgs, RunArgs, SplitArgs};
use clap::{Parser, Subcommand};

/// Process and settings helpers for Ionide tooling.
#[derive(Debug, Parser)]
#[command(
    name = "ionide",
    author,
    version,
    about = "Process and settings helpers for Ionide tooling",
    long_about = "ionide-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Launches the .NET tools an editor session relies on (FAKE,\n\
                  Paket, FSI) the same way on Windows and on mono hosts.",
    after_help = "SETTINGS:\n\n\
                  Per-project options are read from `.ionide` (TOML) in the\n\
                  workspace root, see `ionide settings`. A missing or broken\n\
                  file is not an error: built-in defaults apply."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Splits a command line into arguments and prints them as JSON.
    Split(SplitArgs),

    /// Runs a tool, streaming its output; exits with the tool's exit code.
    Run(RunArgs),

    /// Runs a command line through the shell and prints the collected output.
    Exec(LaunchArgs),

    /// Runs a tool attached to this terminal.
    Shell(LaunchArgs),

    /// Prints the `.ionide` settings of the workspace as JSON.
    Settings,

    /// Runs the FAKE build configured for the workspace.
    Fake(FakeArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Tries to parse command-line arguments from an iterator.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// output was requested.
pub fn try_parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}
