// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the commands that start processes.

use clap::Args;

/// Arguments for the `split` command.
#[derive(Debug, Clone, Args)]
pub struct SplitArgs {
    /// Command line to split, e.g. `build "my target" --quiet`.
    #[arg(value_name = "LINE", allow_hyphen_values = true)]
    pub line: String,
}

/// Tool location plus its prefix and argument string.
#[derive(Debug, Clone, Args)]
pub struct LaunchArgs {
    /// Tool to run: a path, or a name looked up in PATH.
    #[arg(value_name = "LOCATION")]
    pub location: String,

    /// Command placed before the location on posix, e.g. `mono`.
    #[arg(short = 'p', long, value_name = "PREFIX", default_value = "")]
    pub prefix: String,

    /// Argument string, split with the usual quoting rules.
    #[arg(
        short = 'a',
        long,
        value_name = "ARGS",
        default_value = "",
        allow_hyphen_values = true
    )]
    pub args: String,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub launch: LaunchArgs,

    /// Use the directory containing the tool as working directory.
    #[arg(long = "in-dir")]
    pub in_dir: bool,
}

/// Arguments for the `fake` command.
#[derive(Debug, Clone, Default, Args)]
pub struct FakeArgs {
    /// Build target; defaults to `build` from the `[Fake]` settings.
    #[arg(value_name = "TARGET")]
    pub target: Option<String>,
}
