// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Split command implementation.

use crate::cli::launch::SplitArgs;
use crate::core::process::split_args;
use crate::error::Result;

/// Prints the tokens of `args.line` as a JSON array.
///
/// # Errors
///
/// Returns an error if the tokens cannot be serialized.
pub fn run_split_command(args: &SplitArgs) -> Result<()> {
    let tokens = split_args(&args.line);
    println!("{}", serde_json::to_string(&tokens)?);
    Ok(())
}
