// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   split, run, exec, shell, settings, fake
//! ```

pub mod fake;
pub mod launch;
pub mod settings;
pub mod split;

use std::process::ExitCode;

use crate::core::process::ExitOutcome;

/// Exit code this binary should report for a finished child.
///
/// Codes outside `0..=255` and signal terminations map to failure.
#[must_use]
pub fn exit_code(outcome: &ExitOutcome) -> ExitCode {
    outcome
        .exit_code
        .and_then(|code| u8::try_from(code).ok())
        .map_or(ExitCode::FAILURE, ExitCode::from)
}
