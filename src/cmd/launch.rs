// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `run`, `exec` and `shell` command implementations.
//!
//! ```text
//! run   --> Launcher::spawn[_in_dir] --> stdout/stderr streamed --> exit code
//! exec  --> Launcher::exec           --> collected output       --> exit code
//! shell --> Launcher::spawn_with_shell(InheritTerminal)         --> exit code
//!
//! streamed output is echoed to the console and to TracingSink(<tool>)
//! ```

use std::path::Path;
use std::sync::Arc;

use tracing::error;

use crate::cli::global::GlobalOptions;
use crate::cli::launch::{LaunchArgs, RunArgs};
use crate::core::process::{
    ConsoleSink, ExitOutcome, InheritTerminal, Launcher, LogSink, ProcessHandle, TracingSink,
    lookup,
};
use crate::error::{ProcessError, Result};

/// Launcher for the workspace and platform chosen on the command line.
#[must_use]
pub fn build_launcher(global: &GlobalOptions) -> Launcher {
    Launcher::builder()
        .with_workspace_root(global.workspace_root())
        .with_platform(global.platform())
        .build()
}

/// Streams the handle's output to this console and waits for the exit.
///
/// Output is also forwarded to `tracing` under `channel`, so a `--log-file`
/// keeps a copy of what the tool printed.
pub async fn stream_to_console(handle: ProcessHandle, channel: &str) -> ExitOutcome {
    let log = Arc::new(TracingSink::new(channel));
    let stderr_log = Arc::clone(&log);
    let Ok(outcome) = handle
        .on_output(move |text| {
            ConsoleSink.append(text);
            log.append(text);
        })
        .on_error_output(move |text| {
            eprint!("{text}");
            stderr_log.append(text);
        })
        .on_error(|e| error!(cmd = %e.command(), error = %e, "process failed"))
        .to_promise()
        .await;
    outcome
}

/// Channel name for a tool: its file name without extension.
#[must_use]
pub fn channel_name(location: &Path) -> String {
    location
        .file_stem()
        .map_or_else(|| location.display().to_string(), |s| s.to_string_lossy().into_owned())
}

/// Handler for `run`.
pub async fn run_run_command(args: &RunArgs, launcher: &Launcher) -> ExitOutcome {
    let location = lookup::resolve_location(&args.launch.location);
    let handle = if args.in_dir {
        launcher.spawn_in_dir(&location, &args.launch.prefix, &args.launch.args)
    } else {
        launcher.spawn(&location, &args.launch.prefix, &args.launch.args)
    };
    stream_to_console(handle, &channel_name(&location)).await
}

/// Handler for `exec`.
///
/// # Errors
///
/// Returns the carried error when the shell could not be started or waited on.
/// Nonzero exits and signals are reported through the returned outcome.
pub async fn run_exec_command(args: &LaunchArgs, launcher: &Launcher) -> Result<ExitOutcome> {
    let location = lookup::resolve_location(&args.location);
    let Ok(output) = launcher.exec(&location, &args.prefix, &args.args).await;
    let (error, stdout, stderr) = output.into_parts();
    print!("{stdout}");
    eprint!("{stderr}");

    match error {
        None => Ok(ExitOutcome::with_code(0)),
        Some(ProcessError::NonZeroExit { code, .. }) => Ok(ExitOutcome::with_code(code)),
        Some(ProcessError::Terminated { signal, .. }) => Ok(ExitOutcome {
            exit_code: None,
            termination_signal: Some(signal),
        }),
        Some(e) => Err(e.into()),
    }
}

/// Handler for `shell`.
pub async fn run_shell_command(args: &LaunchArgs, launcher: &Launcher) -> ExitOutcome {
    let location = lookup::resolve_location(&args.location);
    let host = InheritTerminal::new(launcher.platform());
    let handle = launcher.spawn_with_shell(&host, &location, &args.prefix, &args.args);
    stream_to_console(handle, &channel_name(&location)).await
}
