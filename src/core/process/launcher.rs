// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Platform-aware process launching.
//!
//! ```text
//! spawn(location, prefix, args)
//!   split_args(args)
//!   primary || prefix == ""  --> location [args..]
//!   otherwise                --> prefix location [args..]
//!   cwd = workspace root (spawn_in_dir: parent of location)
//!       --> ProcessHandle
//!
//! exec(location, prefix, args)
//!   raw join, no splitting --> sh -c / cmd.exe /d /s /c
//!       --> Deferred<ExecOutput>  (never rejects)
//! ```

use bon::Builder;
use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::Command;
use tracing::debug;

use super::args::{command_line, quote_if_spaced, split_args};
use super::decode::{Encoding, StreamDecoder};
use super::handle::{ExitOutcome, ProcessHandle};
use super::sink::LogSink;
use super::terminal::{DEFAULT_TERMINAL_NAME, TerminalHost, TerminalRequest};
use crate::core::platform::Platform;
use crate::deferred::Deferred;
use crate::error::ProcessError;

/// Program and argument vector chosen for one launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl LaunchCommand {
    /// Display form with spaced arguments quoted.
    #[must_use]
    pub fn command_line(&self) -> String {
        command_line(&self.program.to_string_lossy(), &self.args)
    }
}

/// Result of [`Launcher::exec`]: the carried error plus both output texts.
#[derive(Debug, Default)]
pub struct ExecOutput {
    /// Launch failure, non-zero exit or signal; `None` on a clean exit.
    pub error: Option<ProcessError>,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Splits into `(error, stdout, stderr)`.
    #[must_use]
    pub fn into_parts(self) -> (Option<ProcessError>, String, String) {
        (self.error, self.stdout, self.stderr)
    }
}

/// Launches tools relative to a workspace.
///
/// The platform is injected so that launch decisions can be exercised for
/// either platform on any host.
#[derive(Debug, Clone, Builder)]
pub struct Launcher {
    #[builder(setters(name = with_workspace_root), into)]
    workspace_root: PathBuf,
    #[builder(setters(name = with_platform), default = Platform::current())]
    platform: Platform,
    #[builder(setters(name = with_terminal_name), into, default = DEFAULT_TERMINAL_NAME.to_string())]
    terminal_name: String,
    #[builder(setters(name = with_encoding), default)]
    encoding: Encoding,
}

impl Launcher {
    /// Launcher for the current platform rooted at `workspace_root`.
    pub fn new(workspace_root: impl Into<PathBuf>) -> Self {
        Self::builder().with_workspace_root(workspace_root).build()
    }

    #[must_use]
    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    #[must_use]
    pub fn terminal_name(&self) -> &str {
        &self.terminal_name
    }

    /// Chooses program and arguments for `location` on this launcher's platform.
    #[must_use]
    pub fn command_for(&self, location: &Path, prefix: &str, args: &str) -> LaunchCommand {
        let args = split_args(args);
        if self.platform.is_primary() || prefix.is_empty() {
            LaunchCommand {
                program: location.to_path_buf(),
                args,
            }
        } else {
            let mut full = Vec::with_capacity(args.len() + 1);
            full.push(location.to_string_lossy().into_owned());
            full.extend(args);
            LaunchCommand {
                program: PathBuf::from(prefix),
                args: full,
            }
        }
    }

    /// Spawns `location` with the workspace root as working directory.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn spawn(&self, location: impl AsRef<Path>, prefix: &str, args: &str) -> ProcessHandle {
        self.spawn_at(location.as_ref(), prefix, args, &self.workspace_root)
    }

    /// Spawns `location` inside the directory that contains it.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn spawn_in_dir(
        &self,
        location: impl AsRef<Path>,
        prefix: &str,
        args: &str,
    ) -> ProcessHandle {
        let location = location.as_ref();
        let cwd = self.directory_of(location);
        self.spawn_at(location, prefix, args, &cwd)
    }

    /// Opens an interactive terminal on `host` seeded with the command.
    ///
    /// On the primary platform arguments containing spaces are quoted again,
    /// since the terminal re-parses the typed line.
    ///
    /// # Panics
    ///
    /// Hosts that start a process, such as
    /// [`InheritTerminal`](super::terminal::InheritTerminal), panic outside a
    /// Tokio runtime.
    pub fn spawn_with_shell<H: TerminalHost>(
        &self,
        host: &H,
        location: impl AsRef<Path>,
        prefix: &str,
        args: &str,
    ) -> H::Terminal {
        let launch = self.command_for(location.as_ref(), prefix, args);
        let args = if self.platform.is_primary() {
            launch
                .args
                .iter()
                .map(|a| quote_if_spaced(a).into_owned())
                .collect()
        } else {
            launch.args
        };

        host.open(TerminalRequest {
            name: self.terminal_name.clone(),
            program: launch.program.to_string_lossy().into_owned(),
            args,
            cwd: self.workspace_root.clone(),
        })
    }

    /// Raw command line used by [`Launcher::exec`]; arguments are not split.
    #[must_use]
    pub fn exec_line(&self, location: &Path, prefix: &str, args: &str) -> String {
        let location = location.to_string_lossy();
        let prefix = if self.platform.is_primary() {
            ""
        } else {
            prefix
        };
        [prefix, location.as_ref(), args]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Runs the command through the platform shell and collects its output.
    ///
    /// The command starts immediately. Always resolves exactly once; failures
    /// travel in [`ExecOutput::error`].
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn exec(
        &self,
        location: impl AsRef<Path>,
        prefix: &str,
        args: &str,
    ) -> Deferred<ExecOutput, Infallible> {
        let line = self.exec_line(location.as_ref(), prefix, args);
        let mut command = shell_command(self.platform, &line);
        command
            .current_dir(&self.workspace_root)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        hide_console_window(&mut command);

        debug!(cwd = %self.workspace_root.display(), cmd = %line, "exec");
        let task = tokio::spawn(collect(command, line.clone(), self.encoding));
        Deferred::new(async move {
            Ok(task.await.unwrap_or_else(|join_error| ExecOutput {
                error: Some(ProcessError::Wait {
                    command: line,
                    source: std::io::Error::other(join_error),
                }),
                ..ExecOutput::default()
            }))
        })
    }

    /// Spawns and streams stdout, stderr and errors into `sink`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn spawn_with_notification<S>(
        &self,
        location: impl AsRef<Path>,
        prefix: &str,
        args: &str,
        sink: S,
    ) where
        S: LogSink + 'static,
    {
        notify(self.spawn(location, prefix, args), Arc::new(sink));
    }

    /// Like [`Launcher::spawn_with_notification`], inside the location's directory.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn spawn_with_notification_in_dir<S>(
        &self,
        location: impl AsRef<Path>,
        prefix: &str,
        args: &str,
        sink: S,
    ) where
        S: LogSink + 'static,
    {
        notify(self.spawn_in_dir(location, prefix, args), Arc::new(sink));
    }

    fn directory_of(&self, location: &Path) -> PathBuf {
        match location.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => self.workspace_root.clone(),
        }
    }

    fn spawn_at(&self, location: &Path, prefix: &str, args: &str, cwd: &Path) -> ProcessHandle {
        let launch = self.command_for(location, prefix, args);
        let line = launch.command_line();

        let mut command = Command::new(&launch.program);
        command
            .args(&launch.args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        hide_console_window(&mut command);

        debug!(cwd = %cwd.display(), "cd");
        debug!(cmd = %line, "spawn");
        ProcessHandle::start(command, line, self.encoding)
    }
}

/// Builds a command running `line` through the platform shell.
pub(crate) fn shell_command(platform: Platform, line: &str) -> Command {
    let (shell, flags) = platform.shell();
    let mut command = Command::new(shell);
    command.args(flags);
    push_shell_line(&mut command, platform, line);
    command
}

#[cfg(windows)]
fn push_shell_line(command: &mut Command, platform: Platform, line: &str) {
    if platform == Platform::Windows {
        // cmd.exe /s strips the outer quotes and keeps the rest verbatim
        command.raw_arg(format!("\"{line}\""));
    } else {
        command.arg(line);
    }
}

#[cfg(not(windows))]
fn push_shell_line(command: &mut Command, _platform: Platform, line: &str) {
    command.arg(line);
}

#[cfg(windows)]
fn hide_console_window(command: &mut Command) {
    command.creation_flags(windows::Win32::System::Threading::CREATE_NO_WINDOW.0);
}

#[cfg(not(windows))]
fn hide_console_window(_command: &mut Command) {}

fn notify<S: LogSink + 'static>(handle: ProcessHandle, sink: Arc<S>) {
    let stdout = Arc::clone(&sink);
    let stderr = Arc::clone(&sink);
    handle
        .on_output(move |text| stdout.append(text))
        .on_error_output(move |text| stderr.append(text))
        .on_error(move |err| sink.append(&format!("{err}\n")))
        .detach();
}

async fn collect(mut command: Command, line: String, encoding: Encoding) -> ExecOutput {
    let output = match command.output().await {
        Ok(output) => output,
        Err(source) => {
            return ExecOutput {
                error: Some(ProcessError::SpawnFailed {
                    command: line,
                    source,
                }),
                ..ExecOutput::default()
            };
        }
    };

    let outcome = ExitOutcome::from(output.status);
    let error = match (outcome.exit_code, outcome.termination_signal) {
        (Some(0), _) => None,
        (Some(code), _) => Some(ProcessError::NonZeroExit {
            command: line.clone(),
            code,
        }),
        (None, Some(signal)) => Some(ProcessError::Terminated {
            command: line.clone(),
            signal,
        }),
        (None, None) => Some(ProcessError::Terminated {
            command: line.clone(),
            signal: "unknown".to_string(),
        }),
    };
    if let Some(err) = &error {
        debug!(error = %err, "exec finished with error");
    }

    ExecOutput {
        error,
        stdout: decode_all(&output.stdout, encoding),
        stderr: decode_all(&output.stderr, encoding),
    }
}

fn decode_all(bytes: &[u8], encoding: Encoding) -> String {
    let mut decoder = StreamDecoder::new(encoding);
    let mut text = decoder.decode(bytes);
    text.push_str(&decoder.finish());
    text
}

