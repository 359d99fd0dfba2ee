// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive terminal sessions.
//!
//! A host owns the terminal once it is opened; the launcher only describes
//! what to seed it with.

use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

use super::args::command_line;
use super::decode::Encoding;
use super::handle::ProcessHandle;
use super::launcher::shell_command;
use crate::core::platform::Platform;

/// Name given to terminals unless configured otherwise.
pub const DEFAULT_TERMINAL_NAME: &str = "F# Application";

/// What a terminal should be opened with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalRequest {
    pub name: String,
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl TerminalRequest {
    /// The line typed into the terminal: program and arguments joined as is.
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Something that can open an interactive terminal seeded with a command.
pub trait TerminalHost {
    type Terminal;

    fn open(&self, request: TerminalRequest) -> Self::Terminal;
}

/// Runs the request in the current console, sharing its stdio.
///
/// On Windows the typed line goes through `cmd.exe`, which re-parses the
/// already quoted arguments. On posix the program runs with the argument
/// vector as is, so spaces and shell metacharacters stay inside their
/// argument.
///
/// # Panics
///
/// `open` panics if called outside a Tokio runtime.
#[derive(Debug, Clone, Copy)]
pub struct InheritTerminal {
    platform: Platform,
}

impl InheritTerminal {
    #[must_use]
    pub const fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl TerminalHost for InheritTerminal {
    type Terminal = ProcessHandle;

    fn open(&self, request: TerminalRequest) -> ProcessHandle {
        let line = request.command_line();
        let mut command = match self.platform {
            Platform::Windows => shell_command(self.platform, &line),
            Platform::Posix => {
                let mut command = Command::new(&request.program);
                command.args(&request.args);
                command
            }
        };
        command
            .current_dir(&request.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        tracing::debug!(terminal = %request.name, cmd = %line, "open terminal");
        ProcessHandle::start(
            command,
            command_line(&request.program, &request.args),
            Encoding::default(),
        )
    }
}
