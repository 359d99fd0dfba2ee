// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Live process handles with fluent event observers.
//!
//! ```text
//! Command::spawn()
//!   stdout reader --\
//!   stderr reader ---+--> mpsc (arrival order) --> dispatch task
//!   wait + drain  --/        ProcessEvent          observers, in
//!                                                  registration order
//!
//! spawn error --> Error(..) then Exit { None, None }
//! Exit is always the last event, sent once both streams hit EOF.
//! ```
//!
//! Dispatch starts when the handle is consumed by [`ProcessHandle::to_promise`]
//! or [`ProcessHandle::detach`]; events produced before that are queued, so
//! every registered observer sees every event.

use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use std::process::ExitStatus;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use super::decode::{Encoding, StreamDecoder};
use crate::deferred::Deferred;
use crate::error::ProcessError;

const READ_CHUNK: usize = 8192;

/// Terminal outcome of a process: exit code and/or terminating signal.
///
/// Both fields are `None` when the process never ran or could not be waited on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitOutcome {
    pub exit_code: Option<i32>,
    pub termination_signal: Option<String>,
}

impl ExitOutcome {
    #[must_use]
    pub const fn with_code(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            termination_signal: None,
        }
    }

    /// Returns true if the process exited with code 0.
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }
}

impl From<ExitStatus> for ExitOutcome {
    fn from(status: ExitStatus) -> Self {
        Self {
            exit_code: status.code(),
            termination_signal: exit_signal(status),
        }
    }
}

#[cfg(unix)]
fn exit_signal(status: ExitStatus) -> Option<String> {
    use std::os::unix::process::ExitStatusExt;
    status.signal().map(signal_name)
}

#[cfg(not(unix))]
fn exit_signal(_status: ExitStatus) -> Option<String> {
    None
}

/// Maps a POSIX signal number to its conventional name.
#[must_use]
pub fn signal_name(signal: i32) -> String {
    let name = match signal {
        1 => "SIGHUP",
        2 => "SIGINT",
        3 => "SIGQUIT",
        4 => "SIGILL",
        6 => "SIGABRT",
        8 => "SIGFPE",
        9 => "SIGKILL",
        11 => "SIGSEGV",
        13 => "SIGPIPE",
        14 => "SIGALRM",
        15 => "SIGTERM",
        _ => return format!("SIG{signal}"),
    };
    name.to_string()
}

/// One lifecycle event of a spawned process.
#[derive(Debug)]
pub enum ProcessEvent {
    Stdout(String),
    Stderr(String),
    Error(ProcessError),
    Exit(ExitOutcome),
}

type TextListener = Box<dyn FnMut(&str) + Send>;
type ErrorListener = Box<dyn FnMut(&ProcessError) + Send>;
type ExitListener = Box<dyn FnMut(&ExitOutcome) + Send>;

/// Listener lists, one per event category.
#[derive(Default)]
struct Observers {
    stdout: Vec<TextListener>,
    stderr: Vec<TextListener>,
    error: Vec<ErrorListener>,
    exit: Vec<ExitListener>,
}

impl Observers {
    fn dispatch(&mut self, event: &ProcessEvent) {
        match event {
            ProcessEvent::Stdout(text) => self.stdout.iter_mut().for_each(|f| f(text)),
            ProcessEvent::Stderr(text) => self.stderr.iter_mut().for_each(|f| f(text)),
            ProcessEvent::Error(err) => self.error.iter_mut().for_each(|f| f(err)),
            ProcessEvent::Exit(outcome) => self.exit.iter_mut().for_each(|f| f(outcome)),
        }
    }
}

/// A spawned operating-system process.
///
/// Observers are registered fluently and run in registration order:
///
/// ```ignore
/// let outcome = launcher
///     .spawn("/bin/echo", "", "hello world")
///     .on_output(|text| print!("{text}"))
///     .on_error(|err| eprintln!("{err}"))
///     .to_promise()
///     .await;
/// ```
#[must_use = "observers only run once the handle is awaited or detached"]
pub struct ProcessHandle {
    pid: Option<u32>,
    command_line: String,
    events: mpsc::UnboundedReceiver<ProcessEvent>,
    observers: Observers,
}

impl ProcessHandle {
    /// Spawns `command` and starts its reader and wait tasks.
    ///
    /// Launch failures do not surface here; they arrive as an `Error` event
    /// followed by an `Exit` event with no code and no signal.
    ///
    /// Must be called from within a Tokio runtime.
    pub(crate) fn start(mut command: Command, command_line: String, encoding: Encoding) -> Self {
        let (tx, events) = mpsc::unbounded_channel();

        let pid = match command.spawn() {
            Ok(mut child) => {
                let pid = child.id();
                trace!(cmd = %command_line, pid = ?pid, "spawned");

                let mut readers = Vec::with_capacity(2);
                if let Some(stdout) = child.stdout.take() {
                    readers.push(tokio::spawn(pump(
                        stdout,
                        encoding,
                        tx.clone(),
                        ProcessEvent::Stdout,
                    )));
                }
                if let Some(stderr) = child.stderr.take() {
                    readers.push(tokio::spawn(pump(
                        stderr,
                        encoding,
                        tx.clone(),
                        ProcessEvent::Stderr,
                    )));
                }

                tokio::spawn(drive(child, readers, tx, command_line.clone()));
                pid
            }
            Err(source) => {
                warn!(cmd = %command_line, error = %source, "failed to spawn");
                let _ = tx.send(ProcessEvent::Error(ProcessError::SpawnFailed {
                    command: command_line.clone(),
                    source,
                }));
                let _ = tx.send(ProcessEvent::Exit(ExitOutcome::default()));
                None
            }
        };

        Self {
            pid,
            command_line,
            events,
            observers: Observers::default(),
        }
    }

    /// OS process id, `None` if the launch failed.
    #[must_use]
    pub const fn pid(&self) -> Option<u32> {
        self.pid
    }

    /// Command line this handle was launched with (for display).
    #[must_use]
    pub fn command_line(&self) -> &str {
        &self.command_line
    }

    /// Registers a listener for the exit event.
    pub fn on_exit<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&ExitOutcome) + Send + 'static,
    {
        self.observers.exit.push(Box::new(listener));
        self
    }

    /// Registers a listener for decoded stdout chunks.
    pub fn on_output<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.observers.stdout.push(Box::new(listener));
        self
    }

    /// Registers a listener for decoded stderr chunks.
    pub fn on_error_output<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.observers.stderr.push(Box::new(listener));
        self
    }

    /// Registers a listener for launch and wait errors.
    pub fn on_error<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&ProcessError) + Send + 'static,
    {
        self.observers.error.push(Box::new(listener));
        self
    }

    /// Starts dispatching and returns a deferred exit outcome.
    ///
    /// Never rejects. Dispatch keeps running if the returned value is dropped.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn to_promise(self) -> Deferred<ExitOutcome, Infallible> {
        let dispatch = tokio::spawn(self.dispatch());
        Deferred::new(async move { Ok(dispatch.await.unwrap_or_default()) })
    }

    /// Starts dispatching without waiting for the outcome.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn detach(self) {
        drop(tokio::spawn(self.dispatch()));
    }

    async fn dispatch(mut self) -> ExitOutcome {
        while let Some(event) = self.events.recv().await {
            self.observers.dispatch(&event);
            if let ProcessEvent::Exit(outcome) = event {
                return outcome;
            }
        }
        ExitOutcome::default()
    }
}

impl fmt::Debug for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessHandle")
            .field("pid", &self.pid)
            .field("command_line", &self.command_line)
            .finish_non_exhaustive()
    }
}

/// Function form of [`ProcessHandle::to_promise`].
pub fn to_promise(handle: ProcessHandle) -> Deferred<ExitOutcome, Infallible> {
    handle.to_promise()
}

/// Reads a stream to EOF, forwarding decoded chunks.
async fn pump<R>(
    mut reader: R,
    encoding: Encoding,
    tx: mpsc::UnboundedSender<ProcessEvent>,
    wrap: fn(String) -> ProcessEvent,
) where
    R: AsyncRead + Unpin,
{
    let mut decoder = StreamDecoder::new(encoding);
    let mut buffer = vec![0u8; READ_CHUNK];

    loop {
        match reader.read(&mut buffer).await {
            Ok(0) => break,
            Ok(n) => {
                let text = decoder.decode(&buffer[..n]);
                if !text.is_empty() && tx.send(wrap(text)).is_err() {
                    // handle dropped without dispatching
                    return;
                }
            }
            Err(e) => {
                warn!(error = %e, "error reading process output");
                break;
            }
        }
    }

    let rest = decoder.finish();
    if !rest.is_empty() {
        let _ = tx.send(wrap(rest));
    }
}

/// Waits for the child, drains its readers, then emits the exit event.
async fn drive(
    mut child: Child,
    readers: Vec<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<ProcessEvent>,
    command_line: String,
) {
    let outcome = match child.wait().await {
        Ok(status) => ExitOutcome::from(status),
        Err(source) => {
            warn!(cmd = %command_line, error = %source, "failed waiting for process");
            let _ = tx.send(ProcessEvent::Error(ProcessError::Wait {
                command: command_line.clone(),
                source,
            }));
            ExitOutcome::default()
        }
    };

    for reader in readers {
        let _ = reader.await;
    }

    debug!(
        cmd = %command_line,
        exit_code = ?outcome.exit_code,
        signal = ?outcome.termination_signal,
        "exited"
    );
    let _ = tx.send(ProcessEvent::Exit(outcome));
}
