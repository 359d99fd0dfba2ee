// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process launching and lifecycle events.
//!
//! ```text
//! Launcher::builder().with_workspace_root(..).with_platform(..)
//!   .spawn / .spawn_in_dir        --> ProcessHandle
//!        .on_output .on_error_output .on_error .on_exit
//!        .to_promise() --> Deferred<ExitOutcome>
//!        .detach()
//!   .spawn_with_notification(..)  --> LogSink
//!   .spawn_with_shell(host, ..)   --> TerminalHost::Terminal
//!   .exec(..)                     --> Deferred<ExecOutput>
//! ```

pub mod args;
pub mod decode;
pub mod handle;
pub mod launcher;
pub mod lookup;
pub mod sink;
pub mod terminal;

pub use args::split_args;
pub use handle::{ExitOutcome, ProcessEvent, ProcessHandle, to_promise};
pub use launcher::{ExecOutput, LaunchCommand, Launcher};
pub use sink::{BufferSink, ConsoleSink, LogSink, TracingSink};
pub use terminal::{DEFAULT_TERMINAL_NAME, InheritTerminal, TerminalHost, TerminalRequest};
