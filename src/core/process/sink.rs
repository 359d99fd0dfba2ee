// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Append-only text sinks for streamed process output.

use std::io::Write as _;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Destination for text produced by a running process.
pub trait LogSink: Send + Sync {
    fn append(&self, text: &str);
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn append(&self, text: &str) {
        (**self).append(text);
    }
}

/// Forwards output to `tracing` at debug level, one event per non-empty line.
#[derive(Debug, Clone)]
pub struct TracingSink {
    channel: String,
}

impl TracingSink {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
        }
    }

    #[must_use]
    pub fn channel(&self) -> &str {
        &self.channel
    }
}

impl LogSink for TracingSink {
    fn append(&self, text: &str) {
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            debug!(channel = %self.channel, "{line}");
        }
    }
}

/// In-memory sink; clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    buffer: Arc<Mutex<String>>,
}

impl BufferSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything appended so far.
    #[must_use]
    pub fn contents(&self) -> String {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LogSink for BufferSink {
    fn append(&self, text: &str) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_str(text);
    }
}

/// Writes output straight to this process's stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn append(&self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::{BufferSink, LogSink, TracingSink};
    use std::sync::Arc;

    #[test]
    fn test_buffer_sink_shared_between_clones() {
        let sink = BufferSink::new();
        let writer = sink.clone();
        writer.append("restoring packages\n");
        writer.append("done");
        assert_eq!(sink.contents(), "restoring packages\ndone");
    }

    #[test]
    fn test_tracing_sink_accepts_partial_lines() {
        let sink = TracingSink::new("paket");
        sink.append("Resolving packages");
        sink.append("\n\n  \ndone\n");
        assert_eq!(sink.channel(), "paket");
    }

    #[test]
    fn test_arc_sink_forwards() {
        let sink = BufferSink::new();
        let shared: Arc<dyn LogSink> = Arc::new(sink.clone());
        shared.append("x");
        assert_eq!(sink.contents(), "x");
    }
}
