// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Chunk decoding for process output.
//!
//! ```text
//! chunk bytes --(Decoder, keeps partial sequences)--> UTF-8 text
//! EOF         --(finish)--> trailing text / U+FFFD
//! ```

use encoding_rs::{Decoder, IBM866, UTF_8, UTF_16LE, WINDOWS_1252};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Encoding of a child process's output streams.
///
/// - `Utf8`: UTF-8 (code page 65001)
/// - `Utf16Le`: UTF-16 LE (code page 1200)
/// - `Acp`: Active Code Page, typically Windows-1252
/// - `Oem`: OEM Code Page (IBM866)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    #[default]
    Utf8,
    Utf16Le,
    Acp,
    Oem,
}

impl Encoding {
    const fn codec(self) -> &'static encoding_rs::Encoding {
        match self {
            Self::Utf8 => UTF_8,
            Self::Utf16Le => UTF_16LE,
            Self::Acp => WINDOWS_1252,
            Self::Oem => IBM866,
        }
    }
}

/// Incremental decoder for one output stream.
///
/// Byte sequences split across chunks are held back until the rest arrives.
pub struct StreamDecoder {
    decoder: Decoder,
}

impl StreamDecoder {
    #[must_use]
    pub fn new(encoding: Encoding) -> Self {
        Self {
            decoder: encoding.codec().new_decoder_without_bom_handling(),
        }
    }

    /// Decodes a chunk, returning whatever text is complete so far.
    pub fn decode(&mut self, bytes: &[u8]) -> String {
        self.decode_inner(bytes, false)
    }

    /// Flushes pending bytes at end of stream.
    pub fn finish(&mut self) -> String {
        self.decode_inner(&[], true)
    }

    fn decode_inner(&mut self, bytes: &[u8], last: bool) -> String {
        let capacity = self
            .decoder
            .max_utf8_buffer_length(bytes.len())
            .unwrap_or_else(|| bytes.len().saturating_mul(3).saturating_add(16));
        let mut text = String::with_capacity(capacity);
        let (_result, _read, _had_errors) = self.decoder.decode_to_string(bytes, &mut text, last);
        text
    }
}

impl fmt::Debug for StreamDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamDecoder")
            .field("encoding", &self.decoder.encoding().name())
            .finish()
    }
}
