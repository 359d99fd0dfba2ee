// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command-line splitting.
//!
//! ```text
//! a "b c" d   --split(' ')-->  [a] ["b] [c"] [d]
//!                               |    \   /    |
//!                               v     v v     v
//!                              "a"  "b c"   "d"
//! ```
//!
//! Only double quotes group fragments. Empty fragments outside a quoted
//! group are dropped; inside one they keep the extra space. A group still
//! open at the end of the input is dropped.
//!
//! Quotes are stripped only from fragments that open or close a group. A
//! fragment that does not start with `"` is kept verbatim, inner quotes
//! included: `a"b c` splits into `a"b` and `c`.

use std::borrow::Cow;
use tracing::trace;

/// Splits a raw command string into argument tokens.
///
/// # Example
/// ```
/// use ionide_rs::core::process::args::split_args;
///
/// assert_eq!(split_args(r#"a "b c" d"#), vec!["a", "b c", "d"]);
/// assert!(split_args("").is_empty());
/// ```
#[must_use]
pub fn split_args(input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }

    let mut tokens = Vec::new();
    let mut quoted: Option<String> = None;

    for fragment in input.split(' ') {
        if let Some(mut open) = quoted.take() {
            open.push(' ');
            open.push_str(fragment);
            if fragment.ends_with('"') {
                tokens.push(strip_quotes(&open));
            } else {
                quoted = Some(open);
            }
            continue;
        }

        if fragment.is_empty() {
            continue;
        }

        match (fragment.starts_with('"'), fragment.ends_with('"')) {
            (true, true) => tokens.push(strip_quotes(fragment)),
            (true, false) => quoted = Some(fragment.to_string()),
            _ => tokens.push(fragment.to_string()),
        }
    }

    if let Some(open) = quoted {
        trace!(fragment = %open, "dropping unterminated quoted argument");
    }

    tokens
}

fn strip_quotes(token: &str) -> String {
    token.replace('"', "")
}

/// Wraps an argument in double quotes when it contains a space.
#[must_use]
pub fn quote_if_spaced(arg: &str) -> Cow<'_, str> {
    if arg.contains(' ') {
        Cow::Owned(format!("\"{arg}\""))
    } else {
        Cow::Borrowed(arg)
    }
}

/// Joins a program and its arguments into a display command line.
#[must_use]
pub fn command_line(program: &str, args: &[String]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&quote_if_spaced(arg));
    }
    line
}
