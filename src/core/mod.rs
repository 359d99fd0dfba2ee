// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for platform selection and process management.
//!
//! ```text
//!          core
//!           |
//!     +-----+------+
//!     |            |
//!     v            v
//!  platform     process
//!  Windows      args, launcher, handle
//!  Posix        sink, terminal, lookup
//! ```

pub mod platform;
pub mod process;
