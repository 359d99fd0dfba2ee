// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                               run / exec / fake
//!                +----------+----------+
//!                           v
//!         ,------------------------------------,
//!         |  settings          .ionide (TOML)  |
//!         '-----------------+------------------'
//!                           v
//!   +-----------------------------------------------+
//!   |  core   platform, process (launcher, handle,  |
//!   |         args, sinks, terminal, lookup)        |
//!   +-----------------------------------------------+
//!   |  foundation   deferred, error, logging        |
//!   +-----------------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod core;
pub mod deferred;
pub mod error;
pub mod logging;
pub mod settings;
