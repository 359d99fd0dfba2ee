// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use crate::core::platform::Platform;
use crate::logging::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["ionide", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
    assert!(cli.global.workspace.is_none());
}

#[test]
fn test_parse_split_line() {
    let cli = Cli::try_parse_from(["ionide", "split", "build \"my target\" --quiet"]).unwrap();
    let Some(Command::Split(args)) = cli.command else {
        panic!("expected split");
    };
    insta::assert_snapshot!(args.line, @r#"build "my target" --quiet"#);
}

#[test]
fn test_parse_run_with_prefix() {
    let cli = Cli::try_parse_from([
        "ionide",
        "run",
        "packages/FAKE/tools/FAKE.exe",
        "--prefix",
        "mono",
        "--args",
        "-d:RELEASE build.fsx",
        "--in-dir",
    ])
    .unwrap();
    let Some(Command::Run(run)) = cli.command else {
        panic!("expected run");
    };
    assert_eq!(run.launch.location, "packages/FAKE/tools/FAKE.exe");
    assert_eq!(run.launch.prefix, "mono");
    assert_eq!(run.launch.args, "-d:RELEASE build.fsx");
    assert!(run.in_dir);
}

#[test]
fn test_parse_exec_defaults() {
    let cli = Cli::try_parse_from(["ionide", "exec", "paket.exe"]).unwrap();
    let Some(Command::Exec(launch)) = cli.command else {
        panic!("expected exec");
    };
    assert_eq!(launch.prefix, "");
    assert_eq!(launch.args, "");
}

#[test]
fn test_parse_global_options_after_command() {
    let cli = Cli::try_parse_from([
        "ionide",
        "fake",
        "Test",
        "-w",
        "/src/app",
        "--platform",
        "posix",
        "-l",
        "4",
    ])
    .unwrap();

    assert_eq!(cli.global.workspace_root(), PathBuf::from("/src/app"));
    assert_eq!(cli.global.platform(), Platform::Posix);
    assert_eq!(cli.global.log_config().console_level(), LogLevel::DEBUG);
    let Some(Command::Fake(fake)) = cli.command else {
        panic!("expected fake");
    };
    assert_eq!(fake.target.as_deref(), Some("Test"));
}

#[test]
fn test_log_level_range_enforced() {
    assert!(Cli::try_parse_from(["ionide", "-l", "6", "version"]).is_err());
}

#[test]
fn test_unknown_platform_rejected() {
    assert!(Cli::try_parse_from(["ionide", "--platform", "amiga", "settings"]).is_err());
}

#[test]
fn test_default_platform_is_host() {
    let cli = Cli::try_parse_from(["ionide", "settings"]).unwrap();
    assert_eq!(cli.global.platform(), Platform::current());
    assert!(cli.global.log_config().log_file().is_none());
}
