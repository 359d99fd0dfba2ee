// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, ProcessError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::ParseError {
        path: "/work/.ionide".to_string(),
        message: "expected `=`".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"failed to parse config file '/work/.ionide': expected `=`");
}

#[test]
fn test_process_error_display() {
    let exit = ProcessError::NonZeroExit {
        command: "build.sh Build".to_string(),
        code: 2,
    };
    let signal = ProcessError::Terminated {
        command: "fsi".to_string(),
        signal: "SIGKILL".to_string(),
    };
    insta::assert_snapshot!(exit.to_string(), @"process 'build.sh Build' exited with code 2");
    insta::assert_snapshot!(signal.to_string(), @"process 'fsi' was terminated by SIGKILL");
}

#[test]
fn test_process_error_command() {
    let spawn = ProcessError::SpawnFailed {
        command: "missing-tool".to_string(),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    };
    let exit = ProcessError::NonZeroExit {
        command: "paket.exe install".to_string(),
        code: 1,
    };
    assert_eq!(spawn.command(), "missing-tool");
    assert_eq!(exit.command(), "paket.exe install");
}

#[test]
fn test_anyhow_keeps_source_chain() {
    let err = anyhow::Error::from(ProcessError::SpawnFailed {
        command: "fsi".to_string(),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    });
    assert!(err.downcast_ref::<ProcessError>().is_some());
    assert_eq!(err.chain().count(), 2);
}
