// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for process launching on posix hosts.

#![cfg(unix)]

use ionide_rs::core::platform::Platform;
use ionide_rs::core::process::{
    BufferSink, ExitOutcome, Launcher, LogSink, split_args, to_promise,
};
use std::sync::{Arc, Mutex};

fn launcher_in(root: &std::path::Path) -> Launcher {
    Launcher::builder()
        .with_workspace_root(root)
        .with_platform(Platform::Posix)
        .build()
}

// =============================================================================
// Streaming
// =============================================================================

#[tokio::test]
async fn process_prefix_runs_script() {
    let temp = tempfile::tempdir().unwrap();
    let script = temp.path().join("build.sh");
    std::fs::write(&script, "echo \"target=$1\"\necho \"extra=$2\"\n").unwrap();

    let sink = BufferSink::new();
    let writer = sink.clone();
    let outcome = to_promise(
        launcher_in(temp.path())
            .spawn(&script, "/bin/sh", r#""Release Build" --quiet"#)
            .on_output(move |text| writer.append(text)),
    )
    .await
    .unwrap();

    assert!(outcome.success());
    assert_eq!(sink.contents(), "target=Release Build\nextra=--quiet\n");
}

#[tokio::test]
async fn process_runs_in_workspace_root() {
    let temp = tempfile::tempdir().unwrap();
    let stdout = Arc::new(Mutex::new(String::new()));
    let writer = Arc::clone(&stdout);

    launcher_in(temp.path())
        .spawn("/bin/pwd", "", "-P")
        .on_output(move |text| writer.lock().unwrap().push_str(text))
        .to_promise()
        .await
        .unwrap();

    let expected = temp.path().canonicalize().unwrap();
    assert_eq!(stdout.lock().unwrap().trim_end(), expected.to_string_lossy());
}

#[tokio::test]
async fn process_large_output_arrives_complete() {
    let temp = tempfile::tempdir().unwrap();
    let total = Arc::new(Mutex::new(0usize));
    let counter = Arc::clone(&total);

    let outcome = launcher_in(temp.path())
        .spawn("/bin/sh", "", r#"-c "i=0; while [ $i -lt 2000 ]; do echo line-$i; i=$((i+1)); done""#)
        .on_output(move |text| *counter.lock().unwrap() += text.matches('\n').count())
        .to_promise()
        .await
        .unwrap();

    assert_eq!(outcome, ExitOutcome::with_code(0));
    assert_eq!(*total.lock().unwrap(), 2000);
}

// =============================================================================
// Collecting
// =============================================================================

#[tokio::test]
async fn exec_uses_raw_line() {
    let temp = tempfile::tempdir().unwrap();
    let output = launcher_in(temp.path())
        .exec("echo", "", "$((1 + 2)) | tr 3 x")
        .await
        .unwrap();

    assert!(output.is_success());
    assert_eq!(output.stdout, "x\n");
}

#[tokio::test]
async fn exec_prefix_is_prepended() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("tool.sh"), "echo ran $1\n").unwrap();

    let output = launcher_in(temp.path())
        .exec("tool.sh", "/bin/sh", "fast")
        .await
        .unwrap();
    assert_eq!(output.stdout, "ran fast\n");
}

// =============================================================================
// Tokenizer
// =============================================================================

#[test]
fn split_args_examples() {
    assert_eq!(split_args(""), Vec::<String>::new());
    assert_eq!(split_args("a b c"), vec!["a", "b", "c"]);
    assert_eq!(split_args(r#"a "b c" d"#), vec!["a", "b c", "d"]);
    assert_eq!(split_args("a  b"), vec!["a", "b"]);
    assert_eq!(split_args(r#"x "a b"#), vec!["x"]);
}
