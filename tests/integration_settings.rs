// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for `.ionide` settings loading.

use ionide_rs::settings::{SETTINGS_FILE, Settings, load_or_default};
use std::path::Path;

fn write_settings(root: &Path, content: &str) {
    std::fs::write(root.join(SETTINGS_FILE), content).expect("failed to write settings");
}

// =============================================================================
// Full files
// =============================================================================

#[test]
fn settings_full_file() {
    let temp = tempfile::tempdir().unwrap();
    write_settings(
        temp.path(),
        r#"
[Fake]
linuxPrefix = "mono"
command = "build.sh"
build = "Build"
test = "Test"

[WebPreview]
linuxPrefix = "mono"
command = "build.sh"
host = "localhost"
port = 8083
script = "build.fsx"
build = "Run"
startString = "listener started"
parameters = ["--fsiargs", "-d:WATCH"]
startingPage = ""
"#,
    );

    let settings = Settings::load(temp.path()).unwrap();
    insta::assert_snapshot!(serde_json::to_string_pretty(&settings).unwrap(), @r#"
    {
      "Fake": {
        "linuxPrefix": "mono",
        "command": "build.sh",
        "build": "Build",
        "test": "Test"
      },
      "WebPreview": {
        "linuxPrefix": "mono",
        "command": "build.sh",
        "host": "localhost",
        "port": 8083,
        "script": "build.fsx",
        "build": "Run",
        "startString": "listener started",
        "parameters": [
          "--fsiargs",
          "-d:WATCH"
        ],
        "startingPage": ""
      }
    }
    "#);
}

#[test]
fn settings_unknown_keys_ignored() {
    let settings = Settings::parse(
        r#"
[Fake]
command = "build.sh"
verbosity = "high"

[Other]
value = 1
"#,
    )
    .unwrap();
    assert_eq!(
        settings.fake.and_then(|f| f.command).as_deref(),
        Some("build.sh")
    );
}

#[test]
fn settings_empty_file() {
    let settings = Settings::parse("").unwrap();
    assert_eq!(settings, Settings::default());
}

// =============================================================================
// load_or_default
// =============================================================================

#[test]
fn load_or_default_reads_each_field() {
    let temp = tempfile::tempdir().unwrap();
    write_settings(
        temp.path(),
        "[WebPreview]\nhost = \"0.0.0.0\"\nport = 5000\n",
    );

    let host = load_or_default(
        temp.path(),
        |s| s.web_preview.as_ref()?.host.clone(),
        "localhost".to_string(),
    );
    let port = load_or_default(temp.path(), |s| s.web_preview.as_ref()?.port, 8083);
    let page = load_or_default(
        temp.path(),
        |s| s.web_preview.as_ref()?.starting_page.clone(),
        "index.html".to_string(),
    );

    assert_eq!(host, "0.0.0.0");
    assert_eq!(port, 5000);
    assert_eq!(page, "index.html");
}

#[test]
fn load_or_default_without_workspace() {
    let missing = Path::new("/nonexistent/ionide/workspace");
    let parameters = load_or_default(
        missing,
        |s| s.web_preview.as_ref()?.parameters.clone(),
        Vec::new(),
    );
    assert!(parameters.is_empty());
}

#[test]
fn load_or_default_directory_named_like_settings() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::create_dir(temp.path().join(SETTINGS_FILE)).unwrap();
    let command = load_or_default(
        temp.path(),
        |s| s.fake.as_ref()?.command.clone(),
        "build.cmd".to_string(),
    );
    assert_eq!(command, "build.cmd");
}
