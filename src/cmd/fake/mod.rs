// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! FAKE build command implementation.
//!
//! ```text
//! .ionide [Fake]            fallback
//!   command       -->  build.cmd (windows) / build.sh (posix)
//!   linuxPrefix   -->  ""
//!   build         -->  ""  (overridden by the TARGET argument)
//!
//! <workspace>/<command> run in the workspace root, output streamed
//! ```

use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::launch::FakeArgs;
use crate::cmd::launch::stream_to_console;
use crate::core::platform::Platform;
use crate::core::process::{ExitOutcome, Launcher};
use crate::settings::{FakeSettings, load_or_default};

/// Resolved FAKE invocation for a workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeInvocation {
    pub location: PathBuf,
    pub prefix: String,
    pub target: String,
}

impl FakeInvocation {
    /// Combines `.ionide` settings with platform defaults.
    ///
    /// An explicit `target` wins over the configured `build` target.
    #[must_use]
    pub fn resolve(root: &Path, platform: Platform, target: Option<&str>) -> Self {
        let fake = load_or_default(root, |s| s.fake.clone(), FakeSettings::default());
        let command = fake
            .command
            .unwrap_or_else(|| default_script(platform).to_string());

        Self {
            location: root.join(command),
            prefix: fake.linux_prefix.unwrap_or_default(),
            target: target
                .map(str::to_string)
                .or(fake.build)
                .unwrap_or_default(),
        }
    }
}

/// Build script name used when `.ionide` does not name one.
#[must_use]
pub const fn default_script(platform: Platform) -> &'static str {
    match platform {
        Platform::Windows => "build.cmd",
        Platform::Posix => "build.sh",
    }
}

/// Handler for `fake`.
pub async fn run_fake_command(args: &FakeArgs, launcher: &Launcher) -> ExitOutcome {
    let invocation = FakeInvocation::resolve(
        launcher.workspace_root(),
        launcher.platform(),
        args.target.as_deref(),
    );
    info!(
        script = %invocation.location.display(),
        target = %invocation.target,
        "running FAKE"
    );

    let handle = launcher.spawn(
        &invocation.location,
        &invocation.prefix,
        &invocation.target,
    );
    stream_to_console(handle, "fake").await
}
