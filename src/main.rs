// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Split | Run | Exec | Shell | Settings | Fake
//! ```

use std::process::ExitCode;

use ionide_rs::cli::{self, Command};
use ionide_rs::cmd::exit_code;
use ionide_rs::cmd::fake::run_fake_command;
use ionide_rs::cmd::launch::{
    build_launcher, run_exec_command, run_run_command, run_shell_command,
};
use ionide_rs::cmd::settings::run_settings_command;
use ionide_rs::cmd::split::run_split_command;
use ionide_rs::logging::init_logging;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let _log_guard = match init_logging(&cli.global.log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

async fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let launcher = build_launcher(&cli.global);

    let result = match &cli.command {
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Split(args)) => run_split_command(args).map(|()| ExitCode::SUCCESS),
        Some(Command::Run(args)) => Ok(exit_code(&run_run_command(args, &launcher).await)),
        Some(Command::Exec(args)) => run_exec_command(args, &launcher)
            .await
            .map(|outcome| exit_code(&outcome)),
        Some(Command::Shell(args)) => Ok(exit_code(&run_shell_command(args, &launcher).await)),
        Some(Command::Settings) => {
            run_settings_command(launcher.workspace_root()).map(|()| ExitCode::SUCCESS)
        }
        Some(Command::Fake(args)) => Ok(exit_code(&run_fake_command(args, &launcher).await)),
        None => Err(anyhow::anyhow!(
            "No command specified. Use --help for usage information."
        )),
    };

    result.unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        ExitCode::FAILURE
    })
}
