// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Branch | Link | Options | Version
//!                                  |
//!                     error? --> report, pause, exit 1
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use mcbranch::cli::global::GlobalOptions;
use mcbranch::cli::{self, Command};
use mcbranch::cmd::branch::run_branch_command;
use mcbranch::cmd::config::run_options_command;
use mcbranch::cmd::link::run_link_command;
use mcbranch::config::loader::ConfigLoader;
use mcbranch::config::{CONFIG_FILE_NAME, Config, ENV_PREFIX};
use mcbranch::logging::{LogConfig, init_logging};
use mcbranch::ui::{self, Operator};

use anyhow::Context;
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let mut operator = Operator::stdio();
    let pause_on_error = !cli.global.no_pause;

    let (config, config_files, workdir) = match prepare(&cli.global) {
        Ok(prepared) => prepared,
        Err(e) => return report_failure(&e, &mut operator, pause_on_error),
    };

    let _log_guard = match init_logging(&LogConfig::from(&config.global)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match &cli.command {
        Some(Command::Branch) => run_branch_command(&config, &workdir, &mut operator),
        Some(Command::Link(args)) => {
            run_link_command(args, &config, &workdir, &mut operator).await
        }
        Some(Command::Options) => {
            run_options_command(&config, &config_files);
            Ok(())
        }
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        None => Err(anyhow::anyhow!(
            "No command specified. Use --help for usage information."
        )),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(&e, &mut operator, config.global.pause),
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

/// Resolves the working tree and loads the configuration found there.
fn prepare(global: &GlobalOptions) -> mcbranch::error::Result<(Config, Vec<String>, PathBuf)> {
    let workdir = resolve_workdir(global.dir.as_deref())?;
    let loader = build_config_loader(global, &workdir)?;
    let config_files = loader.describe_sources();
    let config = loader.build().context("failed to load configuration")?;
    Ok((config, config_files, workdir))
}

fn resolve_workdir(dir: Option<&Path>) -> mcbranch::error::Result<PathBuf> {
    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("failed to read the current directory")?,
    };
    std::path::absolute(&dir)
        .with_context(|| format!("failed to resolve working directory {}", dir.display()))
}

fn build_config_loader(
    global: &GlobalOptions,
    workdir: &Path,
) -> mcbranch::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().discover(workdir.join(CONFIG_FILE_NAME));
    for config_path in &global.configs {
        loader = loader.file(config_path);
    }
    global.apply_overrides(loader.with_env_prefix(ENV_PREFIX))
}

/// Prints the full error chain in the error gradient and waits for Enter.
fn report_failure<R, W>(
    error: &anyhow::Error,
    operator: &mut Operator<R, W>,
    pause: bool,
) -> ExitCode
where
    R: std::io::BufRead,
    W: std::io::Write,
{
    eprintln!(
        "{}",
        ui::error_text(&format!("Error: {error:#}"), ui::color_enabled())
    );
    let _ = operator.pause(pause);
    ExitCode::FAILURE
}
