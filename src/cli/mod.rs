// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for mcbranch using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! mcbranch [global options] <command>
//! branch            (publish)
//! link [--repo URL] (restore)
//! options
//! version
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{Args, Parser, Subcommand};

/// Minecraft server branch helper
///
/// Saves and restores a Minecraft server folder through a git branch.
#[derive(Debug, Parser)]
#[command(
    name = "mcbranch",
    author,
    version,
    about = "Minecraft server branch helper",
    long_about = "mcbranch Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Saves the servidor_minecraft folder of a git working tree to the\n\
                  Minecraft_branch branch, and restores it from another repository.\n\n\
                  Run `mcbranch branch` to publish the current tree, or\n\
                  `mcbranch link` to restore the folder from a repository link.",
    after_help = "CONFIG FILES:\n\n\
                  mcbranch reads `mcbranch.toml` from the working directory when it\n\
                  exists. Additional files can be given with --config, later files\n\
                  override earlier ones. MCBRANCH_<SECTION>__<KEY> environment\n\
                  variables override both, e.g. MCBRANCH_WORKFLOW__BRANCH=Saves."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Commits the working tree and force-pushes the save branch.
    #[command(visible_alias = "publish")]
    Branch,

    /// Restores the server folder from another repository's save branch.
    #[command(visible_alias = "restore")]
    Link(LinkArgs),

    /// Lists all options and their effective values.
    Options,

    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,
}

/// Arguments for `link`.
#[derive(Debug, Clone, Default, Args)]
pub struct LinkArgs {
    /// Repository link; prompted for when omitted.
    #[arg(short = 'r', long = "repo", value_name = "URL")]
    pub repo: Option<String>,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
