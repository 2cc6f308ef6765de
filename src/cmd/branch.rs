// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `branch` command.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::ui::Operator;
use crate::workflow::{PublishOutcome, publish};

/// Publishes `workdir` and reports the outcome.
///
/// # Errors
///
/// Returns an error if publishing fails or the operator cannot be reached.
pub fn run_branch_command<R: BufRead, W: Write>(
    config: &Config,
    workdir: &Path,
    operator: &mut Operator<R, W>,
) -> Result<()> {
    match publish(config, workdir)? {
        PublishOutcome::NothingToCommit => {
            operator.success("Nothing to commit, the branch is already up to date.")?;
        }
        PublishOutcome::Pushed { branch, url } => {
            operator.success(&format!("Branch '{branch}' pushed: {url}"))?;
            operator.say("Copy this link, you will need it to restore the server.")?;
        }
    }
    operator.pause(config.global.pause)?;
    Ok(())
}
