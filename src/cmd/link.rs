// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `link` command.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::cli::LinkArgs;
use crate::config::Config;
use crate::error::Result;
use crate::ui::{Operator, REPO_PROMPT};
use crate::workflow::restore;

/// Restores the managed folder from the repository given with `--repo`, or
/// prompted for when absent, and reports the result.
///
/// # Errors
///
/// Returns an error if the restore fails or the operator cannot be reached.
pub async fn run_link_command<R: BufRead, W: Write>(
    args: &LinkArgs,
    config: &Config,
    workdir: &Path,
    operator: &mut Operator<R, W>,
) -> Result<()> {
    let reference = match &args.repo {
        Some(repo) => repo.clone(),
        None => operator.prompt(REPO_PROMPT)?,
    };

    let report = restore(config, workdir, &reference).await?;
    operator.success(&format!(
        "Restored '{}' from {} and pushed branch '{}'",
        config.workflow.folder, report.repo, report.branch
    ))?;
    operator.pause(config.global.pause)?;
    Ok(())
}
