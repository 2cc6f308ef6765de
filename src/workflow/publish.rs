// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Publish: save the working tree to the save branch and force-push it.

use anyhow::Context;
use std::path::Path;
use tracing::{debug, info};

use super::PublishOutcome;
use crate::config::Config;
use crate::error::Result;
use crate::git::{PushMode, RepoRef, cmd, query};

/// Stages everything under `workdir`, commits it and force-pushes the save
/// branch. A tree with nothing to commit is left untouched.
///
/// # Errors
///
/// Returns an error if `workdir` is not a git work tree, the remote has no
/// URL, or any git step fails. A failure after the commit leaves the commit
/// in place.
pub fn publish(config: &Config, workdir: &Path) -> Result<PublishOutcome> {
    let remote = config.remote.name.as_str();
    let branch = config.workflow.branch.as_str();

    query::ensure_work_tree(workdir)?;

    let remote_url = cmd::remote_url(workdir, remote)
        .with_context(|| format!("failed to read the URL of remote '{remote}'"))?;
    let repo = RepoRef::parse(&remote_url)?;

    match query::current_branch(workdir) {
        Ok(Some(current)) => info!(%current, save_branch = branch, repo = %repo, "publishing"),
        Ok(None) => info!(save_branch = branch, repo = %repo, "publishing from detached HEAD"),
        Err(e) => debug!(error = %e, "could not resolve current branch"),
    }

    cmd::stage_forced(workdir, ".").context("failed to stage the working tree")?;

    let status = cmd::status_porcelain(workdir)?;
    if status.is_empty() {
        info!("nothing to commit");
        return Ok(PublishOutcome::NothingToCommit);
    }
    debug!(changed = status.lines().count(), "staged changes");

    cmd::commit(workdir, &config.workflow.publish_message)
        .context("failed to commit the staged changes")?;
    cmd::reset_branch(workdir, branch)
        .with_context(|| format!("failed to switch to branch '{branch}'"))?;
    cmd::push(workdir, remote, branch, PushMode::Force)
        .with_context(|| format!("failed to push branch '{branch}' to '{remote}'"))?;

    let url = repo.branch_url(&config.remote.web_base, branch);
    info!(%url, "branch pushed");

    Ok(PublishOutcome::Pushed {
        branch: branch.to_string(),
        url,
    })
}
