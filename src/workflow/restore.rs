// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Restore: pull the managed folder out of another repository's save branch
//! and publish it from this one.
//!
//! ```text
//! <workdir>/
//!   .survival-a1B2c3/            temporary clone, removed on every path
//!     servidor_minecraft/  --+
//!   servidor_minecraft/    <-+   replaced wholesale
//! ```

use anyhow::{Context, bail};
use std::path::Path;
use tracing::{debug, info};

use super::RestoreReport;
use crate::config::Config;
use crate::error::{FsError, McbError, Result};
use crate::git::{PushMode, RepoRef, cmd, query};
use crate::state::StateStore;
use crate::utility::fs::move_dir;

/// Restores the managed folder from the save branch of `reference`, points
/// the remote at `reference` and pushes the result.
///
/// # Errors
///
/// Returns an error if `reference` is empty, `workdir` is not a git work tree,
/// the clone fails, the cloned branch lacks the managed folder, or any later
/// git or filesystem step fails.
pub async fn restore(config: &Config, workdir: &Path, reference: &str) -> Result<RestoreReport> {
    let remote = config.remote.name.as_str();
    let branch = config.workflow.branch.as_str();
    let folder = config.workflow.folder.as_str();

    let reference = reference.trim();
    if reference.is_empty() {
        bail!("no repository link given");
    }
    query::ensure_work_tree(workdir)?;

    let store = StateStore::new(config.state.resolved_dir());
    let record = store
        .create(reference)
        .context("failed to record the repository link")?;
    let url = record.read()?;
    debug!(path = %record.path().display(), %url, "repository link recorded");

    let repo = RepoRef::parse(&url)?;

    let clone = tempfile::Builder::new()
        .prefix(&format!(".{}-", repo.repo_name()))
        .tempdir_in(workdir)
        .with_context(|| format!("failed to create a clone directory in {}", workdir.display()))?;

    info!(repo = %repo, branch, "cloning");
    cmd::clone_branch(&url, clone.path(), branch)
        .with_context(|| format!("failed to clone branch '{branch}' of {repo}"))?;

    let source = clone.path().join(folder);
    if !source.is_dir() {
        return Err(McbError::from(FsError::NotFound(source.display().to_string())))
            .with_context(|| format!("branch '{branch}' of {repo} has no '{folder}' folder"));
    }

    let target = workdir.join(folder);
    move_dir(&source, &target, config.transfer.retry_policy())
        .await
        .with_context(|| format!("failed to move '{folder}' into {}", workdir.display()))?;
    info!(dest = %target.display(), "folder restored");

    let clone_path = clone.path().to_path_buf();
    clone
        .close()
        .with_context(|| format!("failed to remove {}", clone_path.display()))?;

    let remote_url = record.read()?;
    cmd::point_remote(workdir, remote, &remote_url)
        .with_context(|| format!("failed to point remote '{remote}' at {remote_url}"))?;
    record.delete()?;

    cmd::stage_forced(workdir, folder).with_context(|| format!("failed to stage '{folder}'"))?;
    cmd::commit(workdir, &config.workflow.restore_message(repo.repo_name()))
        .context("failed to commit the restored folder")?;
    cmd::reset_branch(workdir, branch)
        .with_context(|| format!("failed to switch to branch '{branch}'"))?;
    cmd::push(workdir, remote, branch, PushMode::SetUpstream)
        .with_context(|| format!("failed to push branch '{branch}' to '{remote}'"))?;
    info!(repo = %repo, branch, "restore pushed");

    Ok(RestoreReport {
        repo,
        branch: branch.to_string(),
        remote_url,
    })
}
