// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command operations using shell backend.
//!
//! ```text
//! cmd.rs --> ShellBackend --> git (clone, add, commit, checkout -B, push, remote)
//! ```

use crate::error::McbResult;
use std::path::Path;

use super::backend::{GitMutation, PushMode, ShellBackend};

/// Clone only `branch` of `url` into `dest`.
///
/// # Errors
///
/// Returns a `GitError` if the clone fails, e.g. the branch does not exist.
pub fn clone_branch(url: &str, dest: &Path, branch: &str) -> McbResult<()> {
    ShellBackend::clone_branch(url, dest, branch)
}

/// `git add --force <pathspec>`.
///
/// # Errors
///
/// Returns a `GitError` if staging fails.
pub fn stage_forced(repo_path: &Path, pathspec: &str) -> McbResult<()> {
    ShellBackend::stage_forced(repo_path, pathspec)
}

/// # Errors
///
/// Returns a `GitError` if the commit fails.
pub fn commit(repo_path: &Path, message: &str) -> McbResult<()> {
    ShellBackend::commit(repo_path, message)
}

/// `git checkout -B <branch>`.
///
/// # Errors
///
/// Returns a `GitError` if the branch cannot be created or checked out.
pub fn reset_branch(repo_path: &Path, branch: &str) -> McbResult<()> {
    ShellBackend::reset_branch(repo_path, branch)
}

/// # Errors
///
/// Returns a `GitError` if the push fails.
pub fn push(repo_path: &Path, remote: &str, branch: &str, mode: PushMode) -> McbResult<()> {
    ShellBackend::push(repo_path, remote, branch, mode)
}

/// Point `name` at `url`, adding the remote when it does not exist yet.
///
/// # Errors
///
/// Returns a `GitError` if listing, adding or updating the remote fails.
pub fn point_remote(repo_path: &Path, name: &str, url: &str) -> McbResult<()> {
    if ShellBackend::has_remote(repo_path, name)? {
        ShellBackend::set_remote_url(repo_path, name, url)
    } else {
        ShellBackend::add_remote(repo_path, name, url)
    }
}

/// URL of `remote`.
///
/// # Errors
///
/// Returns a `GitError` if no URL is configured for the remote.
pub fn remote_url(repo_path: &Path, remote: &str) -> McbResult<String> {
    ShellBackend::remote_url(repo_path, remote)
}

/// `git status --porcelain`; empty output means a clean tree.
///
/// # Errors
///
/// Returns a `GitError` if status fails.
pub fn status_porcelain(repo_path: &Path) -> McbResult<String> {
    ShellBackend::status_porcelain(repo_path)
}
