// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read)     --> GixBackend (pure Rust gix)
//! GitMutation (write) --> ShellBackend (git CLI)
//! ```

use std::path::Path;
use std::process::Command;
use tracing::debug;

use crate::error::{GitError, GixError, McbResult, ProcessError};

// --- Query Trait (Read-only operations) ---

/// Read-only git query operations.
pub trait GitQuery {
    /// Check if path is inside a git work tree.
    fn is_git_repo(path: &Path) -> bool;

    /// Get current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or head resolution fails.
    fn current_branch(path: &Path) -> McbResult<Option<String>>;
}

// --- Mutation Trait (Write operations) ---

/// How a branch is pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushMode {
    /// `push -f`: overwrite whatever the remote branch holds.
    Force,
    /// `push -u`: regular push that also records the upstream.
    SetUpstream,
}

/// Git mutation operations that modify repository or remote state.
pub trait GitMutation {
    /// Clone a single branch, depth 1, into `dest`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the clone fails or the name of `dest` is not valid UTF-8.
    fn clone_branch(url: &str, dest: &Path, branch: &str) -> McbResult<()>;

    /// Stage `pathspec`, including files matched by ignore rules.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `git add` fails.
    fn stage_forced(repo_path: &Path, pathspec: &str) -> McbResult<()>;

    /// Commit staged changes.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the commit fails, e.g. nothing is staged.
    fn commit(repo_path: &Path, message: &str) -> McbResult<()>;

    /// Create or reset `branch` at HEAD and check it out.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `git checkout -B` fails.
    fn reset_branch(repo_path: &Path, branch: &str) -> McbResult<()>;

    /// Push `branch` to `remote`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the push is rejected or the remote is unreachable.
    fn push(repo_path: &Path, remote: &str, branch: &str, mode: PushMode) -> McbResult<()>;

    /// Add a remote.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the remote already exists.
    fn add_remote(repo_path: &Path, name: &str, url: &str) -> McbResult<()>;

    /// Point an existing remote at `url`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the remote does not exist.
    fn set_remote_url(repo_path: &Path, name: &str, url: &str) -> McbResult<()>;
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix.
///
/// Read-only checks without spawning a subprocess.
pub struct GixBackend;

impl GitQuery for GixBackend {
    fn is_git_repo(path: &Path) -> bool {
        gix::discover(path).is_ok_and(|repo| repo.workdir().is_some())
    }

    fn current_branch(path: &Path) -> McbResult<Option<String>> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend using git CLI.
///
/// Every workflow step goes through here so the operator sees exactly what
/// git reported when a step fails.
pub struct ShellBackend;

impl ShellBackend {
    /// Execute a git command and return its trimmed stdout.
    /// Sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`.
    ///
    /// A non-zero exit becomes `GitError::CommandFailed` carrying git's
    /// stderr (or stdout, for commands like `commit` that report there).
    /// The failure is only logged at DEBUG; reporting it is up to the caller.
    pub(crate) fn git_command(args: &[&str], cwd: &Path) -> McbResult<String> {
        let git = which::which("git").map_err(|_| ProcessError::ExecutableNotFound {
            name: "git".to_string(),
        })?;
        let command_line = format!("git {}", args.join(" "));

        debug!(cwd = %cwd.display(), "cd");
        debug!(cmd = %command_line, "exec");

        let output = Command::new(git)
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|source| ProcessError::SpawnFailed {
                command: command_line.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                stderr
            };
            debug!(cmd = %command_line, code = ?output.status.code(), %message, "git failed");
            return Err(GitError::CommandFailed {
                command: command_line,
                message,
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// URL configured for `remote`.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommandFailed` if the remote has no URL.
    pub fn remote_url(repo_path: &Path, remote: &str) -> McbResult<String> {
        let key = format!("remote.{remote}.url");
        Self::git_command(&["config", "--get", &key], repo_path)
    }

    /// Whether a remote named `name` exists.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `git remote` fails.
    pub fn has_remote(repo_path: &Path, name: &str) -> McbResult<bool> {
        let remotes = Self::git_command(&["remote"], repo_path)?;
        Ok(remotes.lines().any(|line| line.trim() == name))
    }

    /// Machine-readable status; empty when there is nothing to commit.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `git status` fails.
    pub fn status_porcelain(repo_path: &Path) -> McbResult<String> {
        Self::git_command(&["status", "--porcelain"], repo_path)
    }
}

impl GitMutation for ShellBackend {
    fn clone_branch(url: &str, dest: &Path, branch: &str) -> McbResult<()> {
        let dest_name = dest
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| GitError::InvalidPath(dest.display().to_string()))?;
        let parent = dest
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        Self::git_command(
            &[
                "clone",
                "--quiet",
                "--depth",
                "1",
                "--branch",
                branch,
                "--single-branch",
                "--",
                url,
                dest_name,
            ],
            parent,
        )?;
        Ok(())
    }

    fn stage_forced(repo_path: &Path, pathspec: &str) -> McbResult<()> {
        Self::git_command(&["add", "--force", pathspec], repo_path)?;
        Ok(())
    }

    fn commit(repo_path: &Path, message: &str) -> McbResult<()> {
        Self::git_command(&["commit", "-m", message], repo_path)?;
        Ok(())
    }

    fn reset_branch(repo_path: &Path, branch: &str) -> McbResult<()> {
        Self::git_command(&["checkout", "-q", "-B", branch], repo_path)?;
        Ok(())
    }

    fn push(repo_path: &Path, remote: &str, branch: &str, mode: PushMode) -> McbResult<()> {
        let flag = match mode {
            PushMode::Force => "-f",
            PushMode::SetUpstream => "-u",
        };
        Self::git_command(&["push", "--quiet", flag, remote, branch], repo_path)?;
        Ok(())
    }

    fn add_remote(repo_path: &Path, name: &str, url: &str) -> McbResult<()> {
        Self::git_command(&["remote", "add", name, url], repo_path)?;
        Ok(())
    }

    fn set_remote_url(repo_path: &Path, name: &str, url: &str) -> McbResult<()> {
        Self::git_command(&["remote", "set-url", name, url], repo_path)?;
        Ok(())
    }
}
