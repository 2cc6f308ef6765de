// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git query operations using gix backend.
//!
//! ```text
//! query.rs --> GixBackend --> .git/ (no subprocess)
//! ```

use crate::error::{GitError, McbResult};
use std::path::Path;

use super::backend::{GitQuery, GixBackend};

#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    GixBackend::is_git_repo(path)
}

/// Fails with `GitError::NotARepository` unless `path` is in a work tree.
///
/// # Errors
///
/// Returns `GitError::NotARepository` when `path` is not inside a work tree.
pub fn ensure_work_tree(path: &Path) -> McbResult<()> {
    if is_git_repo(path) {
        Ok(())
    } else {
        Err(GitError::NotARepository {
            path: path.display().to_string(),
        }
        .into())
    }
}

/// Get current branch name (None if HEAD is detached).
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or head resolution fails.
pub fn current_branch(path: &Path) -> McbResult<Option<String>> {
    GixBackend::current_branch(path)
}
