// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The two operator workflows.
//!
//! ```text
//! publish (branch)                     restore (link)
//!   remote URL -> RepoRef                prompt -> StateStore -> RepoRef
//!   add --force .                        clone --branch B --single-branch
//!   status --porcelain --(empty)--> no-op    move <folder> into place
//!   commit                               remote set-url / add
//!   checkout -B B                        add --force <folder>, commit
//!   push -f                              checkout -B B, push -u
//! ```
//!
//! Both return typed outcomes; reporting and pausing are left to the caller.

pub mod publish;
pub mod restore;


use crate::git::RepoRef;

pub use publish::publish;
pub use restore::restore;

/// Result of a publish run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The tree was clean after staging; nothing was committed or pushed.
    NothingToCommit,
    /// A commit was made and force-pushed.
    Pushed {
        branch: String,
        /// Web address of the pushed branch, built from the remote URL.
        url: String,
    },
}

/// Result of a successful restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreReport {
    /// Repository the folder was restored from.
    pub repo: RepoRef,
    pub branch: String,
    /// URL the remote points at afterwards.
    pub remote_url: String,
}
