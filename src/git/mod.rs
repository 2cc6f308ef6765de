// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!        Public API
//!   query.rs   cmd.rs   repo_ref.rs
//!        \       |
//!         v      v
//!      ,------------------,
//!      | backend (traits) |
//!      '--+----------+----'
//!         |          |
//!         v          v
//!    GitQuery    GitMutation
//!   (gix, read)  (CLI, write)
//!         |          |
//!         v          v
//!    GixBackend  ShellBackend
//!    .is_repo    .clone_branch  .stage_forced
//!    .branch     .commit        .reset_branch
//!                .push          .set_remote_url
//! ```
//!
//! **`GixBackend`**: pure Rust, no subprocess, precondition checks.
//! **`ShellBackend`**: git CLI for every workflow step.

pub mod backend;
pub mod cmd;
pub mod query;
pub mod repo_ref;

pub use backend::PushMode;
pub use repo_ref::RepoRef;

#[cfg(test)]
mod tests;
