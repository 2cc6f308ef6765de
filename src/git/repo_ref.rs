// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository links as typed in by the operator.
//!
//! ```text
//! https://github.com/steve/survival.git   owner=steve  repo=survival
//! git@github.com:steve/survival.git       owner=steve  repo=survival
//! /srv/git/survival.git                   owner=git    repo=survival
//! survival                                owner=-      repo=survival
//! ```

use std::fmt;

use crate::error::GitError;

/// A parsed repository link. The original text is kept verbatim for git.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    url: String,
    owner: Option<String>,
    repo_name: String,
}

impl RepoRef {
    /// Parses a link, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `GitError::InvalidReference` for an empty link or one without
    /// a repository name.
    pub fn parse(reference: &str) -> Result<Self, GitError> {
        let url = reference.trim();
        if url.is_empty() {
            return Err(invalid(reference, "link is empty"));
        }

        let segments: Vec<&str> = url
            .split(['/', '\\', ':'])
            .filter(|segment| !segment.is_empty())
            .collect();

        let repo_name = segments
            .last()
            .map(|last| last.strip_suffix(".git").unwrap_or(last))
            .filter(|name| !name.is_empty())
            .ok_or_else(|| invalid(reference, "no repository name"))?;

        let owner = segments
            .len()
            .checked_sub(2)
            .map(|index| segments[index].to_string());

        Ok(Self {
            url: url.to_string(),
            owner,
            repo_name: repo_name.to_string(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    #[must_use]
    pub fn repo_name(&self) -> &str {
        &self.repo_name
    }

    /// Web address of `branch`, e.g. `https://github.com/steve/survival/tree/Minecraft_branch`.
    ///
    /// Built from the parsed parts only; the page is not checked to exist.
    #[must_use]
    pub fn branch_url(&self, web_base: &str, branch: &str) -> String {
        let base = web_base.trim_end_matches('/');
        match &self.owner {
            Some(owner) => format!("{base}/{owner}/{}/tree/{branch}", self.repo_name),
            None => format!("{base}/{}/tree/{branch}", self.repo_name),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

fn invalid(reference: &str, message: &str) -> GitError {
    GitError::InvalidReference {
        reference: reference.to_string(),
        message: message.to_string(),
    }
}
