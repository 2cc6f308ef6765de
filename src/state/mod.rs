// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Transient record carrying the operator's repository link through a restore.
//!
//! ```text
//! StateStore::create(url) --> mcbranch-repo-XXXXXX.json  { "repo_url": url }
//!                                |
//!        StateRecord::read() <---+  (right away, and again after the clone)
//!                                |
//!        StateRecord::delete() --+  (or Drop, if the workflow bailed early)
//! ```
//!
//! Every invocation gets its own file name, so two restores started from the
//! same directory never read each other's record.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{McbResult, StateError};

/// On-disk shape of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRecord {
    pub repo_url: String,
}

/// Creates records in one directory.
#[derive(Debug, Clone)]
pub struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `{ "repo_url": repo_url }` to a fresh file and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns `StateError` if the directory or file cannot be written.
    pub fn create(&self, repo_url: &str) -> McbResult<StateRecord> {
        std::fs::create_dir_all(&self.dir).map_err(|e| StateError::io(&self.dir, e))?;

        let file = tempfile::Builder::new()
            .prefix("mcbranch-repo-")
            .suffix(".json")
            .tempfile_in(&self.dir)
            .map_err(|e| StateError::io(&self.dir, e))?;
        let (mut file, path) = file.keep().map_err(|e| StateError::io(&self.dir, e.error))?;

        let record = RepoRecord {
            repo_url: repo_url.to_string(),
        };
        // The handle exists before the write so a failed write still cleans up.
        let handle = StateRecord {
            path,
            deleted: false,
        };
        serde_json::to_writer(&mut file, &record).map_err(|source| StateError::Json {
            path: handle.path.display().to_string(),
            source,
        })?;

        debug!(path = %handle.path.display(), "state record created");
        Ok(handle)
    }
}

/// Handle to one record file. Removes the file on drop unless already deleted.
#[derive(Debug)]
pub struct StateRecord {
    path: PathBuf,
    deleted: bool,
}

impl StateRecord {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored repository link back.
    ///
    /// # Errors
    ///
    /// Returns `StateError` if the file is missing or not a valid record.
    pub fn read(&self) -> McbResult<String> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| StateError::io(&self.path, e))?;
        let record: RepoRecord =
            serde_json::from_str(&content).map_err(|source| StateError::Json {
                path: self.path.display().to_string(),
                source,
            })?;
        Ok(record.repo_url)
    }

    /// Removes the file. Already-missing files are fine.
    ///
    /// # Errors
    ///
    /// Returns `StateError::Io` if the file exists but cannot be removed.
    pub fn delete(mut self) -> McbResult<()> {
        self.deleted = true;
        remove_if_present(&self.path).map_err(|e| StateError::io(&self.path, e).into())
    }
}

impl Drop for StateRecord {
    fn drop(&mut self) {
        if self.deleted {
            return;
        }
        if let Err(e) = remove_if_present(&self.path) {
            warn!(path = %self.path.display(), error = %e, "failed to remove state record");
        }
    }
}

fn remove_if_present(path: &Path) -> std::io::Result<()> {
    match std::fs::remove_file(path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
